//! # cachekey
//!
//! `cachekey` derives cache lookup keys from the parameters of a method call. It is the default key strategy of a caching layer that intercepts calls, and it is deliberately small: the key depends on the call's arguments only, never on the receiver or the method that was called.
//!
//! The key policy is:
//!
//! * **No arguments**: the shared [`EMPTY`] key is returned. Every zero-argument call collapses onto the same instance and nothing is allocated.
//! * **One argument**: if it is neither [`Param::Null`] nor a sequence ([`Param::Array`] or [`Param::Bytes`]), the argument itself is the key. Its own equality and hash are reused, so callers can address a cache entry with the plain argument value.
//! * **Anything else**: the arguments are copied into a [`SimpleKey`], which compares its elements in order.
//!
//! Arguments are dynamically typed [`Param`] values. Scalars, strings, byte strings and arrays are built in, and any user type that is `Eq + Hash + Debug + Send + Sync` can be passed through [`Param::custom`].
//!
//! ## Usage
//!
//! Add `cachekey` to your `Cargo.toml` dependencies:
//!
//! ```bash,no_run
//! cargo add cachekey
//! ```
//!
//! Then generate keys from call arguments:
//!
//! ```
//! use cachekey::{generate_key, params, Key, Param};
//!
//! let key = generate_key(&params![42]);
//! assert_eq!(key, Key::Param(Param::Int(42)));
//!
//! let key = generate_key(&params!["user", 7]);
//! assert_eq!(key.to_string(), "SimpleKey [user,7]");
//! ```
//!
//! Or plug the [`SimpleKeyGenerator`] in wherever a [`KeyGenerator`] is expected:
//!
//! ```
//! use cachekey::{params, KeyGenerator, Method, SimpleKeyGenerator};
//!
//! struct UserService;
//!
//! let generator = SimpleKeyGenerator;
//! let method = Method::new("UserService", "find_by_name");
//! let key = generator.generate(&UserService, &method, &params!["alice"]);
//! assert_eq!(key.to_string(), "alice");
//! ```
//!
//! ## Features
//!
//! * `serde`: implements `Serialize` and `Deserialize` for [`Param`], [`SimpleKey`] and [`Key`]. Custom params cannot be serialized. Formats without NaN (such as JSON) cannot round-trip a NaN float: `serde_json` writes it as `null` and rejects it on the way back.
//!
//! ## License
//!
//! cachekey is licensed under the MIT license.
//!

#[cfg(test)]
mod test_utils;

mod error;
mod generators;
mod key;
mod macros;
mod method;
mod param;
mod simple_key;
mod traits;

pub(crate) use error::Result;

// Export basic types
pub use error::Error;
pub use generators::{generate_key, SimpleKeyGenerator};
pub use key::{Key, KeyKind};
pub use method::Method;
pub use param::{Param, ParamKind, ParamValue};
pub use simple_key::{SimpleKey, EMPTY};
pub use traits::{CacheKey, KeyGenerator};

// README doctests
#[doc = include_str!("../../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
