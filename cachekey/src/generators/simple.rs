use std::{any::Any, borrow::Cow};

use tracing::trace;

use crate::{Key, KeyGenerator, Method, Param, SimpleKey};

/// Generate a key from the parameters of a call.
///
/// * No params: the shared [EMPTY](crate::EMPTY) key.
/// * One param that is neither null nor a sequence (array or bytes): the
///   param itself.
/// * Otherwise: a [SimpleKey] over a copy of `params`.
///
/// # Examples
/// ```
/// use cachekey::{generate_key, params, Key, KeyKind, Param};
///
/// assert_eq!(generate_key(&[]).kind(), KeyKind::Empty);
/// assert_eq!(generate_key(&params![42]), Key::Param(Param::Int(42)));
/// assert_eq!(generate_key(&params![Param::Null]).kind(), KeyKind::Composite);
/// ```
pub fn generate_key(params: &[Param]) -> Key {
    let key = match params {
        [] => Key::empty(),
        [param] if !param.is_null() && !param.is_sequence() => Key::Param(param.clone()),
        _ => Key::Composite(Cow::Owned(SimpleKey::new(params.to_vec()))),
    };

    trace!(params = params.len(), kind = ?key.kind(), "Generated cache key");
    key
}

/// Key generator that only looks at the call's params.
///
/// The target and method are ignored: two methods called with equal params
/// share a key. Wrap this generator if the key must tell call sites apart.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleKeyGenerator;

impl KeyGenerator for SimpleKeyGenerator {
    fn generate(&self, _target: &dyn Any, _method: &Method, params: &[Param]) -> Key {
        generate_key(params)
    }
}
