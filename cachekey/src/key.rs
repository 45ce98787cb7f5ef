use std::{borrow::Cow, fmt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{simple_key::EMPTY, Error, Param, Result, SimpleKey};

/// The shape of a [Key].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// A composite key without params.
    Empty,
    /// A single param used as the key.
    Param,
    /// A composite key with params.
    Composite,
}

/// A cache key produced by a [KeyGenerator](crate::KeyGenerator).
///
/// A bare param never equals a composite key, even one wrapping that param.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Key {
    Param(Param),
    Composite(Cow<'static, SimpleKey>),
}

impl Key {
    /// The key for a call with no arguments, borrowing [EMPTY].
    pub fn empty() -> Key {
        Key::Composite(Cow::Borrowed(&EMPTY))
    }

    pub fn kind(&self) -> KeyKind {
        match self {
            Key::Param(_) => KeyKind::Param,
            Key::Composite(key) if key.is_empty() => KeyKind::Empty,
            Key::Composite(_) => KeyKind::Composite,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.kind() == KeyKind::Empty
    }

    pub fn as_param(&self) -> Option<&Param> {
        match self {
            Key::Param(param) => Some(param),
            Key::Composite(_) => None,
        }
    }

    pub fn as_simple_key(&self) -> Option<&SimpleKey> {
        match self {
            Key::Param(_) => None,
            Key::Composite(key) => Some(key),
        }
    }

    /// Unwrap a single-param key.
    pub fn into_param(self) -> Result<Param> {
        match self {
            Key::Param(param) => Ok(param),
            Key::Composite(_) => Err(Error::NotAParam),
        }
    }
}

impl From<Param> for Key {
    fn from(param: Param) -> Self {
        Key::Param(param)
    }
}

impl From<SimpleKey> for Key {
    fn from(key: SimpleKey) -> Self {
        Key::Composite(Cow::Owned(key))
    }
}

impl TryFrom<Key> for Param {
    type Error = Error;

    fn try_from(key: Key) -> Result<Self> {
        key.into_param()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Param(param) => fmt::Display::fmt(param, f),
            Key::Composite(key) => fmt::Display::fmt(key, f),
        }
    }
}
