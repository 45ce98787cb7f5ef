use std::borrow::Cow;

use crate::{Key, Param, SimpleKey};

/// A key that can be rendered for string-keyed stores.
///
/// The rendering is lossy across param kinds (`1` and `"1"` both render as
/// `1`), it must not be used in place of the key's own equality.
pub trait CacheKey {
    fn to_key(&self) -> Cow<'_, str>;
}

impl CacheKey for Param {
    fn to_key(&self) -> Cow<'_, str> {
        match self {
            Param::Str(value) => Cow::Borrowed(value),
            other => Cow::Owned(other.to_string()),
        }
    }
}

impl CacheKey for SimpleKey {
    fn to_key(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl CacheKey for Key {
    fn to_key(&self) -> Cow<'_, str> {
        match self {
            Key::Param(param) => param.to_key(),
            Key::Composite(key) => key.to_key(),
        }
    }
}
