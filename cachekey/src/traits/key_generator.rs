use std::any::Any;

use crate::{Key, Method, Param};

/// A strategy for deriving a cache key from an intercepted call.
///
/// Implemented for every `Fn(&dyn Any, &Method, &[Param]) -> Key` so a
/// closure can be plugged in directly.
pub trait KeyGenerator: Send + Sync {
    /// Generate a key for a call of `method` on `target` with `params`.
    fn generate(&self, target: &dyn Any, method: &Method, params: &[Param]) -> Key;
}

impl<F> KeyGenerator for F
where
    F: Fn(&dyn Any, &Method, &[Param]) -> Key + Send + Sync,
{
    fn generate(&self, target: &dyn Any, method: &Method, params: &[Param]) -> Key {
        self(target, method, params)
    }
}
