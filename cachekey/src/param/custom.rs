use std::{
    any::{Any, TypeId},
    fmt::Debug,
    hash::{Hash, Hasher},
};

/// A user value that can be passed as a [`Param::Custom`](crate::Param::Custom).
///
/// Implemented for every `'static` type that is `Eq + Hash + Debug + Send + Sync`.
/// Two custom values are equal only if they have the same concrete type and
/// that type's `Eq` says so.
pub trait ParamValue: Any + Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    /// Compare against a value of any concrete type.
    fn dyn_eq(&self, other: &dyn ParamValue) -> bool;

    /// Feed the concrete type and the value into `state`.
    fn dyn_hash(&self, state: &mut dyn Hasher);
}

impl<T> ParamValue for T
where
    T: Any + Eq + Hash + Debug + Send + Sync,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn ParamValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .map_or(false, |other| self == other)
    }

    fn dyn_hash(&self, mut state: &mut dyn Hasher) {
        TypeId::of::<T>().hash(&mut state);
        self.hash(&mut state);
    }
}
