use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};
use uuid::Uuid;

use crate::Method;

pub const FIND_ACCOUNT: Method = Method::new("AccountService", "find");
pub const LIST_ACCOUNTS: Method = Method::new("AccountService", "list");

/// A user type passed around as a target or a custom param.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Account {
    id: Uuid,
}

impl Account {
    pub fn new() -> Self {
        Self { id: Uuid::new_v4() }
    }
}

pub fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}
