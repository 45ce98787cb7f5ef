mod simple;

pub use simple::{generate_key, SimpleKeyGenerator};
