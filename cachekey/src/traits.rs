mod cache_key;
mod key_generator;

pub use cache_key::CacheKey;
pub use key_generator::KeyGenerator;
