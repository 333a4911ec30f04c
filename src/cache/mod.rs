//! In-memory caching layer for pages and pics

pub mod named_cache;
pub mod provider;

pub use named_cache::NamedCache;
pub use provider::CacheProvider;
