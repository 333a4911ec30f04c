//! Pixur Client - paged pic access for the Pixur gallery
//!
//! Fetches pages of pics from the Pixur backend, keeps recently seen pages
//! and pics in bounded LRU caches, and prefetches the next page in the
//! background so paging forward is usually served from memory.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;

pub use cache::{CacheProvider, NamedCache};
pub use config::ClientConfig;
pub use error::{PicError, Result};
pub use models::{Pic, PicFile, PicId};
pub use service::{CreatePicResponse, PicService};
