//! Pic service: paged fetching with caching, prefetch and uploads.
//!
//! The service owns handles to two caches obtained from a [`CacheProvider`]:
//! an index cache of pages keyed by cursor, and a pic cache keyed by pic ID.

mod index;
mod transport;
mod upload;

use std::sync::Arc;

use reqwest::Client;

use crate::cache::{CacheProvider, NamedCache};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::models::{Pic, PicId};

pub use upload::CreatePicResponse;

/// Registry name of the page cache
pub const INDEX_CACHE_NAME: &str = "PicsService";

/// Registry name of the single pic cache
pub const PIC_CACHE_NAME: &str = "PicsService-pics";

/// Pages keyed by their `start_pic_id` cursor
pub type IndexCache = NamedCache<String, Vec<Pic>>;

/// Pics keyed by ID
pub type PicCache = NamedCache<PicId, Pic>;

/// Client for the pic listing and upload endpoints.
///
/// Cheap to clone; clones share the HTTP client and both caches.
#[derive(Clone)]
pub struct PicService {
    pub(crate) client: Client,
    pub(crate) config: ClientConfig,
    pub(crate) index_cache: Arc<IndexCache>,
    pub(crate) pic_cache: Arc<PicCache>,
}

impl PicService {
    /// Creates a service, obtaining (or reusing) its caches from `caches`.
    pub fn new(config: ClientConfig, caches: &CacheProvider) -> Result<Self> {
        log::info!("Creating pic service for {}", config.base_url);

        let index_cache =
            caches.get_or_create::<String, Vec<Pic>>(INDEX_CACHE_NAME, config.index_capacity)?;
        let pic_cache = caches.get_or_create::<PicId, Pic>(PIC_CACHE_NAME, config.pic_capacity)?;

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            config,
            index_cache,
            pic_cache,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn index_cache(&self) -> &IndexCache {
        &self.index_cache
    }

    pub fn pic_cache(&self) -> &PicCache {
        &self.pic_cache
    }
}

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
