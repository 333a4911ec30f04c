//! Page and single pic lookups, plus next-page prefetch.

use std::sync::Arc;

use log::{debug, error, info};

use super::{IndexCache, PicService};
use crate::error::{PicError, Result};
use crate::models::{Pic, PicId};

impl PicService {
    /// Returns a single pic, from the pic cache when possible.
    ///
    /// On a miss the page starting at `pic_id` is fetched and its first pic
    /// returned.
    pub async fn get_single(&self, pic_id: &PicId) -> Result<Pic> {
        if let Some(pic) = self.pic_cache.get(pic_id).await {
            debug!("Pic cache hit for {}", pic_id);
            return Ok(pic);
        }

        debug!("Pic cache miss for {}, fetching page", pic_id);
        self.get(Some(pic_id))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| PicError::PicNotFound(pic_id.clone()))
    }

    /// Returns the page of pics starting at `start_id`, or the home page
    /// when `start_id` is `None` or home-like.
    ///
    /// Home pages always hit the network; other pages go through the index
    /// cache. Every returned pic is stored in the pic cache, and the next
    /// page is prefetched in the background.
    pub async fn get(&self, start_id: Option<&PicId>) -> Result<Vec<Pic>> {
        let cursor = start_id.filter(|id| !id.is_home());
        let policy = cursor.map(|_| Arc::clone(&self.index_cache));

        let page = self.fetch_page(cursor, policy.as_deref()).await?;
        self.remember_pics(&page).await;

        if let Some(last) = page.last() {
            self.spawn_prefetch(last.id.clone(), policy);
        }

        Ok(page)
    }

    /// Store pics in the pic cache keyed by ID
    pub(crate) async fn remember_pics(&self, pics: &[Pic]) {
        self.pic_cache
            .put_all(pics.iter().map(|pic| (pic.id.clone(), pic.clone())))
            .await;
    }

    /// Warm the caches with the page after `last_id`.
    ///
    /// The task is detached: failures are logged and never reach the caller.
    fn spawn_prefetch(&self, last_id: PicId, policy: Option<Arc<IndexCache>>) {
        let service = self.clone();
        tokio::spawn(async move {
            match service.fetch_page(Some(&last_id), policy.as_deref()).await {
                Ok(page) => {
                    info!("Prefetched {} pics after {}", page.len(), last_id);
                    service.remember_pics(&page).await;
                }
                Err(e) => {
                    error!("Failure to prefetch: {}", e);
                }
            }
        });
    }
}
