//! HTTP access to the index endpoint, with an optional page cache policy.

use log::{debug, error, info};

use super::{IndexCache, PicService};
use crate::error::{PicError, Result};
use crate::models::{Pic, PicId};

pub(crate) const FIND_INDEX_PICS_PATH: &str = "/api/findNextIndexPics";

impl PicService {
    /// Fetches one page of pics starting at `cursor` (or the home page).
    ///
    /// With a cache policy, a cached page for the cursor is returned without
    /// a request, and a fetched page is stored under the cursor.
    pub(crate) async fn fetch_page(
        &self,
        cursor: Option<&PicId>,
        policy: Option<&IndexCache>,
    ) -> Result<Vec<Pic>> {
        let cache_key = cursor.map(|id| id.as_str().to_string());

        if let (Some(cache), Some(key)) = (policy, cache_key.as_ref()) {
            if let Some(page) = cache.get(key).await {
                debug!("Index cache hit for start_pic_id={}", key);
                return Ok(page);
            }
            debug!("Index cache miss for start_pic_id={}", key);
        }

        let url = self.config.endpoint(FIND_INDEX_PICS_PATH);
        let mut request = self.client.get(&url);
        if let Some(id) = cursor {
            request = request.query(&[("start_pic_id", id.as_str())]);
        }

        debug!(
            "Fetching index page from {} (start_pic_id={})",
            url,
            cursor.map(PicId::as_str).unwrap_or("home")
        );
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Index fetch failed with status {status}: {body}");
            return Err(PicError::HttpStatus { status, body });
        }

        let body = response.text().await?;
        let page: Vec<Pic> = serde_json::from_str(&body)?;
        info!(
            "Fetched {} pics (start_pic_id={})",
            page.len(),
            cursor.map(PicId::as_str).unwrap_or("home")
        );

        if let (Some(cache), Some(key)) = (policy, cache_key) {
            cache.put(key, page.clone()).await;
        }

        Ok(page)
    }
}
