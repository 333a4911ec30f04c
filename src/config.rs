//! Client configuration

use std::time::Duration;

/// Default backend address
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Capacity of the page cache (pages, not pics)
pub const DEFAULT_INDEX_CAPACITY: usize = 20;

/// Capacity of the single pic cache: 2x default page size plus one
pub const DEFAULT_PIC_CAPACITY: usize = 122;

/// Settings for a [`PicService`](crate::service::PicService)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend root, without trailing slash
    pub base_url: String,
    /// Only applied when the index cache is first created
    pub index_capacity: usize,
    /// Only applied when the pic cache is first created
    pub pic_capacity: usize,
    /// Sent as both `X-XSRF-TOKEN` header and `XSRF-TOKEN` cookie on uploads
    pub xsrf_token: Option<String>,
    pub user_agent: String,
    /// Request timeout; `None` keeps the reqwest default
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            index_capacity: DEFAULT_INDEX_CAPACITY,
            pic_capacity: DEFAULT_PIC_CAPACITY,
            xsrf_token: None,
            user_agent: format!("pixur_client/{}", env!("CARGO_PKG_VERSION")),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Default configuration pointing at the given backend
    pub fn new(base_url: &str) -> Self {
        Self::default().with_base_url(base_url)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_xsrf_token(mut self, token: impl Into<String>) -> Self {
        self.xsrf_token = Some(token.into());
        self
    }

    pub fn with_capacities(mut self, index_capacity: usize, pic_capacity: usize) -> Self {
        self.index_capacity = index_capacity;
        self.pic_capacity = pic_capacity;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Full URL for an API path such as `/api/createPic`
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
