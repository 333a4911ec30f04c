//! Data models for pics and uploads

use serde::{Deserialize, Deserializer, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::Result;

/// Opaque pic identifier.
///
/// The backend sends IDs either as JSON integers or as strings; both are
/// normalized to their string form so they can be used as cache keys and
/// as the `start_pic_id` query value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PicId(String);

impl PicId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty or zero ID means "no cursor", i.e. the home page.
    pub fn is_home(&self) -> bool {
        let id = self.0.trim();
        id.is_empty() || id == "0"
    }
}

impl<'de> Deserialize<'de> for PicId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(id) => PicId(id),
            RawId::Number(id) => PicId(id.to_string()),
        })
    }
}

impl fmt::Display for PicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PicId {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(PicId(s.trim().to_string()))
    }
}

impl From<&str> for PicId {
    fn from(id: &str) -> Self {
        PicId(id.to_string())
    }
}

impl From<String> for PicId {
    fn from(id: String) -> Self {
        PicId(id)
    }
}

impl From<i64> for PicId {
    fn from(id: i64) -> Self {
        PicId(id.to_string())
    }
}

/// A pic record as returned by the backend.
///
/// Only `id` is interpreted; every other field is kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pic {
    pub id: PicId,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl Pic {
    pub fn new(id: impl Into<PicId>) -> Self {
        Self {
            id: id.into(),
            fields: serde_json::Map::new(),
        }
    }

    /// Look up a passthrough field by name
    pub fn field(&self, name: &str) -> Option<&serde_json::Value> {
        self.fields.get(name)
    }
}

/// File payload for pic uploads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PicFile {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl PicFile {
    /// Create an upload payload, guessing the MIME type from the file name
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = guess_mime(&file_name).to_string();
        Self {
            file_name,
            mime,
            bytes,
        }
    }

    /// Read an upload payload from disk
    pub async fn from_path(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload".to_string());

        log::debug!("Read {} bytes from {}", bytes.len(), path.display());
        Ok(Self::new(file_name, bytes))
    }
}

fn guess_mime(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webm" => "video/webm",
        "mp4" => "video/mp4",
        _ => "application/octet-stream",
    }
}
