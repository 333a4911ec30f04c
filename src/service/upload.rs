//! Pic creation via multipart upload.

use log::{debug, error, info};
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::PicService;
use crate::error::{PicError, Result};
use crate::models::PicFile;

pub(crate) const CREATE_PIC_PATH: &str = "/api/createPic";

const XSRF_HEADER_NAME: &str = "X-XSRF-TOKEN";
const XSRF_COOKIE_NAME: &str = "XSRF-TOKEN";

/// Raw server response to a successful upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePicResponse {
    pub status: StatusCode,
    pub body: String,
}

impl CreatePicResponse {
    /// Decode the response body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

impl PicService {
    /// Uploads a new pic from a file, a remote url, or both.
    ///
    /// Only supplied fields are sent. Non-2xx responses are logged and
    /// returned as [`PicError::HttpStatus`].
    pub async fn create(
        &self,
        file: Option<PicFile>,
        url: Option<&str>,
    ) -> Result<CreatePicResponse> {
        let form = build_create_form(file, url)?;

        let endpoint = self.config.endpoint(CREATE_PIC_PATH);
        debug!("Uploading pic to {}", endpoint);

        let mut request = self.client.post(&endpoint).multipart(form);
        if let Some(token) = &self.config.xsrf_token {
            request = request
                .header(XSRF_HEADER_NAME, token)
                .header(
                    reqwest::header::COOKIE,
                    format!("{}={}", XSRF_COOKIE_NAME, token),
                );
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("Pic upload failed with status {status}: {body}");
            return Err(PicError::HttpStatus { status, body });
        }

        info!("Pic upload succeeded (status: {})", status);
        Ok(CreatePicResponse { status, body })
    }
}

/// Build the multipart body, leaving out absent fields
pub(crate) fn build_create_form(file: Option<PicFile>, url: Option<&str>) -> Result<Form> {
    if file.is_none() && url.is_none() {
        return Err(PicError::EmptyUpload);
    }

    let mut form = Form::new();
    if let Some(url) = url {
        form = form.text("url", url.to_string());
    }
    if let Some(file) = file {
        debug!(
            "Attaching file {} ({} bytes, {})",
            file.file_name,
            file.bytes.len(),
            file.mime
        );
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.mime)?;
        form = form.part("file", part);
    }
    Ok(form)
}
