use crate::errors::{AppError, AppResult};
use crate::image::{ImagePayload, ImageUploader, http_client};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

const IMGBB_UPLOAD_URL: &str = "https://api.imgbb.com/1/upload";

#[derive(Debug, Deserialize)]
struct ImgbbResponse {
    #[serde(default)]
    data: Option<ImgbbData>,
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ImgbbData {
    url: String,
}

/// HTTP client for the ImgBB upload API
pub struct ImgbbHost {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl ImgbbHost {
    pub fn new(api_key: &str, timeout: Duration) -> AppResult<Self> {
        Self::with_endpoint(api_key, timeout, IMGBB_UPLOAD_URL)
    }

    /// Same client, posting to another upload URL (mirror or local stub).
    pub fn with_endpoint(api_key: &str, timeout: Duration, endpoint: &str) -> AppResult<Self> {
        let client = http_client(timeout, endpoint)?;
        Ok(Self {
            client,
            api_key: api_key.trim().to_string(),
            endpoint: endpoint.to_string(),
        })
    }

    /// Public URL carried by an upload response, or why there is none.
    pub fn image_url(status: StatusCode, body: &str) -> AppResult<String> {
        let parsed: ImgbbResponse = serde_json::from_str(body).map_err(|e| {
            AppError::Upload(format!("imgbb returned {status} with an unreadable body: {e}"))
        })?;

        match parsed.data {
            Some(data) if status.is_success() && parsed.success && !data.url.is_empty() => {
                Ok(data.url)
            }
            _ => {
                let detail = parsed
                    .error
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| "no image url in response".to_string());
                warn!(%status, %detail, "imgbb upload rejected");
                Err(AppError::Upload(format!("imgbb returned {status}: {detail}")))
            }
        }
    }
}

impl ImageUploader for ImgbbHost {
    fn upload(&self, image: &ImagePayload) -> AppResult<String> {
        debug!(file = %image.file_name, size = image.bytes.len(), "uploading to imgbb");

        let form = [
            ("key", self.api_key.clone()),
            ("image", image.to_base64()),
            ("name", image.file_name.clone()),
        ];

        let response = self.client.post(&self.endpoint).form(&form).send()?;
        let status = response.status();
        let body = response.text()?;

        Self::image_url(status, &body)
    }
}
