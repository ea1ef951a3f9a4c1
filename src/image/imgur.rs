use crate::errors::{AppError, AppResult};
use crate::image::{ImagePayload, ImageUploader, http_client};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

const IMGUR_UPLOAD_URL: &str = "https://api.imgur.com/3/image";

#[derive(Debug, Deserialize)]
struct ImgurResponse {
    #[serde(default)]
    data: Option<ImgurData>,
    #[serde(default)]
    success: bool,
}

#[derive(Debug, Deserialize)]
struct ImgurData {
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

/// HTTP client for the anonymous Imgur upload API
pub struct ImgurHost {
    client: Client,
    client_id: String,
    endpoint: String,
}

impl ImgurHost {
    pub fn new(client_id: &str, timeout: Duration) -> AppResult<Self> {
        Self::with_endpoint(client_id, timeout, IMGUR_UPLOAD_URL)
    }

    pub fn with_endpoint(client_id: &str, timeout: Duration, endpoint: &str) -> AppResult<Self> {
        let client = http_client(timeout, endpoint)?;
        Ok(Self {
            client,
            client_id: client_id.trim().to_string(),
            endpoint: endpoint.to_string(),
        })
    }

    /// Public link carried by an upload response, or why there is none.
    pub fn image_url(status: StatusCode, body: &str) -> AppResult<String> {
        let parsed: ImgurResponse = serde_json::from_str(body).map_err(|e| {
            AppError::Upload(format!("imgur returned {status} with an unreadable body: {e}"))
        })?;

        let link = parsed
            .data
            .as_ref()
            .and_then(|d| d.link.clone())
            .filter(|l| !l.is_empty() && status.is_success() && parsed.success);

        link.ok_or_else(|| {
            let detail = parsed
                .data
                .and_then(|d| d.error)
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no image link in response".to_string());
            warn!(%status, %detail, "imgur upload rejected");
            AppError::Upload(format!("imgur returned {status}: {detail}"))
        })
    }
}

impl ImageUploader for ImgurHost {
    fn upload(&self, image: &ImagePayload) -> AppResult<String> {
        debug!(file = %image.file_name, size = image.bytes.len(), "uploading to imgur");

        let form = [
            ("image", image.to_base64()),
            ("type", "base64".to_string()),
            ("name", image.file_name.clone()),
        ];

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Client-ID {}", self.client_id))
            .form(&form)
            .send()?;

        let status = response.status();
        let body = response.text()?;

        Self::image_url(status, &body)
    }
}
