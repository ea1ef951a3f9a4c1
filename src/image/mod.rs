//! Image hosting: the photo attached to an inbound record is pushed to a
//! host that returns a public URL, which is what ends up in the log.

mod folder;
mod imgbb;
mod imgur;

pub use folder::FolderHost;
pub use imgbb::ImgbbHost;
pub use imgur::ImgurHost;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use base64::{Engine as _, engine::general_purpose};
use clap::ValueEnum;
use reqwest::Url;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ImageHost {
    #[default]
    Imgbb,
    Imgur,
    Folder,
}

impl ImageHost {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageHost::Imgbb => "imgbb",
            ImageHost::Imgur => "imgur",
            ImageHost::Folder => "folder",
        }
    }
}

/// Raw image as read from disk or received from a form.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImagePayload {
    pub fn new<S: Into<String>>(file_name: S, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn from_path(path: &Path) -> AppResult<Self> {
        let bytes = fs::read(path)?;
        if bytes.is_empty() {
            return Err(AppError::Upload(format!("{} is empty", path.display())));
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "image".to_string());

        Ok(Self { file_name, bytes })
    }

    /// Payload accepted by the remote hosts
    pub fn to_base64(&self) -> String {
        general_purpose::STANDARD.encode(&self.bytes)
    }
}

/// Blocking client bounded by `timeout`. Loopback endpoints bypass any
/// proxy configured in the environment.
pub(crate) fn http_client(timeout: Duration, endpoint: &str) -> AppResult<Client> {
    let mut builder = Client::builder().timeout(timeout);

    let loopback = Url::parse(endpoint)
        .ok()
        .and_then(|u| u.host_str().map(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]"))
        .unwrap_or(false);
    if loopback {
        builder = builder.no_proxy();
    }

    Ok(builder.build()?)
}

pub trait ImageUploader {
    /// Upload the image and return its public URL.
    fn upload(&self, image: &ImagePayload) -> AppResult<String>;
}

/// Build the uploader selected by the configuration.
pub fn build_uploader(cfg: &Config) -> AppResult<Box<dyn ImageUploader>> {
    match cfg.image_host {
        ImageHost::Imgbb => {
            if cfg.imgbb_key.trim().is_empty() {
                return Err(AppError::Config(
                    "imgbb_key is not set (config file or IMGBB_API_KEY)".into(),
                ));
            }
            Ok(Box::new(ImgbbHost::new(&cfg.imgbb_key, cfg.upload_timeout())?))
        }
        ImageHost::Imgur => {
            if cfg.imgur_client_id.trim().is_empty() {
                return Err(AppError::Config(
                    "imgur_client_id is not set (config file or IMGUR_CLIENT_ID)".into(),
                ));
            }
            Ok(Box::new(ImgurHost::new(
                &cfg.imgur_client_id,
                cfg.upload_timeout(),
            )?))
        }
        ImageHost::Folder => Ok(Box::new(FolderHost::new(cfg.image_folder_path()))),
    }
}
