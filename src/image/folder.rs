use crate::errors::AppResult;
use crate::image::{ImagePayload, ImageUploader};
use chrono::Local;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Offline host: copies the photo into a local folder and returns a
/// `file://` URL to it.
pub struct FolderHost {
    folder: PathBuf,
}

impl FolderHost {
    pub fn new(folder: PathBuf) -> Self {
        Self { folder }
    }
}

fn sanitize(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.trim_matches('_').is_empty() {
        "image".to_string()
    } else {
        cleaned
    }
}

impl ImageUploader for FolderHost {
    fn upload(&self, image: &ImagePayload) -> AppResult<String> {
        fs::create_dir_all(&self.folder)?;

        let stamp = Local::now().format("%Y%m%d%H%M%S%3f");
        let target = self
            .folder
            .join(format!("{stamp}_{}", sanitize(&image.file_name)));

        fs::write(&target, &image.bytes)?;
        let absolute = fs::canonicalize(&target).unwrap_or(target);

        debug!(path = %absolute.display(), "image stored");
        Ok(format!("file://{}", absolute.display()))
    }
}
