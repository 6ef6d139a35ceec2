// SPDX-License-Identifier: GPL-3.0-only

use std::path::{Path, PathBuf};

use crate::{error::FetchError, http::HttpClient};

/// What happened to a single sprite download
#[derive(Debug)]
pub enum DownloadOutcome {
    Written(PathBuf),
    /// PokéApi has no sprite for this entry, nothing was requested
    Unavailable,
    /// The display name can't be used as a file name
    Skipped(String),
    Failed(FetchError),
}

impl DownloadOutcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Written(path) => Some(path),
            _ => None,
        }
    }
}

/// Checks that a display name stays a single file inside its folder.
/// Names are otherwise kept as PokéApi returns them.
pub fn sprite_file_name(display_name: &str) -> Result<String, String> {
    if display_name.is_empty() {
        return Err("empty name".to_string());
    }

    if display_name == "." || display_name == ".." {
        return Err(format!("'{display_name}' is not a file name"));
    }

    if display_name.contains(['/', '\\', '\0']) {
        return Err(format!("'{display_name}' contains a path separator"));
    }

    Ok(format!("{display_name}.png"))
}

/// Attempts to download a sprite (image_url) into `folder` as `<display_name>.png`,
/// replacing any previous file. The folder must already exist.
pub async fn download_sprite<C: HttpClient + ?Sized>(
    client: &C,
    folder: &Path,
    display_name: &str,
    image_url: Option<&str>,
) -> DownloadOutcome {
    let Some(image_url) = image_url.filter(|url| !url.is_empty()) else {
        tracing::info!("Sprite for {display_name} not available.");
        return DownloadOutcome::Unavailable;
    };

    let file_name = match sprite_file_name(display_name) {
        Ok(file_name) => file_name,
        Err(reason) => {
            tracing::warn!("Refusing to save sprite for {display_name}: {reason}");
            return DownloadOutcome::Skipped(reason);
        }
    };
    let image_path = folder.join(file_name);

    let response = match client.get(image_url).await {
        Ok(response) if response.is_ok() => response,
        Ok(response) => {
            tracing::warn!(
                "Failed to download {display_name}: {}",
                response.status
            );
            return DownloadOutcome::Failed(FetchError::Status {
                url: image_url.to_string(),
                status: response.status,
            });
        }
        Err(e) => {
            tracing::warn!("Failed to download {display_name}: {e}");
            return DownloadOutcome::Failed(e);
        }
    };

    match tokio::fs::write(&image_path, &response.body).await {
        Ok(()) => {
            tracing::info!("Downloaded: {}", image_path.display());
            DownloadOutcome::Written(image_path)
        }
        Err(source) => {
            tracing::warn!("Failed to write {}: {source}", image_path.display());
            DownloadOutcome::Failed(FetchError::Write {
                path: image_path,
                source,
            })
        }
    }
}
