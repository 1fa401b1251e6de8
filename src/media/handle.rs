use crate::error::WorkflowError;
use crate::media::MediaRef;
use std::path::{Path, PathBuf};
use teloxide::net::Download;
use teloxide::prelude::*;
use tracing::{info, warn};

/// Opaque handle to a downloaded media file.
///
/// The file lives under the configured temp directory until the workflow
/// calls [`MediaHandle::cleanup`], which happens on every orchestration exit
/// path (success or failure).
#[derive(Debug, Clone)]
pub struct MediaHandle {
    path: PathBuf,
}

impl MediaHandle {
    /// Wrap an already-existing file. Used by tests and by callers that stage
    /// media themselves.
    pub fn from_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Resolve a `MediaRef` via `getFile` and download it into `temp_dir`.
    ///
    /// On failure the partially written file is removed, so no state is left
    /// behind and no session should be created.
    pub async fn download(
        bot: &Bot,
        media: &MediaRef,
        temp_dir: &Path,
    ) -> Result<Self, WorkflowError> {
        let file = bot
            .get_file(media.file_id.clone())
            .await
            .map_err(|e| WorkflowError::DownloadFailed(format!("getFile: {e}")))?;

        // Keep the extension Telegram reports so the transcription API can
        // infer the container format from the file name.
        let ext = Path::new(&file.path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("bin");
        let path = temp_dir.join(format!("voxbridge-{}.{}", uuid::Uuid::new_v4(), ext));

        let mut dst = tokio::fs::File::create(&path)
            .await
            .map_err(|e| WorkflowError::DownloadFailed(format!("create {}: {e}", path.display())))?;

        if let Err(e) = bot.download_file(&file.path, &mut dst).await {
            drop(dst);
            let _ = tokio::fs::remove_file(&path).await;
            return Err(WorkflowError::DownloadFailed(e.to_string()));
        }

        info!(
            "Downloaded {:?} media to {} ({} bytes reported)",
            media.kind,
            path.display(),
            file.meta.size
        );

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the underlying file. Failures are logged, not propagated: the
    /// reply to the user never depends on temp-file removal.
    pub async fn cleanup(&self) {
        if let Err(e) = tokio::fs::remove_file(&self.path).await {
            warn!("Failed to remove media file {}: {}", self.path.display(), e);
        }
    }
}
