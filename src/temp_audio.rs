use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, warn};
use uuid::Uuid;

/// Scoped temporary file holding one request's uploaded audio.
///
/// The path is uniquely named per request so concurrent uploads never
/// share a file, and removal happens in `Drop` so the artifact is
/// released on every exit path, including provider failures.
pub struct TempAudio {
    path: PathBuf,
}

impl TempAudio {
    pub async fn write(cache_dir: &str, file_name: &str, data: &[u8]) -> Result<Self> {
        let ext = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("webm");
        let path = Path::new(cache_dir).join(format!("{}.{}", Uuid::new_v4(), ext));

        tokio::fs::create_dir_all(cache_dir).await?;
        tokio::fs::write(&path, data).await?;
        debug!("Wrote uploaded audio to {}", path.display());

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempAudio {
    fn drop(&mut self) {
        if std::fs::metadata(&self.path).is_ok() {
            if let Err(e) = std::fs::remove_file(&self.path) {
                warn!("Failed to remove temp audio {}: {}", self.path.display(), e);
            } else {
                debug!("Removed temp audio file: {}", self.path.display());
            }
        }
    }
}
