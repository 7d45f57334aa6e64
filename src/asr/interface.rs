use std::path::Path;

use async_trait::async_trait;

/// Interface to a speech-to-text provider.
///
/// Returns `Ok(None)` when the provider answered but produced no usable
/// text; the caller decides what to substitute. Transport and provider
/// errors propagate as `Err`.
#[async_trait]
pub trait ASRInterface: Send + Sync {
    async fn transcribe_file(&self, audio_path: &Path) -> Result<Option<String>, anyhow::Error>;
}
