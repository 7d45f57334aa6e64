use async_trait::async_trait;

/// Interface to the text-generation provider used for Braille output.
///
/// The output is whatever the underlying model produces; nothing here
/// verifies it is valid Unicode Braille. `Ok(None)` means the provider
/// answered without any content.
#[async_trait]
pub trait BrailleTranslatorInterface: Send + Sync {
    async fn translate(&self, text: &str) -> Result<Option<String>, anyhow::Error>;
}
