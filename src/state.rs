use std::sync::Arc;

use crate::asr::ASRInterface;
use crate::config::Config;
use crate::translate::BrailleTranslatorInterface;

/// Shared application state. Provider clients are constructed once at
/// startup and injected here so handlers never build their own.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub asr: Arc<dyn ASRInterface>,
    pub translator: Arc<dyn BrailleTranslatorInterface>,
}

impl AppState {
    pub fn new(
        config: Config,
        asr: Arc<dyn ASRInterface>,
        translator: Arc<dyn BrailleTranslatorInterface>,
    ) -> Self {
        Self {
            config,
            asr,
            translator,
        }
    }
}
