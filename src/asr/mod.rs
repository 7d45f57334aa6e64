pub mod interface;
pub mod openai_whisper;

pub use interface::ASRInterface;
pub use openai_whisper::OpenAIWhisperASR;
