pub mod interface;
pub mod openai_braille;

pub use interface::BrailleTranslatorInterface;
pub use openai_braille::OpenAIBrailleTranslator;
