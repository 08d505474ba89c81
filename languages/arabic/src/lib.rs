pub mod dictionary;
pub mod loader;
pub mod normalizer;
pub mod processor;
pub mod related;
pub mod root;
pub mod search;

pub use dictionary::ArabicDictionary;
pub use loader::ArabicDictionaryLoader;
pub use normalizer::{contains_arabic, normalize};
pub use processor::ArabicProcessor;
pub use root::ArabicRootExtractor;
pub use search::MatchTier;
