use std::path::Path;

use qomus_core::dictionary::LoadError;

use crate::dictionary::ArabicDictionary;

pub struct ArabicDictionaryLoader;

impl ArabicDictionaryLoader {
    /// Load dictionary from file path
    pub fn load_from_file(path: &Path) -> Result<ArabicDictionary, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        tracing::info!("Loading dictionary from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let dict = ArabicDictionary::from_json(&json)?;
        tracing::info!("Loaded {} dictionary entries from file", dict.entry_count());
        Ok(dict)
    }

    /// Load the main file, then merge each additional file over it
    ///
    /// A missing or broken additional file is logged and skipped; the main file must load.
    pub fn load_with_additional(
        main: &Path,
        additional: &[String],
    ) -> Result<ArabicDictionary, LoadError> {
        let mut dict = Self::load_from_file(main)?;

        for path in additional {
            match Self::load_from_file(Path::new(path)) {
                Ok(extra) => {
                    tracing::info!("Merging additional dictionary from: {}", path);
                    dict = dict.merge(extra);
                }
                Err(e) => {
                    tracing::warn!("Failed to load dictionary from {}: {}", path, e);
                }
            }
        }

        Ok(dict)
    }
}
