use crate::dictionary::{Source, SourceSet};

pub trait Preprocessor {
    // Default query preprocessor
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Pasted queries often carry line breaks
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Parse a comma-separated source list
///
/// `None` means no filter. A present but empty (or wholly unknown) list yields
/// an empty set, which the search treats as "no dictionary selected".
pub fn parse_sources(param: Option<&str>) -> Option<SourceSet> {
    let param = param?;

    let sources = param
        .split(',')
        .filter(|tag| !tag.trim().is_empty())
        .filter_map(|tag| match tag.parse::<Source>() {
            Ok(source) => Some(source),
            Err(e) => {
                tracing::warn!("Ignoring source tag: {}", e);
                None
            }
        })
        .collect();

    Some(sources)
}
