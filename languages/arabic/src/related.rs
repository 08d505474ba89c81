use qomus_core::dictionary::{Entry, EntryId, EntryStore, StoreError};
use qomus_core::language::RootExtractor;

/// Candidates pulled from the store for one root
pub const RELATED_SCAN_LIMIT: usize = 30;
/// Related words returned
pub const RELATED_LIMIT: usize = 15;

/// Entries sharing `word`'s root as a contiguous substring
///
/// Returned in store order. Callers must not assume relevance sorting.
pub fn find_related<S, R>(
    store: &S,
    extractor: &R,
    word: &str,
    exclude_id: Option<EntryId>,
    scan_limit: usize,
    limit: usize,
) -> Result<Vec<Entry>, StoreError>
where
    S: EntryStore + ?Sized,
    R: RootExtractor + ?Sized,
{
    let root = extractor.extract_root(word);

    // One letter would match most of the dictionary
    if root.len() < 2 {
        tracing::debug!("Root of '{}' too short for related lookup", word);
        return Ok(vec![]);
    }

    let root = root.as_string();
    let candidates = store.find_containing(&root, scan_limit)?;
    tracing::debug!("Root '{}': {} candidates", root, candidates.len());

    Ok(candidates
        .into_iter()
        .filter(|e| Some(e.id) != exclude_id)
        .take(limit)
        .collect())
}

#[cfg(test)]
mod tests {
    use qomus_core::dictionary::Source;

    use super::*;
    use crate::dictionary::ArabicDictionary;
    use crate::root::ArabicRootExtractor;

    fn related(dict: &ArabicDictionary, word: &str, exclude: Option<EntryId>) -> Vec<EntryId> {
        find_related(
            dict,
            &ArabicRootExtractor::new(),
            word,
            exclude,
            RELATED_SCAN_LIMIT,
            RELATED_LIMIT,
        )
        .unwrap()
        .iter()
        .map(|e| e.id)
        .collect()
    }

    #[test]
    fn finds_words_with_root_anywhere() {
        let dict = ArabicDictionary::from_entries(vec![
            Entry::new(1, "كِتَاب", Source::Main),
            Entry::new(2, "كُتُب", Source::Main),
            Entry::new(3, "مَكْتَبَة", Source::Main),
            Entry::new(4, "يَكْتُبُونَ", Source::Main),
            Entry::new(5, "قَلَم", Source::Main),
        ])
        .unwrap();

        assert_eq!(related(&dict, "كِتَاب", Some(1)), vec![2, 3, 4]);
    }

    #[test]
    fn never_returns_excluded_id() {
        let dict = ArabicDictionary::from_entries(vec![
            Entry::new(1, "كتب", Source::Main),
            Entry::new(2, "كتبة", Source::Main),
        ])
        .unwrap();

        assert_eq!(related(&dict, "كتب", Some(1)), vec![2]);
        assert_eq!(related(&dict, "كتب", None), vec![1, 2]);
    }

    #[test]
    fn caps_scan_and_result() {
        let entries: Vec<_> = (1..=40)
            .map(|i| Entry::new(i, "كتب", Source::Main))
            .collect();
        let dict = ArabicDictionary::from_entries(entries).unwrap();

        let ids = related(&dict, "كتب", Some(1));
        assert_eq!(ids.len(), RELATED_LIMIT);
        assert!(!ids.contains(&1));

        // Excluded id beyond the scan window has no effect on the window
        let ids = find_related(&dict, &ArabicRootExtractor::new(), "كتب", Some(40), 3, 15).unwrap();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn weak_root_returns_nothing() {
        let dict = ArabicDictionary::from_entries(vec![Entry::new(1, "ب", Source::Main)]).unwrap();
        assert!(related(&dict, "ب", None).is_empty());
        assert!(related(&dict, "", None).is_empty());
    }
}
