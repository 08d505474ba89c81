//! Handler behavior against an in-memory dictionary

use std::io::Write;

use qomus_config::Config;
use qomus_config::wordnet::CorpusFile;
use qomus_core::synonyms::{SynonymEdge, SynonymStore};

use super::{ids, state_with, test_state};
use crate::handlers::{
    handle_related, handle_root, handle_search, handle_synonyms, handle_wordnet_search,
};

#[tokio::test]
async fn search_ranks_prefix_then_contains() {
    let state = test_state();
    let results = handle_search(&state, "كت", None).await.unwrap();
    // كتب is shorter than كتاب, مكتبة only contains the query
    assert_eq!(ids(&results), vec![2, 1, 3]);
}

#[tokio::test]
async fn search_matches_gloss_last() {
    let state = test_state();
    let results = handle_search(&state, "Kitob", None).await.unwrap();
    assert_eq!(ids(&results), vec![2, 4, 1]);
}

#[tokio::test]
async fn search_respects_sources() {
    let state = test_state();
    let classic = handle_search(&state, "jild", Some("classic")).await.unwrap();
    assert_eq!(ids(&classic), vec![4, 5]);

    let main = handle_search(&state, "jild", Some("main")).await.unwrap();
    assert!(main.is_empty());

    // Present but empty selects no dictionary
    let none = handle_search(&state, "jild", Some("")).await.unwrap();
    assert!(none.is_empty());

    // Unknown tags are dropped, leaving the known ones
    let mixed = handle_search(&state, "jild", Some("bogus,classic")).await.unwrap();
    assert_eq!(ids(&mixed), vec![4, 5]);
}

#[tokio::test]
async fn equivalent_queries_share_a_cache_entry() {
    let state = test_state();
    let first = handle_search(&state, "  KITOB ", Some("main,classic")).await.unwrap();
    let second = handle_search(&state, "kitob", Some("classic,main")).await.unwrap();

    assert_eq!(ids(&first), ids(&second));
    assert_eq!(state.cache.len().await, 1);
    assert!(
        state
            .cache
            .get("dict:kitob:classic,main")
            .await
            .is_some()
    );
}

#[tokio::test]
async fn empty_source_list_never_reaches_the_cache() {
    let state = test_state();

    let all = handle_search(&state, "kitob", None).await.unwrap();
    assert_eq!(ids(&all), vec![2, 4, 1]);
    assert!(handle_search(&state, "kitob", Some("")).await.unwrap().is_empty());

    let state = test_state();
    assert!(handle_search(&state, "kitob", Some("bogus")).await.unwrap().is_empty());
    let all = handle_search(&state, "kitob", None).await.unwrap();
    assert_eq!(ids(&all), vec![2, 4, 1]);
    assert_eq!(state.cache.len().await, 1);
}

#[tokio::test]
async fn disabled_cache_stores_nothing() {
    let mut config = Config::default();
    config.cache.enabled = false;
    let state = state_with(config);

    handle_search(&state, "kitob", None).await.unwrap();
    assert!(state.cache.is_empty().await);
}

#[tokio::test]
async fn related_excludes_the_entry_itself() {
    let state = test_state();
    let related = handle_related(&state, 2).await.unwrap();
    assert_eq!(ids(&related), vec![3]);

    let related = handle_related(&state, 1).await.unwrap();
    assert_eq!(ids(&related), vec![2, 3]);

    assert!(handle_related(&state, 99).await.unwrap().is_empty());
}

#[test]
fn root_report() {
    let state = test_state();
    let report = handle_root(&state, "الكِتَاب");
    assert_eq!(report.normalized, "الكتاب");
    assert_eq!(report.root, "كتب");
}

#[tokio::test]
async fn synonyms_follow_stored_edges() {
    let state = test_state();
    {
        let mut edges = state.edges.lock().await;
        edges.insert_edge(SynonymEdge::new(4, 1).unwrap()).unwrap();
        edges.insert_edge(SynonymEdge::new(5, 4).unwrap()).unwrap();
        // Dangling edge to an entry that is not in the dictionary
        edges.insert_edge(SynonymEdge::new(4, 77).unwrap()).unwrap();
    }

    let synonyms = handle_synonyms(&state, 4).await.unwrap();
    assert_eq!(ids(&synonyms), vec![1, 5]);
    assert!(handle_synonyms(&state, 6).await.unwrap().is_empty());
}

#[tokio::test]
async fn wordnet_search_imports_corpus_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nouns.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(
        "synset_id,en_lemmas,en_gloss,en_examples,ar_lemmas,ar_gloss,ar_examples\n\
         s1,\"book, volume\",a written work,,\"كتاب، سفر، مجلد\",,\n\
         s2,pen,a writing tool,,قلم,,\n"
            .as_bytes(),
    )
    .unwrap();

    let mut config = Config::default();
    config.wordnet.corpus = vec![CorpusFile {
        path: path.display().to_string(),
        pos: Some("n".into()),
    }];
    let state = state_with(config);

    let groups = handle_wordnet_search(&state, "سِفر", None).await.unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].synset.id, "s1");
    let resolved: Vec<_> = groups[0].lemmas.iter().map(|l| l.entry_id).collect();
    assert_eq!(resolved, vec![Some(1), Some(4), Some(5)]);

    let verbs = handle_wordnet_search(&state, "pen", Some("v")).await.unwrap();
    assert!(verbs.is_empty());
    let nouns = handle_wordnet_search(&state, "pen", Some("n")).await.unwrap();
    assert_eq!(nouns[0].synset.id, "s2");

    assert_eq!(state.synsets.get().map(|index| index.len()), Some(2));
}

#[tokio::test]
async fn short_wordnet_query_skips_the_corpus() {
    let mut config = Config::default();
    config.wordnet.corpus = vec![CorpusFile {
        path: "/nonexistent/corpus.csv".into(),
        pos: None,
    }];
    let state = state_with(config);

    assert!(handle_wordnet_search(&state, " ك ", None).await.unwrap().is_empty());
    assert!(state.synsets.get().is_none());
    assert!(handle_wordnet_search(&state, "كتاب", None).await.is_err());
}
