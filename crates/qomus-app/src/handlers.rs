pub mod build_synonyms;
pub mod related;
pub mod root;
pub mod search;
pub mod synonyms;
pub mod wordnet;

pub use build_synonyms::{BuildReport, handle_build_synonyms};
pub use related::handle_related;
pub use root::{RootReport, handle_root};
pub use search::handle_search;
pub use synonyms::handle_synonyms;
pub use wordnet::handle_wordnet_search;
