use qomus_core::language::{Root, RootExtractor};

use crate::normalizer::normalize;

/// Strip `pattern` only if at least `min_remaining` letters are left after it
#[derive(Debug, Clone, Copy)]
pub struct AffixRule {
    pub pattern: &'static str,
    pub min_remaining: usize,
}

const fn rule(pattern: &'static str, min_remaining: usize) -> AffixRule {
    AffixRule {
        pattern,
        min_remaining,
    }
}

/// Checked top to bottom, first match wins
pub const PREFIX_RULES: &[AffixRule] = &[
    // Conjunction/preposition + article
    rule("وال", 3),
    rule("بال", 3),
    rule("كال", 3),
    rule("فال", 3),
    // Form X participle, then Form X verb stem
    rule("مست", 3),
    rule("است", 3),
    rule("لل", 3),
    rule("ال", 3),
    // Imperfect and participle markers
    rule("أ", 3),
    rule("ي", 3),
    rule("ت", 3),
    rule("ن", 3),
    rule("م", 3),
];

/// Checked top to bottom, first match wins
pub const SUFFIX_RULES: &[AffixRule] = &[
    // Feminine dual
    rule("تان", 2),
    rule("تين", 2),
    // Sound plurals
    rule("ات", 2),
    rule("ون", 2),
    rule("ين", 2),
    // Dual
    rule("ان", 2),
    // Nisba feminine
    rule("ية", 2),
    // Attached pronouns
    rule("ها", 3),
    rule("هم", 3),
    rule("كم", 3),
    // Taa marbuta, pronoun, nisba
    rule("ة", 3),
    rule("ه", 3),
    rule("ي", 3),
];

/// Long vowels dropped from inside the stem while more than three letters remain
pub const INFIX_LETTERS: &[char] = &['ا', 'و', 'ي'];

const ROOT_LEN: usize = 3;

fn strip_prefix(letters: &[char], rules: &[AffixRule]) -> usize {
    for r in rules {
        let pattern: Vec<char> = r.pattern.chars().collect();
        if letters.len() >= pattern.len() + r.min_remaining && letters.starts_with(&pattern) {
            return pattern.len();
        }
    }
    0
}

fn strip_suffix(letters: &[char], rules: &[AffixRule]) -> usize {
    for r in rules {
        let pattern: Vec<char> = r.pattern.chars().collect();
        if letters.len() >= pattern.len() + r.min_remaining && letters.ends_with(&pattern) {
            return pattern.len();
        }
    }
    0
}

fn drop_infixes(letters: &mut Vec<char>, infixes: &[char]) {
    while letters.len() > ROOT_LEN {
        let last = letters.len() - 1;
        match (1..last).find(|&i| infixes.contains(&letters[i])) {
            Some(i) => {
                letters.remove(i);
            }
            None => break,
        }
    }
}

/// Heuristic triliteral root extractor
///
/// Output is a retrieval key: deterministic and total, not linguistically exact.
pub struct ArabicRootExtractor {
    prefixes: &'static [AffixRule],
    suffixes: &'static [AffixRule],
    infixes: &'static [char],
}

impl ArabicRootExtractor {
    pub fn new() -> Self {
        Self {
            prefixes: PREFIX_RULES,
            suffixes: SUFFIX_RULES,
            infixes: INFIX_LETTERS,
        }
    }

    /// Extract a 0 to 3 letter root skeleton
    pub fn extract(&self, word: &str) -> Root {
        let mut letters: Vec<char> = normalize(word).chars().collect();

        let prefix_len = strip_prefix(&letters, self.prefixes);
        letters.drain(..prefix_len);

        let suffix_len = strip_suffix(&letters, self.suffixes);
        letters.truncate(letters.len() - suffix_len);

        drop_infixes(&mut letters, self.infixes);
        letters.truncate(ROOT_LEN);

        Root::new(letters)
    }
}

impl Default for ArabicRootExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl RootExtractor for ArabicRootExtractor {
    fn extract_root(&self, word: &str) -> Root {
        self.extract(word)
    }
}
