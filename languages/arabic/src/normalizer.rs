/// Arabic combining marks removed by [`normalize`]
///
/// U+064B..=U+065F covers tanwin, the short vowels, shadda, sukun, maddah and
/// hamza above/below. U+0670 is the superscript (dagger) alef.
pub fn is_diacritic(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{065F}' | '\u{0670}')
}

/// Strip Arabic diacritics, leaving every other character in place
pub fn normalize(text: &str) -> String {
    text.chars().filter(|c| !is_diacritic(*c)).collect()
}

/// Arabic script letter (not a diacritic, digit or punctuation mark)
pub fn is_arabic_letter(c: char) -> bool {
    matches!(c,
        '\u{0620}'..='\u{063F}' |
        '\u{0641}'..='\u{064A}' |
        '\u{066E}'..='\u{066F}' |
        '\u{0671}'..='\u{06D3}' |
        '\u{06D5}' |
        '\u{06EE}'..='\u{06EF}' |
        '\u{06FA}'..='\u{06FC}' |
        '\u{06FF}' |
        '\u{0750}'..='\u{077F}' |
        '\u{08A0}'..='\u{08C9}' |
        '\u{FB50}'..='\u{FDFB}' |
        '\u{FE70}'..='\u{FEFC}'
    )
}

pub fn contains_arabic(text: &str) -> bool {
    text.chars().any(is_arabic_letter)
}

/// Separators between words in lemma lists and free text
pub fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | '\u{060C}' | ';' | '\u{061B}')
}

/// Split on commas (Latin or Arabic), semicolons and whitespace runs
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_word_separator).filter(|w| !w.is_empty())
}
