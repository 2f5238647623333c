const STRIPPED_CHARS: [char; 11] = ['.', ',', '!', '?', ';', ':', '(', ')', '"', '\'', '-'];

fn is_stripped_char(c: char) -> bool {
    STRIPPED_CHARS.contains(&c)
}

/// Lowercases a single token and removes the stripped punctuation.
///
/// Only the fixed character set is removed, any other punctuation
/// (e.g. `_` or `/`) stays part of the word.
pub fn normalize_word(token: &str) -> String {
    token
        .to_lowercase()
        .chars()
        .filter(|c| !is_stripped_char(*c))
        .collect()
}

/// Splits a text into normalized, non-empty words in the order of their appearance.
pub fn split_text_into_words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(normalize_word)
        .filter(|w| !w.is_empty())
}
