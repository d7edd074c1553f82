//! Tokenizer for component search
//!
//! Splits text into lowercase word tokens and, for index-side use, expands
//! every word into its leading prefixes so that partial input such as
//! "nav" or "butt" hits "navbar" and "button".
//!
//! Prefix expansion costs O(N) extra index entries for an N-character word.
//! Component catalogs are small (thousands of short names), so this is paid
//! once per rebuild.

use std::collections::BTreeSet;

/// Shortest prefix emitted by [`tokenize`]
pub const MIN_PREFIX_LEN: usize = 3;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whole-word tokens in order of appearance
///
/// Lowercases, then splits on every character that is neither alphanumeric
/// nor `_`. Duplicates are kept.
///
/// # Example
///
/// ```
/// use uiatlas_search::tokenizer::words;
///
/// assert_eq!(words("Call-to-Action button"), vec!["call", "to", "action", "button"]);
/// ```
pub fn words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Tokenize text into searchable terms
///
/// Returns every word from [`words`] plus, for words longer than
/// `MIN_PREFIX_LEN` characters, each proper prefix of length
/// `MIN_PREFIX_LEN..len`. Prefixes are cut on `char` boundaries.
///
/// # Example
///
/// ```
/// use uiatlas_search::tokenizer::tokenize;
///
/// let tokens = tokenize("Navbar");
/// let expected: Vec<&str> = vec!["nav", "navb", "navba", "navbar"];
/// assert_eq!(tokens.iter().map(String::as_str).collect::<Vec<_>>(), expected);
/// ```
pub fn tokenize(text: &str) -> BTreeSet<String> {
    let mut tokens = BTreeSet::new();
    for word in words(text) {
        let boundaries: Vec<usize> = word.char_indices().map(|(i, _)| i).collect();
        if boundaries.len() > MIN_PREFIX_LEN {
            for &end in &boundaries[MIN_PREFIX_LEN..] {
                tokens.insert(word[..end].to_string());
            }
        }
        tokens.insert(word);
    }
    tokens
}
