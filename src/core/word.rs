//! Word validity and measurement
//!
//! Words are plain strings. Their length is counted in characters, not bytes,
//! so accented words keep the length a reader would expect.

/// Check whether a word belongs in a cleaned word list
///
/// A valid word does not start with an uppercase letter and does not contain
/// an apostrophe. Proper nouns ("Paris") and contractions ("it's") are
/// therefore rejected. The empty string is valid.
///
/// # Examples
/// ```
/// use word_ladder::core::is_valid;
///
/// assert!(is_valid("cold"));
/// assert!(is_valid("épée"));
/// assert!(!is_valid("Paris"));
/// assert!(!is_valid("it's"));
/// ```
#[must_use]
pub fn is_valid(word: &str) -> bool {
    if word.chars().next().is_some_and(char::is_uppercase) {
        return false;
    }
    !word.contains('\'')
}

/// Number of characters in a word
///
/// This is the length used everywhere a word list is filtered or two words
/// are compared.
#[inline]
#[must_use]
pub fn word_len(word: &str) -> usize {
    word.chars().count()
}
