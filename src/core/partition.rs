//! Letter partitions
//!
//! A partition is what remains of a word once one of its letters is removed,
//! kept as the prefix and suffix around the gap. Two words sharing a
//! partition differ in exactly that one position.

use std::fmt;

/// The prefix and suffix surrounding one removed letter
///
/// The partitions of `"foo"` are `("", "oo")`, `("f", "o")` and `("fo", "")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Partition {
    pub prefix: String,
    pub suffix: String,
}

impl Partition {
    #[must_use]
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.prefix, self.suffix)
    }
}

/// Generate the partitions of a word, one per character position
///
/// Positions are characters, not bytes. An empty word has no partitions.
///
/// # Examples
/// ```
/// use word_ladder::core::{Partition, partitions};
///
/// let parts: Vec<Partition> = partitions("lo").collect();
/// assert_eq!(parts, vec![Partition::new("", "o"), Partition::new("l", "")]);
/// ```
pub fn partitions(word: &str) -> impl Iterator<Item = Partition> + '_ {
    word.char_indices().map(move |(i, ch)| Partition {
        prefix: word[..i].to_string(),
        suffix: word[i + ch.len_utf8()..].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn partition_set(word: &str) -> BTreeSet<Partition> {
        partitions(word).collect()
    }

    #[test]
    fn empty_word_has_no_partitions() {
        assert_eq!(partitions("").count(), 0);
    }

    #[test]
    fn single_letter_has_empty_partition() {
        let parts: Vec<_> = partitions("a").collect();
        assert_eq!(parts, vec![Partition::new("", "")]);
    }

    #[test]
    fn partitions_of_foo() {
        let expected: BTreeSet<_> = [
            Partition::new("", "oo"),
            Partition::new("f", "o"),
            Partition::new("fo", ""),
        ]
        .into_iter()
        .collect();
        assert_eq!(partition_set("foo"), expected);
    }

    #[test]
    fn partitions_are_in_position_order() {
        let parts: Vec<_> = partitions("wxyz").collect();
        assert_eq!(
            parts,
            vec![
                Partition::new("", "xyz"),
                Partition::new("w", "yz"),
                Partition::new("wx", "z"),
                Partition::new("wxy", ""),
            ]
        );
    }

    #[test]
    fn one_partition_per_character() {
        for word in ["a", "lo", "foo", "wxyz", "épée"] {
            assert_eq!(partitions(word).count(), word.chars().count());
        }
    }

    #[test]
    fn multibyte_characters_are_removed_whole() {
        let parts: Vec<_> = partitions("épée").collect();
        assert_eq!(parts[0], Partition::new("", "pée"));
        assert_eq!(parts[2], Partition::new("ép", "e"));
    }

    #[test]
    fn repeated_letters_give_repeated_partitions() {
        // Removing either 'o' of "foo" leaves the same letters but not the same split
        let parts: Vec<_> = partitions("foo").collect();
        assert_ne!(parts[1], parts[2]);
    }

    #[test]
    fn display_marks_the_gap() {
        assert_eq!(Partition::new("c", "ld").to_string(), "c_ld");
    }
}
