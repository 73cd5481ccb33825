// src/charset.rs
//! Character classes shared by the strength rules and the generator.

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";

/// Characters accepted by the special-character rule.
pub const SPECIAL: &str = "!@#$%^&*(),.?\":{}|<>";

/// The full printable ASCII punctuation range used for generation.
///
/// This is a superset of [`SPECIAL`].
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Generation alphabet: letters, digits and punctuation, 94 characters.
pub fn alphabet() -> Vec<char> {
    UPPERCASE
        .chars()
        .chain(LOWERCASE.chars())
        .chain(DIGITS.chars())
        .chain(PUNCTUATION.chars())
        .collect()
}

pub fn is_special(c: char) -> bool {
    SPECIAL.contains(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn alphabet_has_no_duplicates() {
        let chars = alphabet();
        let unique: HashSet<_> = chars.iter().collect();
        assert_eq!(chars.len(), 94);
        assert_eq!(unique.len(), chars.len());
    }

    #[test]
    fn punctuation_covers_special_set() {
        assert!(SPECIAL.chars().all(|c| PUNCTUATION.contains(c)));
        assert!(PUNCTUATION.chars().all(|c| c.is_ascii_punctuation()));
        assert_eq!(PUNCTUATION.len(), 32);
    }

    #[test]
    fn special_set_excludes_some_punctuation() {
        assert!(!is_special('-'));
        assert!(!is_special('_'));
        assert!(is_special('!'));
        assert!(is_special('"'));
    }
}
