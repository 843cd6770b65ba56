//! Character classes used by the password generator

use serde::{Deserialize, Serialize};

const LOWER_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPER_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SPECIAL_SYMBOLS: &str = "!@#$%^&*()_+-={}[]|:;<>,.?/~";

/// A fixed alphabet contributing candidate characters to a password
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    /// a-z, always active
    Lowercase,
    /// A-Z
    Uppercase,
    /// 0-9
    Digits,
    /// Punctuation symbols
    Symbols,
}

impl CharacterClass {
    /// All classes, in seeding order
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    /// The alphabet of this class
    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWER_LETTERS,
            CharacterClass::Uppercase => UPPER_LETTERS,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SPECIAL_SYMBOLS,
        }
    }

    /// Classify a character.
    ///
    /// Anything that is not an ASCII letter or digit counts as a symbol, so
    /// every character belongs to exactly one class.
    pub fn of(ch: char) -> Self {
        if ch.is_ascii_lowercase() {
            CharacterClass::Lowercase
        } else if ch.is_ascii_uppercase() {
            CharacterClass::Uppercase
        } else if ch.is_ascii_digit() {
            CharacterClass::Digits
        } else {
            CharacterClass::Symbols
        }
    }
}

impl std::fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CharacterClass::Lowercase => write!(f, "lowercase"),
            CharacterClass::Uppercase => write!(f, "uppercase"),
            CharacterClass::Digits => write!(f, "digits"),
            CharacterClass::Symbols => write!(f, "symbols"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabets_are_disjoint() {
        for (i, a) in CharacterClass::ALL.iter().enumerate() {
            for b in &CharacterClass::ALL[i + 1..] {
                assert!(
                    !a.alphabet().chars().any(|c| b.alphabet().contains(c)),
                    "{} and {} overlap",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_alphabet_members_classify_to_their_class() {
        for class in CharacterClass::ALL {
            assert!(class.alphabet().chars().all(|c| CharacterClass::of(c) == class));
        }
    }

    #[test]
    fn test_of_non_ascii_is_symbol() {
        assert_eq!(CharacterClass::of('é'), CharacterClass::Symbols);
        assert_eq!(CharacterClass::of(' '), CharacterClass::Symbols);
    }

    #[test]
    fn test_alphabet_sizes() {
        assert_eq!(CharacterClass::Lowercase.alphabet().len(), 26);
        assert_eq!(CharacterClass::Uppercase.alphabet().len(), 26);
        assert_eq!(CharacterClass::Digits.alphabet().len(), 10);
        assert_eq!(CharacterClass::Symbols.alphabet().len(), 28);
    }
}
