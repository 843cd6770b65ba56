//! Password generation functionality
//!
//! Every selected character class is guaranteed to appear in the output:
//! required characters are drawn from each class first, the rest is padded
//! from the combined alphabet, and the whole list is shuffled.

use log::{debug, warn};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::charset::CharacterClass;
use super::strength::{StrengthAssessment, assess_strength};
use crate::error::Result;

/// Options for password generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    /// Include uppercase letters (A-Z)
    pub include_uppercase: bool,
    /// Include digits (0-9)
    pub include_numbers: bool,
    /// Include special symbols (!@#$%...)
    pub include_symbols: bool,
    /// Require two characters per active class instead of one
    pub enforce_min_per_class: bool,
    /// Password length before clamping
    pub requested_length: usize,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            include_uppercase: true,
            include_numbers: true,
            include_symbols: true,
            enforce_min_per_class: true,
            requested_length: crate::DEFAULT_PASSWORD_LENGTH,
        }
    }
}

impl GenerationOptions {
    /// Parse options from a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Toggle uppercase letters
    pub fn with_uppercase(mut self, on: bool) -> Self {
        self.include_uppercase = on;
        self
    }

    /// Toggle digits
    pub fn with_numbers(mut self, on: bool) -> Self {
        self.include_numbers = on;
        self
    }

    /// Toggle special symbols
    pub fn with_symbols(mut self, on: bool) -> Self {
        self.include_symbols = on;
        self
    }

    /// Toggle the two-per-class guarantee
    pub fn with_min_per_class(mut self, on: bool) -> Self {
        self.enforce_min_per_class = on;
        self
    }

    /// Set the requested length
    pub fn with_length(mut self, length: usize) -> Self {
        self.requested_length = length;
        self
    }

    /// Active classes in seeding order. Lowercase is always first.
    pub fn active_classes(&self) -> Vec<CharacterClass> {
        let mut classes = vec![CharacterClass::Lowercase];
        if self.include_uppercase {
            classes.push(CharacterClass::Uppercase);
        }
        if self.include_numbers {
            classes.push(CharacterClass::Digits);
        }
        if self.include_symbols {
            classes.push(CharacterClass::Symbols);
        }
        classes
    }

    /// Number of characters guaranteed from each active class
    pub fn per_class_minimum(&self) -> usize {
        if self.enforce_min_per_class { 2 } else { 1 }
    }

    /// Requested length raised to the minimum the active classes need
    pub fn effective_length(&self) -> usize {
        self.requested_length.max(compute_minimum_length(self))
    }
}

/// A freshly generated password with its strength assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub strength: StrengthAssessment,
}

/// Minimum length that fits the guaranteed characters of every active class.
///
/// With `enforce_min_per_class` this is two per active class (2 to 8);
/// otherwise one per active class, but never below 4.
pub fn compute_minimum_length(options: &GenerationOptions) -> usize {
    let active = options.active_classes().len();
    if options.enforce_min_per_class {
        2 * active
    } else {
        active.max(4)
    }
}

/// Generate a password using the thread-local random generator.
///
/// # Example
/// ```
/// use passqr::{generate, GenerationOptions};
///
/// let options = GenerationOptions::default().with_length(12);
/// let generated = generate(&options);
/// assert_eq!(generated.password.len(), 12);
/// ```
pub fn generate(options: &GenerationOptions) -> GeneratedPassword {
    generate_with_rng(options, &mut rand::rng())
}

/// Generate a password drawing from the supplied random generator.
pub fn generate_with_rng<R: Rng + ?Sized>(
    options: &GenerationOptions,
    rng: &mut R,
) -> GeneratedPassword {
    let length = options.effective_length();
    if length > options.requested_length {
        warn!(
            "Requested length {} below minimum, using {}",
            options.requested_length, length
        );
    }

    let classes = options.active_classes();
    debug!(
        "Generating password: length={}, classes={:?}, per_class={}",
        length,
        classes,
        options.per_class_minimum()
    );

    let pool: Vec<char> = classes
        .iter()
        .flat_map(|class| class.alphabet().chars())
        .collect();

    let mut chars: Vec<char> = Vec::with_capacity(length);

    for class in &classes {
        let alphabet: Vec<char> = class.alphabet().chars().collect();
        for _ in 0..options.per_class_minimum() {
            chars.push(alphabet[rng.random_range(0..alphabet.len())]);
        }
    }

    while chars.len() < length {
        chars.push(pool[rng.random_range(0..pool.len())]);
    }

    chars.shuffle(rng);

    let password: String = chars.into_iter().collect();
    let strength = assess_strength(&password);
    GeneratedPassword { password, strength }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn options(
        upper: bool,
        numbers: bool,
        symbols: bool,
        enforce: bool,
        length: usize,
    ) -> GenerationOptions {
        GenerationOptions {
            include_uppercase: upper,
            include_numbers: numbers,
            include_symbols: symbols,
            enforce_min_per_class: enforce,
            requested_length: length,
        }
    }

    #[test]
    fn test_minimum_length_lowercase_only_enforced() {
        assert_eq!(compute_minimum_length(&options(false, false, false, true, 1)), 2);
    }

    #[test]
    fn test_minimum_length_all_classes_enforced() {
        assert_eq!(compute_minimum_length(&options(true, true, true, true, 1)), 8);
    }

    #[test]
    fn test_minimum_length_partial_enforced() {
        assert_eq!(compute_minimum_length(&options(true, false, false, true, 1)), 4);
        assert_eq!(compute_minimum_length(&options(true, true, false, true, 1)), 6);
    }

    #[test]
    fn test_minimum_length_not_enforced_has_floor() {
        assert_eq!(compute_minimum_length(&options(false, false, false, false, 1)), 4);
        assert_eq!(compute_minimum_length(&options(true, true, true, false, 1)), 4);
    }

    #[test]
    fn test_generate_default() {
        let generated = generate(&GenerationOptions::default());
        assert_eq!(generated.password.len(), crate::DEFAULT_PASSWORD_LENGTH);
    }

    #[test]
    fn test_generate_clamps_short_length() {
        let generated = generate(&options(true, true, true, true, 3));
        assert_eq!(generated.password.len(), 8);

        let generated = generate(&options(false, false, false, false, 0));
        assert_eq!(generated.password.len(), 4);
    }

    #[test]
    fn test_generate_lowercase_only() {
        let generated = generate(&options(false, false, false, true, 20));
        assert_eq!(generated.password.len(), 20);
        assert!(generated.password.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_generate_excludes_inactive_classes() {
        let generated = generate(&options(true, false, false, true, 64));
        assert!(generated.password.chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn test_generate_contains_every_active_class() {
        let generated = generate(&options(true, true, true, true, 8));
        let password = &generated.password;
        for class in CharacterClass::ALL {
            let count = password.chars().filter(|&c| CharacterClass::of(c) == class).count();
            assert_eq!(count, 2, "{} in {}", class, password);
        }
    }

    #[test]
    fn test_generate_attaches_strength() {
        let generated = generate(&GenerationOptions::default());
        assert_eq!(generated.strength, assess_strength(&generated.password));
    }

    #[test]
    fn test_generate_with_rng_is_reproducible() {
        let opts = GenerationOptions::default();
        let p1 = generate_with_rng(&opts, &mut StdRng::seed_from_u64(42));
        let p2 = generate_with_rng(&opts, &mut StdRng::seed_from_u64(42));
        assert_eq!(p1, p2);
    }

    #[test]
    fn test_generate_uniqueness() {
        let opts = GenerationOptions::default();
        let p1 = generate(&opts);
        let p2 = generate(&opts);
        // Passwords should be different (extremely high probability)
        assert_ne!(p1.password, p2.password);
    }

    #[test]
    fn test_options_from_json_partial() {
        let opts =
            GenerationOptions::from_json(r#"{"requested_length": 24, "include_symbols": false}"#)
                .unwrap();
        assert_eq!(opts.requested_length, 24);
        assert!(!opts.include_symbols);
        assert!(opts.include_uppercase);
        assert!(opts.enforce_min_per_class);
    }

    #[test]
    fn test_options_from_json_invalid() {
        assert!(GenerationOptions::from_json(r#"{"requested_length": "long"}"#).is_err());
    }

    #[test]
    fn test_options_builder() {
        let opts = GenerationOptions::default()
            .with_uppercase(false)
            .with_numbers(false)
            .with_symbols(false)
            .with_min_per_class(false)
            .with_length(3);
        assert_eq!(opts.active_classes(), vec![CharacterClass::Lowercase]);
        assert_eq!(opts.per_class_minimum(), 1);
        assert_eq!(opts.effective_length(), 4);
    }
}
