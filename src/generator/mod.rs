//! Password generator engine
//!
//! Pure functions of their options: no global state, the random source is
//! borrowed only for drawing values.

mod charset;
pub mod password;
pub mod strength;

pub use charset::CharacterClass;
pub use password::{
    compute_minimum_length, generate, generate_with_rng, GeneratedPassword, GenerationOptions,
};
pub use strength::{assess_strength, StrengthAssessment, StrengthLabel};
