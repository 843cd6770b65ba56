//! # passqr
//!
//! Password generator engine with strength scoring, plus payload helpers for
//! QR code generation.
//!
//! ## Features
//!
//! - Configurable character classes (lowercase always on)
//! - Guaranteed per-class inclusion with an unbiased shuffle
//! - Weak / Medium / Strong strength heuristic
//! - Plain-text and vCard business-card QR payloads
//! - PNG/SVG QR rendering (`render` feature, on by default)
//!
//! ## Example
//!
//! ```
//! use passqr::{generate, GenerationOptions, StrengthLabel};
//!
//! let options = GenerationOptions::default().with_length(20);
//! let generated = generate(&options);
//! assert_eq!(generated.password.len(), 20);
//! assert_eq!(generated.strength.label, StrengthLabel::Strong);
//! ```

pub mod error;
pub mod generator;
pub mod qr;

// Re-export main types
pub use error::{ToolkitError, Result};
pub use generator::{
    assess_strength, compute_minimum_length, generate, generate_with_rng, CharacterClass,
    GeneratedPassword, GenerationOptions, StrengthAssessment, StrengthLabel,
};
pub use qr::{BusinessCard, QrEncoder, QrGenerator, QrImage, QrPayload, QrSize};
#[cfg(feature = "render")]
pub use qr::ImageEncoder;

/// Default requested password length
pub const DEFAULT_PASSWORD_LENGTH: usize = 18;

/// Longest length offered by the length picker
pub const PASSWORD_MAX_SELECTABLE_LENGTH: usize = 64;
