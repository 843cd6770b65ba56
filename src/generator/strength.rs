//! Password strength heuristic

use std::collections::HashSet;

use log::trace;
use serde::{Deserialize, Serialize};

use super::charset::CharacterClass;

const LENGTH_THRESHOLDS: [usize; 3] = [8, 12, 16];
const CLASS_THRESHOLDS: [usize; 3] = [1, 2, 3];

/// Coarse strength bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrengthLabel::Weak => write!(f, "Weak"),
            StrengthLabel::Medium => write!(f, "Medium"),
            StrengthLabel::Strong => write!(f, "Strong"),
        }
    }
}

/// Result of scoring a password
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthAssessment {
    /// 0 to 6
    pub score: u8,
    pub label: StrengthLabel,
    /// Width of a strength meter bar, in percent
    pub width_percent: u8,
}

/// Score a password.
///
/// One point per length threshold met (8, 12, 16) and one per class-diversity
/// threshold met (1, 2, 3 distinct classes). Scores up to 3 are weak, 4 and 5
/// medium, 6 strong.
///
/// # Example
/// ```
/// use passqr::{assess_strength, StrengthLabel};
///
/// let assessment = assess_strength("Abcdefgh12!@");
/// assert_eq!(assessment.score, 5);
/// assert_eq!(assessment.label, StrengthLabel::Medium);
/// ```
pub fn assess_strength(password: &str) -> StrengthAssessment {
    if password.is_empty() {
        return StrengthAssessment {
            score: 0,
            label: StrengthLabel::Weak,
            width_percent: 0,
        };
    }

    let length = password.chars().count();
    let classes: HashSet<CharacterClass> = password.chars().map(CharacterClass::of).collect();

    let length_points = LENGTH_THRESHOLDS.iter().filter(|&&t| length >= t).count();
    let class_points = CLASS_THRESHOLDS.iter().filter(|&&t| classes.len() >= t).count();
    let score = (length_points + class_points) as u8;

    let (label, width_percent) = match score {
        0..=3 => (StrengthLabel::Weak, 33),
        4..=5 => (StrengthLabel::Medium, 66),
        _ => (StrengthLabel::Strong, 100),
    };

    trace!("Strength score {} ({} classes, length {})", score, classes.len(), length);

    StrengthAssessment {
        score,
        label,
        width_percent,
    }
}
