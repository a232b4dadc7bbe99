//! Core domain types for the tissue adaptation simulator.
//!
//! This module defines the fundamental types used throughout the system:
//! - Exercise categories and their loading facets
//! - Ordinal levels produced by the label scales
//! - Tissue effects and per-tissue responses
//! - Evaluation input and result records

use crate::scales::{normalize_tag, Scale};
use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Exercise Categories
// ============================================================================

/// Type of exercise being performed
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    ResistanceStanding,
    ResistanceSeated,
    Running,
    Jumping,
    Walking,
    CyclingSwimming,
    Sedentary,
}

impl ExerciseCategory {
    /// All categories, in the order a front end should offer them
    pub const ALL: [ExerciseCategory; 7] = [
        ExerciseCategory::ResistanceStanding,
        ExerciseCategory::ResistanceSeated,
        ExerciseCategory::Running,
        ExerciseCategory::Jumping,
        ExerciseCategory::Walking,
        ExerciseCategory::CyclingSwimming,
        ExerciseCategory::Sedentary,
    ];

    /// Stable snake_case identifier (matches the serde form)
    pub fn id(self) -> &'static str {
        match self {
            ExerciseCategory::ResistanceStanding => "resistance_standing",
            ExerciseCategory::ResistanceSeated => "resistance_seated",
            ExerciseCategory::Running => "running",
            ExerciseCategory::Jumping => "jumping",
            ExerciseCategory::Walking => "walking",
            ExerciseCategory::CyclingSwimming => "cycling_swimming",
            ExerciseCategory::Sedentary => "sedentary",
        }
    }

    /// Human-readable label shown to users
    pub fn label(self) -> &'static str {
        match self {
            ExerciseCategory::ResistanceStanding => {
                "Resistance Training - Standing (Weightbearing)"
            }
            ExerciseCategory::ResistanceSeated => {
                "Resistance Training - Seated/Supine (Non-Weightbearing)"
            }
            ExerciseCategory::Running => "Running / Moderate Impact Cardio",
            ExerciseCategory::Jumping => "Jumping / High Impact Plyometrics",
            ExerciseCategory::Walking => "Walking / Low Impact Weightbearing",
            ExerciseCategory::CyclingSwimming => "Cycling / Swimming (Non-Weightbearing Cardio)",
            ExerciseCategory::Sedentary => "Sedentary / Immobilized",
        }
    }

    pub fn is_resistance(self) -> bool {
        matches!(
            self,
            ExerciseCategory::ResistanceStanding | ExerciseCategory::ResistanceSeated
        )
    }

    pub fn is_weightbearing(self) -> bool {
        matches!(
            self,
            ExerciseCategory::ResistanceStanding
                | ExerciseCategory::Running
                | ExerciseCategory::Jumping
                | ExerciseCategory::Walking
        )
    }

    pub fn is_high_impact(self) -> bool {
        self == ExerciseCategory::Jumping
    }

    pub fn is_moderate_impact(self) -> bool {
        self == ExerciseCategory::Running
    }

    pub fn is_low_impact(self) -> bool {
        self == ExerciseCategory::Walking
    }

    pub fn is_sedentary(self) -> bool {
        self == ExerciseCategory::Sedentary
    }
}

impl fmt::Display for ExerciseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExerciseCategory {
    type Err = Error;

    /// Accepts the snake_case id, the variant name, or the full label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_tag(s);
        ExerciseCategory::ALL
            .iter()
            .copied()
            .find(|c| {
                c.label().eq_ignore_ascii_case(s.trim()) || normalize_tag(c.id()) == wanted
            })
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

// ============================================================================
// Ordinal Levels
// ============================================================================

/// Position of a label within its ordinal scale (1-based)
///
/// Level 0 is the sentinel for an unspecified or unrecognised label and sits
/// below every positive threshold.
#[derive(
    Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(transparent)]
pub struct Level(u8);

impl Level {
    pub const UNSPECIFIED: Level = Level(0);

    pub const fn new(value: u8) -> Self {
        Level(value)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub fn is_unspecified(self) -> bool {
        self.0 == 0
    }
}

// ============================================================================
// Tissues and Effects
// ============================================================================

/// Tissue category being assessed
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Tissue {
    Muscle,
    Tendon,
    Bone,
}

impl Tissue {
    pub const ALL: [Tissue; 3] = [Tissue::Muscle, Tissue::Tendon, Tissue::Bone];

    pub fn name(self) -> &'static str {
        match self {
            Tissue::Muscle => "Muscle",
            Tissue::Tendon => "Tendon",
            Tissue::Bone => "Bone",
        }
    }
}

impl fmt::Display for Tissue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Likely net effect of the loading on a tissue
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TissueEffect {
    Increase,
    Maintain,
    Decrease,
    PotentialRisk,
}

impl TissueEffect {
    pub fn symbol(self) -> &'static str {
        match self {
            TissueEffect::Increase => "▲",
            TissueEffect::Maintain => "▬",
            TissueEffect::Decrease => "▼",
            TissueEffect::PotentialRisk => "⚠️",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TissueEffect::Increase => "Increase",
            TissueEffect::Maintain => "Maintain",
            TissueEffect::Decrease => "Decrease",
            TissueEffect::PotentialRisk => "Potential Risk",
        }
    }
}

impl fmt::Display for TissueEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.symbol(), self.label())
    }
}

// ============================================================================
// Evaluation Input and Result
// ============================================================================

/// Training-load parameters for a single evaluation
///
/// `reps` and `effort` only matter for resistance categories; the evaluator
/// ignores them otherwise.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvaluationInput {
    pub category: ExerciseCategory,
    pub intensity: Level,
    pub reps: Level,
    pub volume: Level,
    pub frequency: Level,
    pub effort: Level,
}

impl EvaluationInput {
    /// Build an input from scale labels
    ///
    /// Unrecognised labels resolve to [`Level::UNSPECIFIED`].
    pub fn from_labels(
        category: ExerciseCategory,
        intensity: &str,
        reps: &str,
        volume: &str,
        frequency: &str,
        effort: &str,
    ) -> Self {
        Self {
            category,
            intensity: Scale::Intensity.level_of(intensity),
            reps: Scale::Reps.level_of(reps),
            volume: Scale::Volume.level_of(volume),
            frequency: Scale::Frequency.level_of(frequency),
            effort: Scale::Effort.level_of(effort),
        }
    }
}

/// Effect on one tissue plus the rationale behind it
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TissueResponse {
    pub effect: TissueEffect,
    pub explanation: String,
}

/// Response of all three tissues to one input
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvaluationResult {
    #[serde(rename = "Muscle")]
    pub muscle: TissueResponse,
    #[serde(rename = "Tendon")]
    pub tendon: TissueResponse,
    #[serde(rename = "Bone")]
    pub bone: TissueResponse,
}

impl EvaluationResult {
    pub fn get(&self, tissue: Tissue) -> &TissueResponse {
        match tissue {
            Tissue::Muscle => &self.muscle,
            Tissue::Tendon => &self.tendon,
            Tissue::Bone => &self.bone,
        }
    }

    /// Responses in display order: muscle, tendon, bone
    pub fn iter(&self) -> impl Iterator<Item = (Tissue, &TissueResponse)> + '_ {
        Tissue::ALL.into_iter().map(move |t| (t, self.get(t)))
    }
}
