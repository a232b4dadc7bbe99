//! Ordinal label scales for training-load parameters.
//!
//! Each scale is a fixed, ordered list of buckets. A label resolves to its
//! 1-based position in the list; anything unrecognised resolves to
//! [`Level::UNSPECIFIED`].

use crate::types::Level;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One labelled bucket of a scale
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bucket {
    /// Short tag, e.g. `VeryHigh`
    pub tag: &'static str,
    /// Full descriptive label, e.g. `Very High (>75 min / >20 sets)`
    pub label: &'static str,
}

const fn bucket(tag: &'static str, label: &'static str) -> Bucket {
    Bucket { tag, label }
}

const INTENSITY: [Bucket; 5] = [
    bucket("VeryLow", "Very Low (<30% 1RM / RPE < 4)"),
    bucket("Low", "Low (30-50% 1RM / RPE 4-6)"),
    bucket("Moderate", "Moderate (50-80% 1RM / RPE 6-8)"),
    bucket("High", "High (80-95% 1RM / RPE 8-9)"),
    bucket("VeryHigh", "Very High / Maximal (>95% 1RM / RPE 9.5-10)"),
];

const VOLUME: [Bucket; 5] = [
    bucket("VeryLow", "Very Low (<10 min / < 3 sets)"),
    bucket("Low", "Low (10-20 min / 3-6 sets)"),
    bucket("Moderate", "Moderate (20-45 min / 6-12 sets)"),
    bucket("High", "High (45-75 min / 12-20 sets)"),
    bucket("VeryHigh", "Very High (>75 min / >20 sets)"),
];

const FREQUENCY: [Bucket; 5] = [
    bucket("Infrequent", "Infrequent (<1x / week)"),
    bucket("Low", "Low (1-2x / week)"),
    bucket("Moderate", "Moderate (3-4x / week)"),
    bucket("High", "High (5-6x / week)"),
    bucket("VeryHigh", "Very High (7+x / week)"),
];

const EFFORT: [Bucket; 4] = [
    bucket("LowEffort", "Low Effort (Far from failure)"),
    bucket("ModerateEffort", "Moderate Effort (Reps in reserve)"),
    bucket("HighEffort", "High Effort (1-2 reps shy)"),
    bucket("ToFailure", "To Failure"),
];

const REPS: [Bucket; 4] = [
    bucket("Low", "Low (1-5 reps)"),
    bucket("Moderate", "Moderate (6-12 reps)"),
    bucket("High", "High (13-20 reps)"),
    bucket("VeryHigh", "Very High (20+ reps)"),
];

/// The five ordinal scales
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    Intensity,
    Volume,
    Frequency,
    Effort,
    Reps,
}

/// Label and tag lookup per scale, built once
static LOOKUP: Lazy<HashMap<Scale, HashMap<String, Level>>> = Lazy::new(build_lookup);

fn build_lookup() -> HashMap<Scale, HashMap<String, Level>> {
    Scale::ALL
        .iter()
        .map(|&scale| {
            let mut table = HashMap::new();
            for (idx, b) in scale.buckets().iter().enumerate() {
                let level = Level::new(idx as u8 + 1);
                table.insert(b.label.to_string(), level);
                table.insert(normalize_tag(b.tag), level);
            }
            (scale, table)
        })
        .collect()
}

impl Scale {
    pub const ALL: [Scale; 5] = [
        Scale::Intensity,
        Scale::Volume,
        Scale::Frequency,
        Scale::Effort,
        Scale::Reps,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scale::Intensity => "Intensity / Load",
            Scale::Volume => "Volume - Duration / Sets",
            Scale::Frequency => "Frequency",
            Scale::Effort => "Effort Level (RPE proximity)",
            Scale::Reps => "Volume - Reps per Set",
        }
    }

    /// Buckets in ascending order
    pub fn buckets(self) -> &'static [Bucket] {
        match self {
            Scale::Intensity => &INTENSITY,
            Scale::Volume => &VOLUME,
            Scale::Frequency => &FREQUENCY,
            Scale::Effort => &EFFORT,
            Scale::Reps => &REPS,
        }
    }

    /// Only meaningful for resistance training
    pub fn resistance_only(self) -> bool {
        matches!(self, Scale::Effort | Scale::Reps)
    }

    /// Resolve a label to its level
    ///
    /// Matches the full label exactly, or the short tag ignoring case,
    /// whitespace, `_` and `-`. Unknown labels give [`Level::UNSPECIFIED`].
    pub fn level_of(self, label: &str) -> Level {
        let table = &LOOKUP[&self];
        if let Some(level) = table.get(label) {
            return *level;
        }
        match table.get(&normalize_tag(label)) {
            Some(level) => *level,
            None => {
                tracing::debug!(
                    "Unrecognised {:?} label {:?}, treating as unspecified",
                    self,
                    label
                );
                Level::UNSPECIFIED
            }
        }
    }

    /// Bucket for a level, if it is in range
    pub fn bucket(self, level: Level) -> Option<&'static Bucket> {
        let idx = usize::from(level.get()).checked_sub(1)?;
        self.buckets().get(idx)
    }
}

/// Lowercase and strip separators so `very_high`, `Very High` and `VeryHigh` agree
pub(crate) fn normalize_tag(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}
