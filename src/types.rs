//! Core value types returned by the password checker.

use std::fmt;

/// Discrete password strength categories, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StrengthTier {
    #[cfg_attr(feature = "serde", serde(rename = "Very Weak"))]
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
    #[cfg_attr(feature = "serde", serde(rename = "Very Strong"))]
    VeryStrong,
}

impl StrengthTier {
    /// Maps a total score to its strength tier.
    ///
    /// Buckets are bounded above: <5, <10, <20, <30, <40, and everything
    /// else. Negative totals land in the lowest bucket.
    pub fn from_score(score: i64) -> Self {
        if score < 5 {
            StrengthTier::VeryWeak
        } else if score < 10 {
            StrengthTier::Weak
        } else if score < 20 {
            StrengthTier::Fair
        } else if score < 30 {
            StrengthTier::Good
        } else if score < 40 {
            StrengthTier::Strong
        } else {
            StrengthTier::VeryStrong
        }
    }

    /// Human-readable label for this tier.
    pub fn label(&self) -> &'static str {
        match self {
            StrengthTier::VeryWeak => "Very Weak",
            StrengthTier::Weak => "Weak",
            StrengthTier::Fair => "Fair",
            StrengthTier::Good => "Good",
            StrengthTier::Strong => "Strong",
            StrengthTier::VeryStrong => "Very Strong",
        }
    }

    /// Whether this tier counts as a strong password.
    pub fn is_strong(&self) -> bool {
        matches!(
            self,
            StrengthTier::Good | StrengthTier::Strong | StrengthTier::VeryStrong
        )
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a single password check.
///
/// Built once per call and never mutated. `score` is the raw sub-score sum
/// and may be negative; `tier` is derived from it, and `is_strong` from the
/// tier.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScoreResult {
    #[cfg_attr(feature = "serde", serde(rename = "strength"))]
    pub tier: StrengthTier,
    pub score: i64,
    pub feedback: Vec<String>,
    pub is_strong: bool,
}
