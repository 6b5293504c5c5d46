//! Difficulty tiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Playing strength. Each tier fixes a search depth and the set of
/// evaluation terms that are blended in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineLevel {
    /// Uniformly random legal move, no search.
    Random,
    Beginner,
    Easy,
    Medium,
    Hard,
    Expert,
}

impl EngineLevel {
    pub const ALL: [EngineLevel; 6] = [
        EngineLevel::Random,
        EngineLevel::Beginner,
        EngineLevel::Easy,
        EngineLevel::Medium,
        EngineLevel::Hard,
        EngineLevel::Expert,
    ];

    /// Default search depth in plies.
    pub fn depth(self) -> u8 {
        match self {
            EngineLevel::Random => 0,
            EngineLevel::Beginner => 2,
            EngineLevel::Easy => 3,
            EngineLevel::Medium => 4,
            EngineLevel::Hard => 5,
            EngineLevel::Expert => 6,
        }
    }

    /// Piece-square and mobility terms.
    pub fn uses_positional_terms(self) -> bool {
        self >= EngineLevel::Easy
    }

    /// King safety and pawn structure terms.
    pub fn uses_structural_terms(self) -> bool {
        self >= EngineLevel::Medium
    }

    pub fn name(self) -> &'static str {
        match self {
            EngineLevel::Random => "random",
            EngineLevel::Beginner => "beginner",
            EngineLevel::Easy => "easy",
            EngineLevel::Medium => "medium",
            EngineLevel::Hard => "hard",
            EngineLevel::Expert => "expert",
        }
    }
}

impl Default for EngineLevel {
    fn default() -> Self {
        EngineLevel::Easy
    }
}

impl fmt::Display for EngineLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts a tier name (any case) or its index `0..=5`.
impl FromStr for EngineLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(idx) = s.parse::<usize>() {
            return EngineLevel::ALL
                .get(idx)
                .copied()
                .ok_or_else(|| format!("level index {idx} out of range 0..=5"));
        }
        EngineLevel::ALL
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown level '{s}'"))
    }
}
