//! The six-category energy breakdown.
//!
//! Every generation call produces exactly one breakdown whose six
//! non-negative integers sum to [`ENERGY_TOTAL`]. The total is a contract
//! constant, not a tunable: downstream consumers render it as a fixed-size
//! bar and rely on the sum unconditionally.

use serde::{Deserialize, Serialize};

/// The fixed sum of every valid breakdown.
pub const ENERGY_TOTAL: u32 = 21;

/// The six qualitative energy categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyCategory {
    Classic,
    Playful,
    Romantic,
    Utility,
    Drama,
    Edge,
}

impl EnergyCategory {
    /// All categories, in declaration order.
    pub const ALL: [EnergyCategory; 6] = [
        EnergyCategory::Classic,
        EnergyCategory::Playful,
        EnergyCategory::Romantic,
        EnergyCategory::Utility,
        EnergyCategory::Drama,
        EnergyCategory::Edge,
    ];

    /// Lowercase display name.
    pub fn name(&self) -> &'static str {
        match self {
            EnergyCategory::Classic => "classic",
            EnergyCategory::Playful => "playful",
            EnergyCategory::Romantic => "romantic",
            EnergyCategory::Utility => "utility",
            EnergyCategory::Drama => "drama",
            EnergyCategory::Edge => "edge",
        }
    }
}

/// Six non-negative integers summing to exactly [`ENERGY_TOTAL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyBreakdown {
    pub classic: u32,
    pub playful: u32,
    pub romantic: u32,
    pub utility: u32,
    pub drama: u32,
    pub edge: u32,
}

impl EnergyBreakdown {
    /// The degenerate fallback: all weight on `classic`. Used when every
    /// raw category score is zero.
    pub fn all_classic() -> Self {
        Self {
            classic: ENERGY_TOTAL,
            playful: 0,
            romantic: 0,
            utility: 0,
            drama: 0,
            edge: 0,
        }
    }

    /// Build from per-category values in [`EnergyCategory::ALL`] order.
    pub fn from_values(values: [u32; 6]) -> Self {
        Self {
            classic: values[0],
            playful: values[1],
            romantic: values[2],
            utility: values[3],
            drama: values[4],
            edge: values[5],
        }
    }

    /// Value for a single category.
    pub fn get(&self, category: EnergyCategory) -> u32 {
        match category {
            EnergyCategory::Classic => self.classic,
            EnergyCategory::Playful => self.playful,
            EnergyCategory::Romantic => self.romantic,
            EnergyCategory::Utility => self.utility,
            EnergyCategory::Drama => self.drama,
            EnergyCategory::Edge => self.edge,
        }
    }

    /// Sum of all six categories.
    pub fn sum(&self) -> u32 {
        self.classic + self.playful + self.romantic + self.utility + self.drama + self.edge
    }

    /// The category holding the most points. Ties resolve to the earlier
    /// category in declaration order.
    pub fn dominant(&self) -> EnergyCategory {
        let mut best = EnergyCategory::Classic;
        let mut best_value = self.classic;
        for category in EnergyCategory::ALL {
            let value = self.get(category);
            if value > best_value {
                best = category;
                best_value = value;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_classic_sums_to_total() {
        assert_eq!(EnergyBreakdown::all_classic().sum(), ENERGY_TOTAL);
    }

    #[test]
    fn from_values_ordering() {
        let b = EnergyBreakdown::from_values([1, 2, 3, 4, 5, 6]);
        assert_eq!(b.classic, 1);
        assert_eq!(b.edge, 6);
        assert_eq!(b.sum(), 21);
    }

    #[test]
    fn dominant_prefers_earlier_on_tie() {
        let b = EnergyBreakdown::from_values([5, 5, 5, 2, 2, 2]);
        assert_eq!(b.dominant(), EnergyCategory::Classic);
        let b = EnergyBreakdown::from_values([1, 2, 3, 4, 5, 6]);
        assert_eq!(b.dominant(), EnergyCategory::Edge);
    }
}
