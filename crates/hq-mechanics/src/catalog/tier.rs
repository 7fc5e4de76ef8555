//! Qualitative experience tiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Experience tier derived from a skill level.
///
/// Ultra-green is synthetic: it has no stored threshold and covers every
/// level below green.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceTier {
    /// Below green.
    UltraGreen,
    /// Fresh out of training.
    Green,
    /// Competent.
    Regular,
    /// Seasoned.
    Veteran,
    /// Among the best.
    Elite,
    /// Exceptional.
    Heroic,
    /// The stuff of stories.
    Legendary,
}

impl ExperienceTier {
    /// Every tier from lowest to highest.
    pub const ALL: [ExperienceTier; 7] = [
        Self::UltraGreen,
        Self::Green,
        Self::Regular,
        Self::Veteran,
        Self::Elite,
        Self::Heroic,
        Self::Legendary,
    ];
}

impl fmt::Display for ExperienceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::UltraGreen => "Ultra-Green",
            Self::Green => "Green",
            Self::Regular => "Regular",
            Self::Veteran => "Veteran",
            Self::Elite => "Elite",
            Self::Heroic => "Heroic",
            Self::Legendary => "Legendary",
        };
        write!(f, "{label}")
    }
}

/// The six stored level thresholds, strictly increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThresholds {
    /// First green level.
    pub green: i32,
    /// First regular level.
    pub regular: i32,
    /// First veteran level.
    pub veteran: i32,
    /// First elite level. Must be at most 10.
    pub elite: i32,
    /// First heroic level.
    pub heroic: i32,
    /// First legendary level.
    pub legendary: i32,
}

impl TierThresholds {
    /// Thresholds as an array in ascending tier order.
    pub fn as_array(&self) -> [i32; 6] {
        [
            self.green,
            self.regular,
            self.veteran,
            self.elite,
            self.heroic,
            self.legendary,
        ]
    }

    /// The level at which a tier begins. Ultra-green is half of green,
    /// rounded down.
    pub fn level_for(&self, tier: ExperienceTier) -> i32 {
        match tier {
            ExperienceTier::UltraGreen => self.green.div_euclid(2),
            ExperienceTier::Green => self.green,
            ExperienceTier::Regular => self.regular,
            ExperienceTier::Veteran => self.veteran,
            ExperienceTier::Elite => self.elite,
            ExperienceTier::Heroic => self.heroic,
            ExperienceTier::Legendary => self.legendary,
        }
    }

    /// The tier a level falls in, scanning thresholds from legendary down.
    pub fn tier_for(&self, level: i32) -> ExperienceTier {
        if level >= self.legendary {
            ExperienceTier::Legendary
        } else if level >= self.heroic {
            ExperienceTier::Heroic
        } else if level >= self.elite {
            ExperienceTier::Elite
        } else if level >= self.veteran {
            ExperienceTier::Veteran
        } else if level >= self.regular {
            ExperienceTier::Regular
        } else if level >= self.green {
            ExperienceTier::Green
        } else {
            ExperienceTier::UltraGreen
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLDS: TierThresholds = TierThresholds {
        green: 2,
        regular: 4,
        veteran: 5,
        elite: 7,
        heroic: 8,
        legendary: 9,
    };

    #[test]
    fn tier_for_scans_descending() {
        assert_eq!(THRESHOLDS.tier_for(0), ExperienceTier::UltraGreen);
        assert_eq!(THRESHOLDS.tier_for(1), ExperienceTier::UltraGreen);
        assert_eq!(THRESHOLDS.tier_for(2), ExperienceTier::Green);
        assert_eq!(THRESHOLDS.tier_for(3), ExperienceTier::Green);
        assert_eq!(THRESHOLDS.tier_for(4), ExperienceTier::Regular);
        assert_eq!(THRESHOLDS.tier_for(5), ExperienceTier::Veteran);
        assert_eq!(THRESHOLDS.tier_for(6), ExperienceTier::Veteran);
        assert_eq!(THRESHOLDS.tier_for(7), ExperienceTier::Elite);
        assert_eq!(THRESHOLDS.tier_for(8), ExperienceTier::Heroic);
        assert_eq!(THRESHOLDS.tier_for(9), ExperienceTier::Legendary);
        assert_eq!(THRESHOLDS.tier_for(10), ExperienceTier::Legendary);
    }

    #[test]
    fn ultra_green_is_half_green_rounded_down() {
        assert_eq!(THRESHOLDS.level_for(ExperienceTier::UltraGreen), 1);
        let odd = TierThresholds {
            green: 3,
            ..THRESHOLDS
        };
        assert_eq!(odd.level_for(ExperienceTier::UltraGreen), 1);
    }

    #[test]
    fn level_for_round_trips_through_tier_for() {
        for tier in ExperienceTier::ALL {
            let level = THRESHOLDS.level_for(tier);
            assert_eq!(THRESHOLDS.tier_for(level), tier);
        }
    }

    #[test]
    fn display() {
        assert_eq!(ExperienceTier::UltraGreen.to_string(), "Ultra-Green");
        assert_eq!(ExperienceTier::Legendary.to_string(), "Legendary");
    }
}
