//! A single skill's rules: links, difficulty, costs and tier thresholds.

use hq_core::{Attribute, MAXIMUM_SKILL_LEVEL, SkillId};
use serde::{Deserialize, Serialize};

use super::tier::{ExperienceTier, TierThresholds};

/// Cost marking a level that cannot be purchased.
pub const DISABLED_COST: i32 = -1;

/// Number of entries in a cost table (levels 0 through 10).
pub const COST_TABLE_LEN: usize = (MAXIMUM_SKILL_LEVEL + 1) as usize;

/// Rules for one skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDefinition {
    /// Which skill this defines. Serialized as the skill's name.
    #[serde(rename = "name")]
    pub id: SkillId,
    /// Base target number for a trained check, in `[2, 12]`.
    pub target: i32,
    /// First linked attribute, if any.
    #[serde(default)]
    pub first_attribute: Option<Attribute>,
    /// Second linked attribute, if any. Never set without the first.
    #[serde(default)]
    pub second_attribute: Option<Attribute>,
    /// Whether the numeric level matters, or the skill is just trained/untrained.
    pub uses_level: bool,
    /// XP cost of each level, 0 through 10.
    pub costs: [i32; COST_TABLE_LEN],
    /// Level thresholds for the experience tiers.
    pub thresholds: TierThresholds,
}

impl SkillDefinition {
    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    /// The linked attributes, skipping empty slots.
    pub fn linked_attributes(&self) -> impl Iterator<Item = Attribute> + '_ {
        self.first_attribute
            .into_iter()
            .chain(self.second_attribute)
    }

    /// How many attributes the skill links to (0, 1 or 2).
    pub fn link_count(&self) -> usize {
        self.linked_attributes().count()
    }

    /// Returns true if the skill links to two attributes.
    pub fn is_dual_linked(&self) -> bool {
        self.link_count() == 2
    }

    /// XP cost of a single level, or [`DISABLED_COST`] if the level is out
    /// of range or cannot be purchased.
    pub fn cost(&self, level: i32) -> i32 {
        usize::try_from(level)
            .ok()
            .and_then(|i| self.costs.get(i))
            .copied()
            .unwrap_or(DISABLED_COST)
    }

    /// XP to train the skill from nothing up to `level` inclusive.
    ///
    /// Negative levels cost nothing. If any level on the way is disabled
    /// the whole purchase is [`DISABLED_COST`]. The sum saturates at
    /// `i32::MAX`.
    pub fn total_cost(&self, level: i32) -> i32 {
        let mut total: i32 = 0;
        for l in 0..=level {
            let cost = self.cost(l);
            if cost == DISABLED_COST {
                return DISABLED_COST;
            }
            total = total.saturating_add(cost);
        }
        total
    }

    /// Highest purchasable level: the level before the first disabled
    /// entry, or 10 if none are disabled. A skill whose level 0 is
    /// disabled yields -1.
    pub fn max_level(&self) -> i32 {
        self.costs
            .iter()
            .position(|&c| c == DISABLED_COST)
            .map_or(MAXIMUM_SKILL_LEVEL, |i| i as i32 - 1)
    }

    /// The level at which a tier begins.
    pub fn level_for_tier(&self, tier: ExperienceTier) -> i32 {
        self.thresholds.level_for(tier)
    }

    /// The tier a level falls in.
    pub fn tier_for_level(&self, level: i32) -> ExperienceTier {
        self.thresholds.tier_for(level)
    }
}
