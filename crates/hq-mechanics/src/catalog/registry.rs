//! The standard skill catalog content.
//!
//! Produces the same definitions a content file would, but compiled in so
//! the engine always starts from a known-good catalog.

use hq_core::Attribute::{
    self, Body, Charisma, Dexterity, Intelligence, Reflexes, Strength, Willpower,
};
use hq_core::SkillId;

use super::definition::{COST_TABLE_LEN, DISABLED_COST, SkillDefinition};
use super::tier::TierThresholds;

const X: i32 = DISABLED_COST;

/// Combat skills: cheap to start, steady climb.
const COMBAT_COSTS: [i32; COST_TABLE_LEN] = [8, 4, 8, 12, 16, 20, 24, 28, 32, 36, 40];

/// Technical and support skills.
const SUPPORT_COSTS: [i32; COST_TABLE_LEN] = [12, 6, 12, 18, 24, 30, 36, 42, 48, 54, 60];

/// Command skills are the most expensive to master.
const COMMAND_COSTS: [i32; COST_TABLE_LEN] = [12, 12, 24, 36, 48, 60, 72, 84, 96, 108, 120];

/// Roleplay skills stop at level 5.
const ROLEPLAY_COSTS: [i32; COST_TABLE_LEN] = [20, 10, 20, 30, 40, 50, X, X, X, X, X];

/// Trained-or-not skills have a single purchasable level.
const BINARY_COSTS: [i32; COST_TABLE_LEN] = [10, X, X, X, X, X, X, X, X, X, X];

const STANDARD_TIERS: TierThresholds = TierThresholds {
    green: 1,
    regular: 3,
    veteran: 4,
    elite: 5,
    heroic: 6,
    legendary: 7,
};

const SUPPORT_TIERS: TierThresholds = TierThresholds {
    green: 2,
    regular: 4,
    veteran: 5,
    elite: 7,
    heroic: 8,
    legendary: 9,
};

const ROLEPLAY_TIERS: TierThresholds = TierThresholds {
    green: 1,
    regular: 2,
    veteran: 3,
    elite: 4,
    heroic: 5,
    legendary: 6,
};

#[derive(Clone, Copy)]
enum Profile {
    Combat,
    Support,
    Command,
    Roleplay,
    Binary,
}

impl Profile {
    fn costs(self) -> [i32; COST_TABLE_LEN] {
        match self {
            Self::Combat => COMBAT_COSTS,
            Self::Support => SUPPORT_COSTS,
            Self::Command => COMMAND_COSTS,
            Self::Roleplay => ROLEPLAY_COSTS,
            Self::Binary => BINARY_COSTS,
        }
    }

    fn thresholds(self) -> TierThresholds {
        match self {
            Self::Combat | Self::Command => STANDARD_TIERS,
            Self::Support => SUPPORT_TIERS,
            Self::Roleplay | Self::Binary => ROLEPLAY_TIERS,
        }
    }
}

fn skill(
    id: SkillId,
    target: i32,
    links: &[Attribute],
    profile: Profile,
) -> SkillDefinition {
    SkillDefinition {
        id,
        target,
        first_attribute: links.first().copied(),
        second_attribute: links.get(1).copied(),
        uses_level: !matches!(profile, Profile::Binary),
        costs: profile.costs(),
        thresholds: profile.thresholds(),
    }
}

/// Every standard skill definition, in [`SkillId::ALL`] order.
pub fn standard_definitions() -> Vec<SkillDefinition> {
    use Profile::{Binary, Combat, Command, Roleplay, Support};
    use SkillId as S;

    vec![
        // Unit operation
        skill(S::PilotingMek, 8, &[Dexterity, Reflexes], Combat),
        skill(S::GunneryMek, 7, &[Dexterity], Combat),
        skill(S::PilotingAerospace, 8, &[Dexterity, Reflexes], Combat),
        skill(S::GunneryAerospace, 7, &[Dexterity], Combat),
        skill(S::PilotingGroundVehicle, 8, &[Dexterity, Reflexes], Combat),
        skill(S::PilotingVtol, 8, &[Dexterity, Reflexes], Combat),
        skill(S::PilotingNaval, 8, &[Dexterity, Reflexes], Combat),
        skill(S::GunneryVehicle, 7, &[Dexterity], Combat),
        skill(S::Artillery, 8, &[Intelligence, Willpower], Combat),
        skill(S::GunneryBattleArmor, 7, &[Dexterity], Combat),
        skill(S::GunneryProtoMek, 7, &[Dexterity], Combat),
        skill(S::SmallArms, 7, &[Dexterity], Combat),
        skill(S::AntiMek, 8, &[Dexterity, Reflexes], Combat),
        skill(S::PilotingSpacecraft, 8, &[Dexterity, Reflexes], Combat),
        skill(S::GunnerySpacecraft, 7, &[Dexterity], Combat),
        skill(S::MeleeWeapons, 7, &[Dexterity], Combat),
        skill(S::MartialArts, 7, &[Reflexes, Dexterity], Combat),
        skill(S::ThrownWeapons, 7, &[Dexterity], Combat),
        skill(S::Archery, 7, &[Dexterity], Combat),
        // Technical
        skill(S::TechMek, 9, &[Dexterity, Intelligence], Support),
        skill(S::TechMechanic, 9, &[Dexterity, Intelligence], Support),
        skill(S::TechAero, 9, &[Dexterity, Intelligence], Support),
        skill(S::TechBattleArmor, 9, &[Dexterity, Intelligence], Support),
        skill(S::TechVessel, 9, &[Dexterity, Intelligence], Support),
        skill(S::Astech, 10, &[], Binary),
        skill(S::MedTech, 9, &[Intelligence], Support),
        skill(S::Doctor, 11, &[Intelligence, Dexterity], Support),
        skill(S::Navigation, 9, &[Intelligence], Support),
        skill(S::HyperspaceNavigation, 10, &[Intelligence, Willpower], Support),
        skill(S::Computers, 9, &[Intelligence], Support),
        skill(S::Communications, 9, &[Intelligence], Support),
        skill(S::SensorOperations, 9, &[Intelligence, Willpower], Support),
        skill(S::Demolitions, 9, &[Dexterity, Intelligence], Support),
        skill(S::SecuritySystems, 10, &[Dexterity, Intelligence], Support),
        skill(S::Cryptography, 10, &[Intelligence, Willpower], Support),
        // Command and administration
        skill(S::Administration, 8, &[Intelligence, Willpower], Support),
        skill(S::Tactics, 9, &[Intelligence, Willpower], Command),
        skill(S::Strategy, 10, &[Intelligence, Willpower], Command),
        skill(S::Leadership, 8, &[Willpower, Charisma], Command),
        skill(S::Training, 9, &[Intelligence, Charisma], Support),
        // Social
        skill(S::Negotiation, 8, &[Charisma], Support),
        skill(S::Scrounge, 8, &[Charisma], Support),
        skill(S::Protocols, 8, &[Willpower, Charisma], Roleplay),
        skill(S::Interrogation, 8, &[Willpower], Roleplay),
        skill(S::Acting, 8, &[Charisma], Roleplay),
        skill(S::Streetwise, 8, &[Charisma], Roleplay),
        skill(S::Disguise, 8, &[Charisma], Roleplay),
        skill(S::AnimalHandling, 8, &[Willpower], Roleplay),
        // Physical and field
        skill(S::Acrobatics, 8, &[Reflexes], Combat),
        skill(S::Climbing, 7, &[Dexterity], Combat),
        skill(S::Running, 7, &[Reflexes], Combat),
        skill(S::Swimming, 7, &[Strength], Combat),
        skill(S::Stealth, 8, &[Reflexes, Intelligence], Combat),
        skill(S::Survival, 8, &[Body, Intelligence], Support),
        skill(S::Perception, 7, &[Intelligence], Support),
        skill(S::ZeroGOperations, 8, &[Reflexes], Combat),
        skill(S::Tracking, 8, &[Intelligence, Willpower], Support),
        skill(S::CareerSoldier, 7, &[], Roleplay),
    ]
}
