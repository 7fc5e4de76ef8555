//! Skill identity and a person's trained skill instances.
//!
//! [`SkillId`] is the closed set of skills the campaign knows about. Names
//! are only used at the content boundary ([`SkillId::from_name`], serde);
//! everything past that boundary passes the enum handle around.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;

/// Highest level a skill instance can be trained to.
pub const MAXIMUM_SKILL_LEVEL: i32 = 10;

macro_rules! skill_ids {
    ($($(#[$doc:meta])* $variant:ident => $name:literal,)+) => {
        /// Identity of a skill in the catalog.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum SkillId {
            $($(#[$doc])* $variant,)+
        }

        impl SkillId {
            /// Every skill, in catalog order.
            pub const ALL: &'static [SkillId] = &[$(Self::$variant,)+];

            /// Human-readable name, as used in content files.
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }
    };
}

skill_ids! {
    /// Driving a BattleMek.
    PilotingMek => "Piloting/Mek",
    /// Firing BattleMek weapons.
    GunneryMek => "Gunnery/Mek",
    /// Flying aerospace fighters.
    PilotingAerospace => "Piloting/Aerospace",
    /// Firing aerospace fighter weapons.
    GunneryAerospace => "Gunnery/Aerospace",
    /// Driving tracked, wheeled and hover vehicles.
    PilotingGroundVehicle => "Piloting/Ground Vehicle",
    /// Flying VTOL craft.
    PilotingVtol => "Piloting/VTOL",
    /// Handling surface and submarine vessels.
    PilotingNaval => "Piloting/Naval",
    /// Firing vehicle-mounted weapons.
    GunneryVehicle => "Gunnery/Vehicle",
    /// Indirect fire.
    Artillery => "Artillery",
    /// Firing battle armor weapons.
    GunneryBattleArmor => "Gunnery/Battle Armor",
    /// Firing ProtoMek weapons.
    GunneryProtoMek => "Gunnery/ProtoMek",
    /// Personal firearms.
    SmallArms => "Small Arms",
    /// Infantry attacks against Meks.
    AntiMek => "Anti-Mek",
    /// Handling DropShips and JumpShips.
    PilotingSpacecraft => "Piloting/Spacecraft",
    /// Firing capital and spacecraft weapons.
    GunnerySpacecraft => "Gunnery/Spacecraft",
    /// Bladed and blunt hand weapons.
    MeleeWeapons => "Melee Weapons",
    /// Unarmed combat.
    MartialArts => "Martial Arts",
    /// Knives, grenades and other thrown weapons.
    ThrownWeapons => "Thrown Weapons",
    /// Bows and crossbows.
    Archery => "Archery",
    /// Maintaining and repairing Meks.
    TechMek => "Tech/Mek",
    /// Maintaining and repairing vehicles.
    TechMechanic => "Tech/Mechanic",
    /// Maintaining and repairing aerospace units.
    TechAero => "Tech/Aero",
    /// Maintaining and repairing battle armor.
    TechBattleArmor => "Tech/Battle Armor",
    /// Maintaining and repairing large vessels.
    TechVessel => "Tech/Vessel",
    /// Assisting technicians; trained or not, no levels.
    Astech => "Astech",
    /// Assisting doctors.
    MedTech => "MedTech",
    /// Treating injuries.
    Doctor => "Doctor",
    /// Planetary navigation.
    Navigation => "Navigation",
    /// Plotting jumps.
    HyperspaceNavigation => "Hyperspace Navigation",
    /// Operating and programming computers.
    Computers => "Computers",
    /// Operating communications equipment.
    Communications => "Communications",
    /// Operating sensor suites.
    SensorOperations => "Sensor Operations",
    /// Placing and disarming explosives.
    Demolitions => "Demolitions",
    /// Bypassing locks and alarms.
    SecuritySystems => "Security Systems",
    /// Making and breaking codes.
    Cryptography => "Cryptography",
    /// Running an organisation's paperwork.
    Administration => "Administration",
    /// Small-unit battlefield command.
    Tactics => "Tactics",
    /// Campaign-level planning.
    Strategy => "Strategy",
    /// Inspiring and directing troops.
    Leadership => "Leadership",
    /// Teaching others.
    Training => "Training",
    /// Bargaining over contracts and prices.
    Negotiation => "Negotiation",
    /// Finding parts and supplies off the books.
    Scrounge => "Scrounge",
    /// Court and diplomatic etiquette.
    Protocols => "Protocols",
    /// Extracting information from prisoners.
    Interrogation => "Interrogation",
    /// Convincingly playing a role.
    Acting => "Acting",
    /// Knowing the underworld.
    Streetwise => "Streetwise",
    /// Changing appearance.
    Disguise => "Disguise",
    /// Training and calming animals.
    AnimalHandling => "Animal Handling",
    /// Tumbling and balance.
    Acrobatics => "Acrobatics",
    /// Scaling walls and cliffs.
    Climbing => "Climbing",
    /// Sprinting and distance running.
    Running => "Running",
    /// Moving through water.
    Swimming => "Swimming",
    /// Moving unseen.
    Stealth => "Stealth",
    /// Living off the land.
    Survival => "Survival",
    /// Noticing things.
    Perception => "Perception",
    /// Working in microgravity.
    ZeroGOperations => "Zero-G Operations",
    /// Following trails.
    Tracking => "Tracking",
    /// Professional soldiering knowledge.
    CareerSoldier => "Career/Soldier",
}

impl SkillId {
    /// Position of this skill in [`SkillId::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Resolve a content name to a skill handle, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.name().eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SkillId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| CoreError::UnknownSkill(s.to_string()))
    }
}

impl TryFrom<String> for SkillId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SkillId> for String {
    fn from(id: SkillId) -> Self {
        id.name().to_string()
    }
}

/// A person's training in one skill.
///
/// The level is clamped to `0..=MAXIMUM_SKILL_LEVEL`. The bonus is a flat
/// adjustment granted from outside the engine (traits, implants) and is not
/// clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillInstance {
    /// Which skill this is.
    pub skill: SkillId,
    #[serde(deserialize_with = "deserialize_level")]
    level: i32,
    /// Flat bonus added to the skill's modifier.
    #[serde(default)]
    pub bonus: i32,
}

impl SkillInstance {
    /// Create an instance at the given level with no bonus.
    pub fn new(skill: SkillId, level: i32) -> Self {
        Self {
            skill,
            level: clamp_level(level),
            bonus: 0,
        }
    }

    /// Set the flat bonus.
    pub fn with_bonus(mut self, bonus: i32) -> Self {
        self.bonus = bonus;
        self
    }

    /// Trained level.
    pub fn level(&self) -> i32 {
        self.level
    }

    /// Overwrite the level, clamping to `0..=MAXIMUM_SKILL_LEVEL`.
    pub fn set_level(&mut self, level: i32) -> i32 {
        self.level = clamp_level(level);
        self.level
    }

    /// Raise the level by one unless already at the maximum. Returns the new level.
    pub fn improve(&mut self) -> i32 {
        self.set_level(self.level + 1)
    }
}

impl fmt::Display for SkillInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.skill, self.level)?;
        match self.bonus {
            0 => Ok(()),
            b if b > 0 => write!(f, " (+{b})"),
            b => write!(f, " ({b})"),
        }
    }
}

fn clamp_level(level: i32) -> i32 {
    level.clamp(0, MAXIMUM_SKILL_LEVEL)
}

fn deserialize_level<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    i32::deserialize(deserializer).map(clamp_level)
}
