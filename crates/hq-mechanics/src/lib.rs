//! Skill resolution and progression engine for HQ.
//!
//! Turns a person's attributes, trained skills, age and situation into a
//! target number, rolls 2d6 against it and grades the result into one of
//! nine margin-of-success bands. Also prices and buys skill levels, runs
//! training passes and applies aging drift across a roster.
//!
//! Content (the skill catalog and the aging table) is validated once at
//! construction and immutable afterwards.

pub mod aging;
pub mod catalog;
pub mod config;
pub mod dice;
pub mod engine;
pub mod error;
pub mod modifier;
pub mod progression;
pub mod resolution;
pub mod validate;

pub use aging::{AgingBracket, AgingMilestone, AgingModifiers, AgingTable};
pub use catalog::{ExperienceTier, SkillCatalog, SkillDefinition, TierThresholds};
pub use config::EngineConfig;
pub use dice::{DicePool, DiceRoller, FixedRoll, Roll, RollSource, ScriptedRolls};
pub use engine::SkillEngine;
pub use error::{MechError, MechResult};
pub use modifier::{ModifierBreakdown, ModifierSource, SituationalModifier, TargetNumber};
pub use progression::Advancement;
pub use resolution::{CheckOutcome, CheckRequest, MarginOfSuccess};
pub use validate::ValidationIssue;
