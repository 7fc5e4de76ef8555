//! Core personnel types for HQ: attributes, skill identity, and the person record.
//!
//! This crate holds the plain data the rules engine operates on. It knows
//! nothing about difficulties, costs or dice; see `hq-mechanics` for that.

/// Attribute names and the clamped seven-score attribute set.
pub mod attribute;
/// Error types used throughout the crate.
pub mod error;
/// The person record the engine reads and writes.
pub mod person;
/// Skill identity and trained skill instances.
pub mod skill;

/// Re-export attribute types.
pub use attribute::{
    Attribute, AttributeSet, DEFAULT_ATTRIBUTE_SCORE, MAXIMUM_ATTRIBUTE_SCORE,
    MINIMUM_ATTRIBUTE_SCORE,
};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export person types.
pub use person::{Person, PersonId};
/// Re-export skill types.
pub use skill::{MAXIMUM_SKILL_LEVEL, SkillId, SkillInstance};
