//! Error types for the mechanics engine.
//!
//! Every variant is a content error: bad static data or a name that does
//! not exist. They are raised when the catalog or aging table is built, or
//! when a caller crosses the name boundary, never in the middle of a check.

use hq_core::SkillId;

/// Errors that can occur while loading or looking up rules content.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A skill name does not exist in the catalog.
    #[error("unknown skill: {0}")]
    UnknownSkill(String),

    /// A catalog entry breaks one of its own invariants.
    #[error("malformed catalog entry for {skill}: {reason}")]
    MalformedCatalogEntry {
        /// The offending skill.
        skill: SkillId,
        /// What is wrong with it.
        reason: String,
    },

    /// The catalog has no definition for a skill.
    #[error("catalog has no definition for {0}")]
    MissingCatalogEntry(SkillId),

    /// The catalog defines the same skill twice.
    #[error("catalog defines {0} more than once")]
    DuplicateCatalogEntry(SkillId),

    /// The aging brackets do not tile the age axis.
    #[error("malformed aging table: {0}")]
    MalformedAgingTable(String),

    /// Content could not be parsed.
    #[error("invalid content: {0}")]
    InvalidContent(#[from] serde_json::Error),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
