//! Check requests and their graded outcomes.
//!
//! A check compares a 2d6 roll against a target number. The signed margin
//! (`roll - target`) is classified into a [`MarginOfSuccess`] band.

pub mod margin;

pub use margin::MarginOfSuccess;

use chrono::NaiveDate;
use hq_core::SkillId;
use serde::{Deserialize, Serialize};

use crate::modifier::{ModifierBreakdown, SituationalModifier};

/// Result text for a check made by nobody.
pub const NO_SUCH_PERSON: &str = "No such person to make the check.";

/// What a caller asks the engine to check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRequest {
    /// The skill being checked.
    pub skill: SkillId,
    /// Situational modifiers; positive is easier.
    #[serde(default)]
    pub modifiers: Vec<SituationalModifier>,
    /// Spend Edge on a re-roll if the first roll fails.
    #[serde(default)]
    pub allow_edge: bool,
    /// Leave aging modifiers out of the target number.
    #[serde(default)]
    pub ignore_age: bool,
    /// Campaign date used to compute age. Without one, age is ignored.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

impl CheckRequest {
    /// A plain check with no modifiers, no Edge and no aging.
    pub fn new(skill: SkillId) -> Self {
        Self {
            skill,
            modifiers: Vec::new(),
            allow_edge: false,
            ignore_age: false,
            as_of: None,
        }
    }

    /// Add a situational modifier.
    pub fn with_modifier(mut self, modifier: SituationalModifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Allow or forbid an Edge re-roll.
    pub fn with_edge(mut self, allow: bool) -> Self {
        self.allow_edge = allow;
        self
    }

    /// Ignore aging for this check.
    pub fn ignoring_age(mut self) -> Self {
        self.ignore_age = true;
        self
    }

    /// Resolve the check as of a campaign date.
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.as_of = Some(date);
        self
    }
}

/// The full result of a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// The number the roll had to meet.
    pub target_number: i32,
    /// The roll that counted (the re-roll if Edge was used).
    pub roll: i32,
    /// `roll - target_number`, saturating.
    pub margin: i32,
    /// The band the margin falls in.
    pub margin_of_success: MarginOfSuccess,
    /// Human-readable summary.
    pub result_text: String,
    /// Whether an Edge re-roll was taken. The caller deducts the point.
    pub edge_used: bool,
    /// How the target number was reached. `None` when there was no person.
    pub modifiers: Option<ModifierBreakdown>,
}

impl CheckOutcome {
    /// The degenerate outcome of a check with no person behind it.
    pub fn missing_person() -> Self {
        Self {
            target_number: i32::MAX,
            roll: i32::MIN,
            margin: i32::MIN,
            margin_of_success: MarginOfSuccess::Disastrous,
            result_text: NO_SUCH_PERSON.to_string(),
            edge_used: false,
            modifiers: None,
        }
    }

    /// Degree of success, from 4 down to -4.
    pub fn degree(&self) -> i32 {
        self.margin_of_success.value()
    }

    /// Returns true if the roll met the target.
    pub fn is_success(&self) -> bool {
        self.margin >= 0
    }
}

impl std::fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.result_text)
    }
}
