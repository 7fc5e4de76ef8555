//! Age brackets and the attribute drift they cause.
//!
//! The table partitions the age axis into milestones. Each bracket carries
//! its own one-time delta per attribute and for reputation; the table
//! precomputes the running sum through every bracket so a check only needs
//! one lookup to know the total aging effect at a given age.

use std::fmt;

use hq_core::Attribute;
use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};
use crate::validate::aging_issues;

/// Named aging milestones, in age order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgingMilestone {
    /// Under 25: no aging effects.
    None,
    /// 25 to 30.
    TwentyFive,
    /// 31 to 40.
    ThirtyOne,
    /// 41 to 50.
    FortyOne,
    /// 51 to 60.
    FiftyOne,
    /// 61 to 70.
    SixtyOne,
    /// 71 to 80.
    SeventyOne,
    /// 81 to 90.
    EightyOne,
    /// 91 to 100.
    NinetyOne,
    /// 101 and older.
    OneHundredOne,
}

impl AgingMilestone {
    /// Every milestone, in age order.
    pub const ALL: [AgingMilestone; 10] = [
        Self::None,
        Self::TwentyFive,
        Self::ThirtyOne,
        Self::FortyOne,
        Self::FiftyOne,
        Self::SixtyOne,
        Self::SeventyOne,
        Self::EightyOne,
        Self::NinetyOne,
        Self::OneHundredOne,
    ];

    /// Position of this milestone in [`AgingMilestone::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for AgingMilestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::None => "Under 25",
            Self::TwentyFive => "25-30",
            Self::ThirtyOne => "31-40",
            Self::FortyOne => "41-50",
            Self::FiftyOne => "51-60",
            Self::SixtyOne => "61-70",
            Self::SeventyOne => "71-80",
            Self::EightyOne => "81-90",
            Self::NinetyOne => "91-100",
            Self::OneHundredOne => "101+",
        };
        write!(f, "{label}")
    }
}

/// One age bracket with its own (non-cumulative) deltas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgingBracket {
    /// Which milestone this bracket represents.
    pub milestone: AgingMilestone,
    /// First age in the bracket (inclusive).
    pub min_age: i32,
    /// First age past the bracket (exclusive).
    pub max_age: i32,
    /// Delta per attribute, in [`Attribute::ALL`] order.
    pub attributes: [i32; 7],
    /// Reputation delta.
    pub reputation: i32,
    /// Characters in this bracket pay more to learn.
    pub slow_learner: bool,
    /// Characters in this bracket are knocked out more easily.
    pub glass_jaw: bool,
}

impl AgingBracket {
    /// This bracket's own delta for an attribute.
    pub fn delta(&self, attribute: Attribute) -> i32 {
        self.attributes[attribute.index()]
    }

    /// Returns true if the age falls inside `[min_age, max_age)`.
    pub fn contains(&self, age: i32) -> bool {
        (self.min_age..self.max_age).contains(&age)
    }
}

/// Running totals of every bracket's deltas up to and including one bracket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgingModifiers {
    attributes: [i32; 7],
    reputation: i32,
}

impl AgingModifiers {
    /// Cumulative delta for an attribute.
    pub fn attribute(&self, attribute: Attribute) -> i32 {
        self.attributes[attribute.index()]
    }

    /// Cumulative reputation delta.
    pub fn reputation(&self) -> i32 {
        self.reputation
    }

    fn accumulate(&self, bracket: &AgingBracket) -> Self {
        let mut next = *self;
        for (total, delta) in next.attributes.iter_mut().zip(bracket.attributes) {
            *total = total.saturating_add(delta);
        }
        next.reputation = next.reputation.saturating_add(bracket.reputation);
        next
    }
}

/// The immutable, validated aging table.
#[derive(Debug, Clone)]
pub struct AgingTable {
    brackets: Vec<AgingBracket>,
    cumulative: Vec<AgingModifiers>,
}

impl AgingTable {
    /// Build a table from brackets, validating that they tile the age axis.
    ///
    /// Brackets must list every [`AgingMilestone`] exactly once, in order,
    /// starting at age 0 and ending at `i32::MAX`, each ending where the
    /// next begins.
    pub fn new(brackets: Vec<AgingBracket>) -> MechResult<Self> {
        let issues = aging_issues(&brackets);
        if let Some(first) = issues.first() {
            for issue in &issues {
                tracing::error!(%issue, "rejected aging table");
            }
            return Err(MechError::MalformedAgingTable(first.clone()));
        }

        let mut cumulative = Vec::with_capacity(brackets.len());
        let mut running = AgingModifiers::default();
        for bracket in &brackets {
            running = running.accumulate(bracket);
            cumulative.push(running);
        }

        Ok(Self {
            brackets,
            cumulative,
        })
    }

    /// The standard ten-milestone table.
    pub fn standard() -> MechResult<Self> {
        Self::new(standard_brackets())
    }

    /// All brackets in age order.
    pub fn brackets(&self) -> &[AgingBracket] {
        &self.brackets
    }

    /// The bracket a given age falls in.
    ///
    /// Ages below the first bracket resolve to the first bracket and ages
    /// past the last resolve to the last, so every age has an answer.
    pub fn bracket_for(&self, age: i32) -> &AgingBracket {
        let first = &self.brackets[0];
        if age < first.min_age {
            return first;
        }
        self.brackets
            .iter()
            .find(|b| b.contains(age))
            .or_else(|| self.brackets.last())
            .unwrap_or(first)
    }

    /// The bracket for a milestone.
    pub fn bracket(&self, milestone: AgingMilestone) -> &AgingBracket {
        &self.brackets[milestone.index()]
    }

    /// Running totals through a milestone.
    pub fn cumulative(&self, milestone: AgingMilestone) -> &AgingModifiers {
        &self.cumulative[milestone.index()]
    }

    /// Running totals for the bracket a given age falls in.
    pub fn cumulative_for_age(&self, age: i32) -> &AgingModifiers {
        self.cumulative(self.bracket_for(age).milestone)
    }

    /// Sum of every bracket's delta for an attribute, from the first bracket
    /// through `milestone` inclusive.
    pub fn cumulative_modifier(&self, milestone: AgingMilestone, attribute: Attribute) -> i32 {
        self.cumulative(milestone).attribute(attribute)
    }

    /// Sum of every bracket's reputation delta through `milestone` inclusive.
    pub fn cumulative_reputation(&self, milestone: AgingMilestone) -> i32 {
        self.cumulative(milestone).reputation()
    }

    /// Brackets entered when a person ages from `from_age` to `to_age`:
    /// every bracket whose first age lies in `(from_age, to_age]`.
    pub fn milestones_between(
        &self,
        from_age: i32,
        to_age: i32,
    ) -> impl Iterator<Item = &AgingBracket> + '_ {
        self.brackets
            .iter()
            .filter(move |b| b.min_age > from_age && b.min_age <= to_age)
    }
}

macro_rules! bracket {
    ($milestone:ident, $min:expr, $max:expr, [$($delta:expr),+], $rep:expr, $slow:expr, $jaw:expr) => {
        AgingBracket {
            milestone: AgingMilestone::$milestone,
            min_age: $min,
            max_age: $max,
            attributes: [$($delta),+],
            reputation: $rep,
            slow_learner: $slow,
            glass_jaw: $jaw,
        }
    };
}

/// The standard brackets. Deltas are in attribute points, ordered
/// STR, BOD, DEX, RFL, INT, WIL, CHA.
pub fn standard_brackets() -> Vec<AgingBracket> {
    vec![
        bracket!(None, 0, 25, [0, 0, 0, 0, 0, 0, 0], 0, false, false),
        bracket!(TwentyFive, 25, 31, [0, 0, 0, 0, 1, 1, 0], 0, false, false),
        bracket!(ThirtyOne, 31, 41, [0, 0, 0, 0, 0, 0, 1], 1, false, false),
        bracket!(FortyOne, 41, 51, [0, 0, -1, 0, 0, 0, 0], 0, false, false),
        bracket!(FiftyOne, 51, 61, [0, -1, 0, -1, 0, 0, 0], 1, false, false),
        bracket!(SixtyOne, 61, 71, [-1, -1, 0, 0, 0, 0, 0], 0, true, false),
        bracket!(SeventyOne, 71, 81, [-1, 0, -1, -1, 0, -1, 0], -1, true, true),
        bracket!(EightyOne, 81, 91, [0, -1, -1, 0, -1, 0, -1], -1, true, true),
        bracket!(NinetyOne, 91, 101, [-1, -1, -1, -1, -1, -1, 0], -1, true, true),
        bracket!(OneHundredOne, 101, i32::MAX, [-1, -1, -1, -1, -1, -1, -1], -1, true, true),
    ]
}
