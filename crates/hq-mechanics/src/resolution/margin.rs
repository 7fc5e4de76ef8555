//! Margin-of-success bands.
//!
//! The signed margin between roll and target falls in exactly one of nine
//! bands. A band's value is the authoritative degree of success that
//! downstream effects key off.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Graded outcome of a check, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarginOfSuccess {
    /// Margin 7 or more.
    Spectacular,
    /// Margin 5 or 6.
    Extraordinary,
    /// Margin 3 or 4.
    Good,
    /// Margin 1 or 2.
    ItWillDo,
    /// Margin exactly 0.
    BarelyMadeIt,
    /// Margin -1 or -2.
    Almost,
    /// Margin -3 or -4.
    Bad,
    /// Margin -5 or -6.
    Terrible,
    /// Margin -7 or less.
    Disastrous,
}

impl MarginOfSuccess {
    /// Every band in declaration order, from best to worst.
    pub const ALL: [MarginOfSuccess; 9] = [
        Self::Spectacular,
        Self::Extraordinary,
        Self::Good,
        Self::ItWillDo,
        Self::BarelyMadeIt,
        Self::Almost,
        Self::Bad,
        Self::Terrible,
        Self::Disastrous,
    ];

    /// Lowest margin in the band.
    pub fn lower(self) -> i32 {
        match self {
            Self::Spectacular => 7,
            Self::Extraordinary => 5,
            Self::Good => 3,
            Self::ItWillDo => 1,
            Self::BarelyMadeIt => 0,
            Self::Almost => -2,
            Self::Bad => -4,
            Self::Terrible => -6,
            Self::Disastrous => i32::MIN,
        }
    }

    /// Highest margin in the band.
    pub fn upper(self) -> i32 {
        match self {
            Self::Spectacular => i32::MAX,
            Self::Extraordinary => 6,
            Self::Good => 4,
            Self::ItWillDo => 2,
            Self::BarelyMadeIt => 0,
            Self::Almost => -1,
            Self::Bad => -3,
            Self::Terrible => -5,
            Self::Disastrous => -7,
        }
    }

    /// Degree of success, from 4 down to -4.
    pub fn value(self) -> i32 {
        match self {
            Self::Spectacular => 4,
            Self::Extraordinary => 3,
            Self::Good => 2,
            Self::ItWillDo => 1,
            Self::BarelyMadeIt => 0,
            Self::Almost => -1,
            Self::Bad => -2,
            Self::Terrible => -3,
            Self::Disastrous => -4,
        }
    }

    /// Short label used in result text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Spectacular => "Spectacular",
            Self::Extraordinary => "Extraordinary",
            Self::Good => "Good",
            Self::ItWillDo => "It will do",
            Self::BarelyMadeIt => "Barely made it",
            Self::Almost => "Almost",
            Self::Bad => "Bad",
            Self::Terrible => "Terrible",
            Self::Disastrous => "Disastrous",
        }
    }

    /// Returns true if the margin lies in this band.
    pub fn contains(self, margin: i32) -> bool {
        (self.lower()..=self.upper()).contains(&margin)
    }

    /// Classify a margin by scanning every band in declaration order.
    pub fn classify(margin: i32) -> Self {
        Self::ALL
            .into_iter()
            .find(|band| band.contains(margin))
            .unwrap_or_else(|| {
                tracing::warn!(margin, "margin fell outside every band");
                Self::Disastrous
            })
    }

    /// Returns true for bands with a non-negative value.
    pub fn is_success(self) -> bool {
        self.value() >= 0
    }
}

impl fmt::Display for MarginOfSuccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
