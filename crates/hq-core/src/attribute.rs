use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;

/// Lowest score any attribute can hold.
pub const MINIMUM_ATTRIBUTE_SCORE: i32 = 0;

/// Highest score any attribute can hold.
pub const MAXIMUM_ATTRIBUTE_SCORE: i32 = 15;

/// Score given to every attribute of a freshly created person.
pub const DEFAULT_ATTRIBUTE_SCORE: i32 = 5;

/// One of the seven primitive capability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// Raw physical power.
    Strength,
    /// Toughness and endurance.
    Body,
    /// Fine motor control.
    Dexterity,
    /// Speed of reaction.
    Reflexes,
    /// Reasoning and memory.
    Intelligence,
    /// Mental fortitude.
    Willpower,
    /// Force of personality.
    Charisma,
}

impl Attribute {
    /// Every attribute, in storage order.
    pub const ALL: [Attribute; 7] = [
        Self::Strength,
        Self::Body,
        Self::Dexterity,
        Self::Reflexes,
        Self::Intelligence,
        Self::Willpower,
        Self::Charisma,
    ];

    /// Position of this attribute in [`Attribute::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Three-letter abbreviation used in tables and result text.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Body => "BOD",
            Self::Dexterity => "DEX",
            Self::Reflexes => "RFL",
            Self::Intelligence => "INT",
            Self::Willpower => "WIL",
            Self::Charisma => "CHA",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Strength => "Strength",
            Self::Body => "Body",
            Self::Dexterity => "Dexterity",
            Self::Reflexes => "Reflexes",
            Self::Intelligence => "Intelligence",
            Self::Willpower => "Willpower",
            Self::Charisma => "Charisma",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Attribute {
    type Err = CoreError;

    /// Accepts the full name or the abbreviation, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| {
                a.to_string().eq_ignore_ascii_case(wanted)
                    || a.abbreviation().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| CoreError::UnknownAttribute(s.to_string()))
    }
}

/// A person's seven attribute scores.
///
/// Every write clamps into
/// `[MINIMUM_ATTRIBUTE_SCORE, MAXIMUM_ATTRIBUTE_SCORE]`; out-of-range values
/// saturate instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSet {
    #[serde(deserialize_with = "deserialize_scores")]
    scores: [i32; 7],
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self {
            scores: [DEFAULT_ATTRIBUTE_SCORE; 7],
        }
    }
}

impl AttributeSet {
    /// Create a set with every score at [`DEFAULT_ATTRIBUTE_SCORE`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set from scores in [`Attribute::ALL`] order, clamping each.
    pub fn from_scores(scores: [i32; 7]) -> Self {
        Self {
            scores: scores.map(clamp_score),
        }
    }

    /// Builder-style variant of [`AttributeSet::set`].
    pub fn with(mut self, attribute: Attribute, value: i32) -> Self {
        self.set(attribute, value);
        self
    }

    /// Current score of an attribute.
    pub fn get(&self, attribute: Attribute) -> i32 {
        self.scores[attribute.index()]
    }

    /// Overwrite a score, clamping to bounds. Returns the stored value.
    pub fn set(&mut self, attribute: Attribute, value: i32) -> i32 {
        let clamped = clamp_score(value);
        self.scores[attribute.index()] = clamped;
        clamped
    }

    /// Adjust one score by a delta, clamping to bounds. Returns the new value.
    pub fn change(&mut self, attribute: Attribute, delta: i32) -> i32 {
        let current = self.get(attribute);
        self.set(attribute, current.saturating_add(delta))
    }

    /// Apply the same delta to all seven scores, each clamped independently.
    pub fn change_all(&mut self, delta: i32) {
        for attribute in Attribute::ALL {
            self.change(attribute, delta);
        }
    }

    /// Iterate over `(attribute, score)` pairs in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        Attribute::ALL.into_iter().map(|a| (a, self.get(a)))
    }
}

impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(a, v)| format!("{} {v}", a.abbreviation()))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

fn clamp_score(value: i32) -> i32 {
    value.clamp(MINIMUM_ATTRIBUTE_SCORE, MAXIMUM_ATTRIBUTE_SCORE)
}

fn deserialize_scores<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[i32; 7], D::Error> {
    <[i32; 7]>::deserialize(deserializer).map(|scores| scores.map(clamp_score))
}
