//! Homogeneous dice pools.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};

use super::roll::Roll;

/// A number of identical dice rolled together, like `2d6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DicePool {
    count: u32,
    #[serde(deserialize_with = "deserialize_sides")]
    sides: u32,
}

impl Default for DicePool {
    fn default() -> Self {
        Self::two_d6()
    }
}

impl DicePool {
    /// A pool of `count` dice with `sides` faces each. Dice have at least
    /// one face.
    pub fn new(count: u32, sides: u32) -> Self {
        Self {
            count,
            sides: sides.max(1),
        }
    }

    /// The standard check pool.
    pub fn two_d6() -> Self {
        Self::new(2, 6)
    }

    /// Number of dice.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Faces per die.
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Lowest possible total.
    pub fn minimum(&self) -> i32 {
        i32::try_from(self.count).unwrap_or(i32::MAX)
    }

    /// Highest possible total.
    pub fn maximum(&self) -> i32 {
        i32::try_from(u64::from(self.count) * u64::from(self.sides)).unwrap_or(i32::MAX)
    }

    /// Roll every die.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> Roll {
        Roll::new(
            (0..self.count)
                .map(|_| rng.random_range(1..=self.sides))
                .collect(),
        )
    }
}

impl fmt::Display for DicePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

fn deserialize_sides<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    u32::deserialize(deserializer).map(|sides| sides.max(1))
}
