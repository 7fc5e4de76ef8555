//! Dice, pools, and the roll sources checks draw from.
//!
//! Checks roll 2d6. A [`RollSource`] hides where the number comes from so
//! callers can inject fixed or scripted rolls for previews and tests.

pub mod pool;
pub mod roll;

pub use pool::DicePool;
pub use roll::Roll;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Lowest result of a standard 2d6 check roll.
pub const MINIMUM_CHECK_ROLL: i32 = 2;

/// Highest result of a standard 2d6 check roll.
pub const MAXIMUM_CHECK_ROLL: i32 = 12;

/// Anything that can produce a check roll.
pub trait RollSource {
    /// Produce the next roll.
    fn roll(&mut self) -> i32;
}

/// Rolls a dice pool from a seeded RNG. Defaults to 2d6.
#[derive(Debug, Clone)]
pub struct DiceRoller {
    pool: DicePool,
    rng: StdRng,
}

impl DiceRoller {
    /// Create a 2d6 roller from a seed.
    pub fn new(seed: u64) -> Self {
        Self::with_pool(DicePool::two_d6(), seed)
    }

    /// Create a roller for an arbitrary pool.
    pub fn with_pool(pool: DicePool, seed: u64) -> Self {
        Self {
            pool,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Roll the pool and keep the individual dice.
    pub fn roll_detailed(&mut self) -> Roll {
        self.pool.roll(&mut self.rng)
    }
}

impl RollSource for DiceRoller {
    fn roll(&mut self) -> i32 {
        self.roll_detailed().total()
    }
}

/// Always returns the same roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRoll(pub i32);

impl RollSource for FixedRoll {
    fn roll(&mut self) -> i32 {
        self.0
    }
}

/// Returns a scripted sequence of rolls, starting over when exhausted.
///
/// An empty script always returns [`MINIMUM_CHECK_ROLL`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    rolls: Vec<i32>,
    next: usize,
}

impl ScriptedRolls {
    /// Create a source that plays back the given rolls in order.
    pub fn new(rolls: impl Into<Vec<i32>>) -> Self {
        Self {
            rolls: rolls.into(),
            next: 0,
        }
    }

    /// How many rolls have been drawn so far.
    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl RollSource for ScriptedRolls {
    fn roll(&mut self) -> i32 {
        if self.rolls.is_empty() {
            return MINIMUM_CHECK_ROLL;
        }
        let value = self.rolls[self.next % self.rolls.len()];
        self.next += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dice_roller_stays_in_2d6_range() {
        let mut roller = DiceRoller::new(42);
        for _ in 0..500 {
            let value = roller.roll();
            assert!((MINIMUM_CHECK_ROLL..=MAXIMUM_CHECK_ROLL).contains(&value));
        }
    }

    #[test]
    fn dice_roller_deterministic_with_seed() {
        let mut a = DiceRoller::new(99);
        let mut b = DiceRoller::new(99);
        for _ in 0..20 {
            assert_eq!(a.roll(), b.roll());
        }
    }

    #[test]
    fn dice_roller_detailed_keeps_dice() {
        let mut roller = DiceRoller::new(1);
        let result = roller.roll_detailed();
        assert_eq!(result.faces().len(), 2);
    }

    #[test]
    fn roller_with_custom_pool() {
        let pool = DicePool::new(1, 20);
        let mut roller = DiceRoller::with_pool(pool, 3);
        for _ in 0..100 {
            let value = roller.roll();
            assert!((pool.minimum()..=pool.maximum()).contains(&value));
        }
    }

    #[test]
    fn fixed_roll_repeats() {
        let mut source = FixedRoll(11);
        assert_eq!(source.roll(), 11);
        assert_eq!(source.roll(), 11);
    }

    #[test]
    fn scripted_rolls_cycle() {
        let mut source = ScriptedRolls::new([3, 9]);
        assert_eq!(source.roll(), 3);
        assert_eq!(source.roll(), 9);
        assert_eq!(source.roll(), 3);
        assert_eq!(source.drawn(), 3);
    }

    #[test]
    fn empty_script_returns_minimum() {
        let mut source = ScriptedRolls::default();
        assert_eq!(source.roll(), MINIMUM_CHECK_ROLL);
    }
}
