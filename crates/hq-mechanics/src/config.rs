//! Campaign options that change how the engine resolves checks.

use serde::{Deserialize, Serialize};

/// Configuration for a [`SkillEngine`](crate::engine::SkillEngine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// RNG seed for the engine's own dice roller.
    pub seed: u64,
    /// Apply aging modifiers to checks and aging drift to rosters.
    pub use_aging_effects: bool,
    /// Allow characters to spend Edge on re-rolls.
    pub use_edge: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            use_aging_effects: true,
            use_edge: true,
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Turn aging effects on or off.
    pub fn with_aging_effects(mut self, enabled: bool) -> Self {
        self.use_aging_effects = enabled;
        self
    }

    /// Turn Edge re-rolls on or off.
    pub fn with_edge(mut self, enabled: bool) -> Self {
        self.use_edge = enabled;
        self
    }
}
