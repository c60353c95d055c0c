//! Configuration for the selection modes.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Display names of the two selection modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeNames {
    /// Name of the single random pick mode.
    pub random: String,
    /// Name of the team roulette mode.
    pub roulette: String,
}

impl Default for ModeNames {
    fn default() -> Self {
        Self {
            random: "Random Character".to_string(),
            roulette: "Abyss Roulette".to_string(),
        }
    }
}

/// Configuration shared by the menu and the sessions it starts.
#[derive(Debug, Clone, Default)]
pub struct RouletteConfig {
    /// RNG seed for reproducible draws. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Mode display names handed to frontends.
    pub modes: ModeNames,
}

impl RouletteConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the mode display names.
    pub fn with_modes(mut self, modes: ModeNames) -> Self {
        self.modes = modes;
        self
    }

    /// Build the random source described by this configuration.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
