//! Uniformly random decision policies
//!
//! Baseline bot behavior and a source of variety in mixed seats. Draws only
//! when no legal candidate exists.

use crate::core::{Card, Color};
use crate::game::strategy::{CardStrategy, ColorStrategy, StrategyView};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks a legal card uniformly at random.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        RandomStrategy {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded variant for deterministic testing.
    pub fn with_seed(seed: u64) -> Self {
        RandomStrategy {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl CardStrategy for RandomStrategy {
    fn choose_card(&mut self, view: &StrategyView) -> Option<Card> {
        if view.candidates.is_empty() {
            return None;
        }
        let index = self.rng.gen_range(0..view.candidates.len());
        Some(view.candidates[index].clone())
    }
}

/// Picks a chromatic color uniformly at random.
pub struct RandomColorStrategy {
    rng: StdRng,
}

impl RandomColorStrategy {
    pub fn new() -> Self {
        RandomColorStrategy {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomColorStrategy {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomColorStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorStrategy for RandomColorStrategy {
    fn choose_color(&mut self, _view: &StrategyView) -> Color {
        let index = self.rng.gen_range(0..Color::CHROMATIC.len());
        Color::CHROMATIC[index]
    }
}
