//! Uniform shuffling of tiles into staging slots

use rand::seq::SliceRandom;
use rand::{SeedableRng, rngs::StdRng};

/// Seeded shuffler for reproducible staging layouts
pub struct TileShuffler {
    rng: StdRng,
}

impl TileShuffler {
    /// Create a deterministic shuffler
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a shuffler seeded from the operating system
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Produce a staging order for `count` tiles
    ///
    /// Entry `slot` of the result is the index of the tile assigned to that
    /// staging slot. Uses Fisher-Yates, so every permutation is equally likely.
    pub fn staging_order(&mut self, count: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..count).collect();
        order.shuffle(&mut self.rng);
        order
    }
}

/// Check that `order` is a permutation of `0..count`
///
/// Returns a description of the first problem found.
pub fn validate_order(order: &[usize], count: usize) -> Option<String> {
    if order.len() != count {
        return Some(format!("expected {count} entries, got {}", order.len()));
    }

    let mut seen = vec![false; count];
    for &index in order {
        let Some(slot) = seen.get_mut(index) else {
            return Some(format!("tile index {index} is out of range"));
        };
        if *slot {
            return Some(format!("tile index {index} appears more than once"));
        }
        *slot = true;
    }

    None
}
