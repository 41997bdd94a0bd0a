//! Cosmetic entrance jitter for review cards.

use rand::Rng;

/// Every delay a card may be given.
pub const ANIMATION_DELAYS: [&str; 6] = ["0s", "0.1s", "0.2s", "0.3s", "0.4s", "0.5s"];

/// Draw one delay from [`ANIMATION_DELAYS`]. Pass a seeded RNG for reproducible output.
pub fn pick_delay<R: Rng>(rng: &mut R) -> &'static str {
    ANIMATION_DELAYS[rng.gen_range(0..ANIMATION_DELAYS.len())]
}
