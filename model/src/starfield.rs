//! Decorative animated star field behind the landing page.
//!
//! Positions come from a seeded ChaCha8 stream. Its output is defined by
//! the algorithm rather than the target's word size, so the x86_64 server
//! render and the wasm32 hydrate build produce identical attributes.

#[cfg(test)]
#[path = "starfield_test.rs"]
mod starfield_test;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const STAR_COUNT: usize = 50;
pub const STARFIELD_SEED: u64 = 0x4d41_474e_4147_414c;

/// One twinkling dot. Positions are percentages of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub left_pct: f64,
    pub top_pct: f64,
    pub size_px: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl Star {
    /// Inline CSS for the dot's absolutely positioned span.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "left:{:.2}%;top:{:.2}%;width:{:.1}px;height:{:.1}px;animation-delay:{:.2}s;animation-duration:{:.2}s",
            self.left_pct, self.top_pct, self.size_px, self.size_px, self.delay_s, self.duration_s
        )
    }
}

/// Generate `count` stars from `rng`.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            left_pct: rng.random_range(0.0..100.0),
            top_pct: rng.random_range(0.0..100.0),
            size_px: rng.random_range(1.0..3.0),
            delay_s: rng.random_range(0.0..5.0),
            duration_s: rng.random_range(2.0..5.0),
        })
        .collect()
}

/// The landing page's fixed star field.
#[must_use]
pub fn landing_stars() -> Vec<Star> {
    let mut rng = ChaCha8Rng::seed_from_u64(STARFIELD_SEED);
    generate(&mut rng, STAR_COUNT)
}
