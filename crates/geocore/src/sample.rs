//! Seeded random rings and paths for tests and benchmarks.
//!
//! Model
//! - Rings: `n` sorted angles on [0, 2π) with bounded angular jitter, radii
//!   `radius·(1 + u)` with `u ∈ [−jitter, jitter]`, then closed by repeating
//!   the first vertex. The result is star-shaped around `center`.
//! - Paths: uniform points in an axis-aligned box.
//!
//! Determinism comes from the caller's RNG; use `StdRng::seed_from_u64`.

use std::f64::consts::TAU;

use rand::Rng;

use crate::geom2::Point;

/// Axis-aligned sampling box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min: Point,
    pub max: Point,
}

impl Bounds2 {
    #[inline]
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> Point {
        Point::new(
            sample_span(rng, self.min.x, self.max.x),
            sample_span(rng, self.min.y, self.max.y),
        )
    }
}

fn sample_span<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

/// Closed star-shaped ring with `max(n, 3)` distinct vertices.
///
/// `jitter` is clamped to [0, 0.9] so radii stay positive and `center` stays
/// strictly inside.
pub fn random_ring<R: Rng>(rng: &mut R, n: usize, center: Point, radius: f64, jitter: f64) -> Vec<Point> {
    let n = n.max(3);
    let jitter = jitter.clamp(0.0, 0.9);
    let step = TAU / n as f64;
    let mut ring = Vec::with_capacity(n + 1);
    for i in 0..n {
        // at most a quarter step: order is kept and no gap reaches π
        let theta = step * (i as f64 + 0.25 * jitter * rng.gen_range(-1.0_f64..=1.0));
        let r = radius * (1.0 + jitter * rng.gen_range(-1.0_f64..=1.0));
        ring.push(center + Point::new(theta.cos(), theta.sin()) * r);
    }
    ring.push(ring[0]);
    ring
}

/// `n` uniform random points inside `bounds`.
pub fn random_path<R: Rng>(rng: &mut R, n: usize, bounds: Bounds2) -> Vec<Point> {
    (0..n).map(|_| bounds.sample(rng)).collect()
}
