//! Random star-shaped polygons and query points (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic inputs for benches and batch tests of the containment
//!   predicate. Same `(cfg, token)` always yields the same polygon.
//!
//! Model
//! - Start from `n` equally spaced angles, add bounded angular and radial
//!   jitter, and emit vertices by decreasing angle (clockwise, y up), the
//!   order the normal rule in `Segment::normal` treats as outward.
//! - No convex hull: with radial jitter the polygon is star-shaped around the
//!   origin but generally not convex.

use nalgebra::{Rotation2, Vector2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom2::Vector2D;

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    /// Number of vertices; values below 3 are raised to 3.
    pub vertex_count: usize,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii are `base_radius * (1 + u)` with `u ∈ [-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: 12,
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }

    /// Token for the next draw in the same stream.
    #[inline]
    pub fn advance(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// Draw a clockwise star-shaped polygon around the origin.
pub fn draw_polygon_radial(cfg: RadialCfg, tok: ReplayToken) -> Vec<Vector2D> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.max(3);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let base = phase + (k as f64) * delta;
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            base + jitter
        })
        .collect();
    // Decreasing angle = clockwise traversal.
    angles.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u).max(1e-6) * r0;
            Vector2D::from(Rotation2::new(th) * Vector2::new(r, 0.0))
        })
        .collect()
}

/// Draw `count` points uniformly from the square `[-half_extent, half_extent]²`.
pub fn draw_points_in_box(tok: ReplayToken, count: usize, half_extent: f64) -> Vec<Vector2D> {
    let mut rng = tok.to_std_rng();
    let h = half_extent.abs().max(1e-9);
    (0..count)
        .map(|_| Vector2D::new(rng.gen_range(-h..h), rng.gen_range(-h..h)))
        .collect()
}

/// Twice the signed area (shoelace); negative for clockwise order.
pub fn signed_area2(vertices: &[Vector2D]) -> f64 {
    let n = vertices.len();
    (0..n)
        .map(|i| {
            let p = vertices[i];
            let q = vertices[(i + 1) % n];
            p.x * q.y - q.x * p.y
        })
        .sum()
}
