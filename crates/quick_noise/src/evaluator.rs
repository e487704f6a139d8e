//! # Perlin Noise Evaluator
//!
//! Ken Perlin's revised (2002) gradient noise in 3D, with optional per-axis
//! wrapping for tileable output.
//!
//! ## Determinism Guarantee
//!
//! An [`Evaluator`] is a pure function of its tables. The same tables and the
//! same arguments always give bit-identical results, and the [`DEFAULT`]
//! evaluator is built at compile time from a fixed permutation.
//!
//! ## Threading
//!
//! Evaluators hold no interior mutability. Share them by reference across as
//! many threads as needed.

use crate::default_table::DEFAULT_PERMUTATION;
use crate::seed::{build_permutation, Seed};
use crate::tables::{NoiseTables, PERMUTATION_SIZE};

/// Per-axis wrap periods.
///
/// Each period should be a power of two in `0..=256`; 0 and 256 both mean
/// the table's own period of 256. Other values are accepted and give
/// irregular tiling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Wrap {
    /// Period along x.
    pub x: i32,
    /// Period along y.
    pub y: i32,
    /// Period along z.
    pub z: i32,
}

impl Wrap {
    /// No wrapping beyond the inherent 256 period.
    pub const NONE: Self = Self { x: 0, y: 0, z: 0 };

    /// Creates wrap periods for each axis.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Same period on every axis.
    #[inline]
    #[must_use]
    pub const fn uniform(period: i32) -> Self {
        Self::new(period, period, period)
    }

    /// Lattice mask for a period: `(period - 1) & 255`.
    #[inline]
    #[must_use]
    pub const fn mask(period: i32) -> i64 {
        (period.wrapping_sub(1) & 0xFF) as i64
    }
}

/// Seeded 3D gradient noise.
///
/// # Example
///
/// ```rust
/// use quick_noise::{Evaluator, Seed};
///
/// let noise = Evaluator::new(Seed::from_u64(42));
/// let value = noise.noise(1.5, 2.25, 0.75);
/// assert!(value.is_finite());
///
/// // Tiles every 4 units along x.
/// let a = noise.noise_wrapped(0.25, 0.5, 0.75, 4, 0, 0);
/// let b = noise.noise_wrapped(4.25, 0.5, 0.75, 4, 0, 0);
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluator {
    tables: NoiseTables,
}

impl Evaluator {
    /// Builds an evaluator from a seed.
    ///
    /// Never fails; malformed seeds fall back to an entropy shuffle.
    #[must_use]
    pub fn new(seed: Seed<'_>) -> Self {
        let permutation = build_permutation(seed);
        tracing::debug!(head = ?&permutation[..4], "built noise tables");
        Self::from_permutation(&permutation)
    }

    /// Builds an evaluator from an explicit permutation.
    #[must_use]
    pub const fn from_permutation(permutation: &[u8; PERMUTATION_SIZE]) -> Self {
        Self {
            tables: NoiseTables::expand(permutation),
        }
    }

    /// The tables this evaluator samples.
    #[inline]
    #[must_use]
    pub const fn tables(&self) -> &NoiseTables {
        &self.tables
    }

    /// Samples noise with no wrapping.
    ///
    /// Returns exactly 0 at integer lattice points.
    #[inline]
    #[must_use]
    pub fn noise(&self, x: f64, y: f64, z: f64) -> f64 {
        self.noise_wrapped(x, y, z, 0, 0, 0)
    }

    /// Samples noise with the given [`Wrap`] periods.
    #[inline]
    #[must_use]
    pub fn noise_tiled(&self, x: f64, y: f64, z: f64, wrap: Wrap) -> f64 {
        self.noise_wrapped(x, y, z, wrap.x, wrap.y, wrap.z)
    }

    /// Samples noise, repeating every `wrap_*` units along each axis.
    ///
    /// # Returns
    ///
    /// A value nominally in `[-1, 1]`.
    #[must_use]
    pub fn noise_wrapped(
        &self,
        x: f64,
        y: f64,
        z: f64,
        wrap_x: i32,
        wrap_y: i32,
        wrap_z: i32,
    ) -> f64 {
        // Period masks; 0 and 256 both give 255
        let x_mask = Wrap::mask(wrap_x);
        let y_mask = Wrap::mask(wrap_y);
        let z_mask = Wrap::mask(wrap_z);

        // Lattice cell containing the point
        let px = x.floor();
        let py = y.floor();
        let pz = z.floor();

        let (x0, x1) = corners(px, x_mask);
        let (y0, y1) = corners(py, y_mask);
        let (z0, z1) = corners(pz, z_mask);

        // Offsets within the cell, in [0, 1)
        let x = x - px;
        let y = y - py;
        let z = z - pz;

        let u = fade(x);
        let v = fade(y);
        let w = fade(z);

        let t = &self.tables;

        // Hash the 8 corners: perm[perm[perm[x] + y] + z]
        let r0 = t.hash(x0);
        let r1 = t.hash(x1);

        let r00 = t.hash(r0 + y0);
        let r01 = t.hash(r0 + y1);
        let r10 = t.hash(r1 + y0);
        let r11 = t.hash(r1 + y1);

        let h000 = t.hash(r00 + z0) * 3;
        let h001 = t.hash(r00 + z1) * 3;
        let h010 = t.hash(r01 + z0) * 3;
        let h011 = t.hash(r01 + z1) * 3;
        let h100 = t.hash(r10 + z0) * 3;
        let h101 = t.hash(r10 + z1) * 3;
        let h110 = t.hash(r11 + z0) * 3;
        let h111 = t.hash(r11 + z1) * 3;

        // Gradient dot corner-to-point offset
        let n000 = t.dot(h000, x, y, z);
        let n001 = t.dot(h001, x, y, z - 1.0);
        let n010 = t.dot(h010, x, y - 1.0, z);
        let n011 = t.dot(h011, x, y - 1.0, z - 1.0);
        let n100 = t.dot(h100, x - 1.0, y, z);
        let n101 = t.dot(h101, x - 1.0, y, z - 1.0);
        let n110 = t.dot(h110, x - 1.0, y - 1.0, z);
        let n111 = t.dot(h111, x - 1.0, y - 1.0, z - 1.0);

        // Blend along z, then y, then x
        let n00 = lerp(n000, n001, w);
        let n01 = lerp(n010, n011, w);
        let n10 = lerp(n100, n101, w);
        let n11 = lerp(n110, n111, w);

        let n0 = lerp(n00, n01, v);
        let n1 = lerp(n10, n11, v);

        lerp(n0, n1, u)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        DEFAULT.clone()
    }
}

/// Evaluator seeded with the embedded default permutation.
pub static DEFAULT: Evaluator = Evaluator::from_permutation(&DEFAULT_PERMUTATION);

/// Builds a new evaluator from a seed.
#[inline]
#[must_use]
pub fn create(seed: Seed<'_>) -> Evaluator {
    Evaluator::new(seed)
}

/// Samples the [`DEFAULT`] evaluator.
#[inline]
#[must_use]
pub fn noise(x: f64, y: f64, z: f64) -> f64 {
    DEFAULT.noise(x, y, z)
}

/// Samples the [`DEFAULT`] evaluator with wrapping.
#[inline]
#[must_use]
pub fn noise_wrapped(x: f64, y: f64, z: f64, wrap_x: i32, wrap_y: i32, wrap_z: i32) -> f64 {
    DEFAULT.noise_wrapped(x, y, z, wrap_x, wrap_y, wrap_z)
}

/// Masked lattice coordinates of the two cell corners along one axis.
///
/// `cell` is reduced modulo 256 first so the low bits stay exact for every
/// finite coordinate, including ones beyond the `i64` range.
#[inline]
fn corners(cell: f64, mask: i64) -> (usize, usize) {
    let cell = cell.rem_euclid(256.0) as i64;
    ((cell & mask) as usize, (cell.wrapping_add(1) & mask) as usize)
}

/// Quintic smootherstep `6t^5 - 15t^4 + 10t^3`.
#[inline]
fn fade(t: f64) -> f64 {
    ((t * 6.0 - 15.0) * t + 10.0) * t * t * t
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
