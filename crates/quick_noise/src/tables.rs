//! # Lookup Tables
//!
//! Every evaluator owns one [`NoiseTables`]: a doubled permutation table and a
//! parallel table of gradient vectors.
//!
//! ## Layout
//!
//! - `perm`: 512 entries. Entries `256..512` duplicate `0..256`, so corner hash
//!   chains (`perm[perm[x] + y]`) never need a second mask.
//! - `grad`: 512 packed triples. Triple `i` is the gradient selected by
//!   `perm[i] % 12`.

use std::fmt;

/// Number of entries in a base permutation.
pub const PERMUTATION_SIZE: usize = 256;

/// Number of entries in the doubled permutation table.
pub const TABLE_SIZE: usize = PERMUTATION_SIZE * 2;

/// Number of `i8` components in the gradient table.
pub const GRADIENT_TABLE_SIZE: usize = TABLE_SIZE * 3;

/// The 12 gradient directions: edge midpoints of a cube.
#[rustfmt::skip]
pub const GRADIENT_BASIS: [[i8; 3]; 12] = [
    [1, 1, 0], [-1, 1, 0], [1, -1, 0], [-1, -1, 0],
    [1, 0, 1], [-1, 0, 1], [1, 0, -1], [-1, 0, -1],
    [0, 1, 1], [0, -1, 1], [0, 1, -1], [0, -1, -1],
];

/// Permutation and gradient tables for one evaluator.
///
/// Built once, never mutated.
#[derive(Clone, PartialEq, Eq)]
pub struct NoiseTables {
    /// Doubled permutation table.
    perm: [u8; TABLE_SIZE],
    /// Packed gradient triples, one per `perm` entry.
    grad: [i8; GRADIENT_TABLE_SIZE],
}

impl NoiseTables {
    /// Expands a 256-entry permutation into the full table pair.
    ///
    /// The permutation is not validated; a sequence with repeated values is
    /// accepted and only skews the gradient distribution.
    #[must_use]
    pub const fn expand(permutation: &[u8; PERMUTATION_SIZE]) -> Self {
        let mut perm = [0u8; TABLE_SIZE];
        let mut i = 0;
        while i < PERMUTATION_SIZE {
            perm[i] = permutation[i];
            perm[i + PERMUTATION_SIZE] = permutation[i];
            i += 1;
        }

        let mut grad = [0i8; GRADIENT_TABLE_SIZE];
        let mut i = 0;
        while i < TABLE_SIZE {
            let basis = GRADIENT_BASIS[(perm[i] % 12) as usize];
            grad[i * 3] = basis[0];
            grad[i * 3 + 1] = basis[1];
            grad[i * 3 + 2] = basis[2];
            i += 1;
        }

        Self { perm, grad }
    }

    /// Returns the doubled permutation table.
    #[inline]
    #[must_use]
    pub const fn permutation(&self) -> &[u8; TABLE_SIZE] {
        &self.perm
    }

    /// Returns the packed gradient table.
    #[inline]
    #[must_use]
    pub const fn gradients(&self) -> &[i8; GRADIENT_TABLE_SIZE] {
        &self.grad
    }

    /// Returns the gradient assigned to permutation slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= TABLE_SIZE`.
    #[inline]
    #[must_use]
    pub fn gradient(&self, index: usize) -> [i8; 3] {
        let base = index * 3;
        [self.grad[base], self.grad[base + 1], self.grad[base + 2]]
    }

    /// Permutation lookup.
    #[inline]
    pub(crate) fn hash(&self, index: usize) -> usize {
        usize::from(self.perm[index])
    }

    /// Dot product of the gradient at `offset` (already multiplied by 3)
    /// with the corner-to-point vector.
    #[inline]
    pub(crate) fn dot(&self, offset: usize, x: f64, y: f64, z: f64) -> f64 {
        f64::from(self.grad[offset]) * x
            + f64::from(self.grad[offset + 1]) * y
            + f64::from(self.grad[offset + 2]) * z
    }

    /// Checks that the first half is a bijection on `0..=255`.
    ///
    /// Tables built from a caller-supplied sequence may fail this.
    #[must_use]
    pub fn is_bijective(&self) -> bool {
        let mut seen = [false; PERMUTATION_SIZE];
        for &value in &self.perm[..PERMUTATION_SIZE] {
            if seen[usize::from(value)] {
                return false;
            }
            seen[usize::from(value)] = true;
        }
        true
    }
}

impl fmt::Debug for NoiseTables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoiseTables")
            .field("perm_head", &&self.perm[..8])
            .field("bijective", &self.is_bijective())
            .finish_non_exhaustive()
    }
}

/// Expands a permutation into a [`NoiseTables`] pair.
#[inline]
#[must_use]
pub const fn expand_tables(permutation: &[u8; PERMUTATION_SIZE]) -> NoiseTables {
    NoiseTables::expand(permutation)
}
