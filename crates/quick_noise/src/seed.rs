//! # Permutation Seeding
//!
//! Turns a [`Seed`] into the 256-entry permutation an evaluator is built from.
//!
//! ## Fallback Contract
//!
//! Construction never fails. A table of the wrong length, or a generator that
//! yields something outside `[0, 1)`, logs a warning and the shuffle is redone
//! with OS entropy.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::tables::PERMUTATION_SIZE;

/// Source of the base permutation.
#[derive(Default)]
pub enum Seed<'a> {
    /// Shuffle with the platform generator, seeded from OS entropy.
    #[default]
    Entropy,
    /// Shuffle with a caller generator returning uniform values in `[0, 1)`.
    ///
    /// Only called during construction.
    Generator(Box<dyn FnMut() -> f64 + 'a>),
    /// A caller sequence used verbatim when exactly 256 entries long.
    Table(Vec<u8>),
    /// A statically sized permutation used verbatim.
    Permutation([u8; PERMUTATION_SIZE]),
}

impl<'a> Seed<'a> {
    /// Wraps a closure returning uniform values in `[0, 1)`.
    #[must_use]
    pub fn generator(next: impl FnMut() -> f64 + 'a) -> Self {
        Self::Generator(Box::new(next))
    }

    /// Draws shuffle values from any `rand` generator.
    #[must_use]
    pub fn from_rng<R: RngCore + 'a>(mut rng: R) -> Self {
        Self::Generator(Box::new(move || rng.gen::<f64>()))
    }

    /// The unshuffled table `0, 1, ..., 255`.
    #[must_use]
    pub const fn identity() -> Self {
        Self::Permutation(identity_permutation())
    }
}

impl Seed<'static> {
    /// Reproducible shuffle from a numeric seed.
    ///
    /// Uses ChaCha8 so the permutation is stable across platforms.
    #[must_use]
    pub fn from_u64(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl From<[u8; PERMUTATION_SIZE]> for Seed<'_> {
    fn from(permutation: [u8; PERMUTATION_SIZE]) -> Self {
        Self::Permutation(permutation)
    }
}

impl From<Vec<u8>> for Seed<'_> {
    fn from(table: Vec<u8>) -> Self {
        Self::Table(table)
    }
}

impl fmt::Debug for Seed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entropy => f.write_str("Entropy"),
            Self::Generator(_) => f.write_str("Generator(..)"),
            Self::Table(table) => f.debug_tuple("Table").field(&table.len()).finish(),
            Self::Permutation(_) => f.write_str("Permutation(..)"),
        }
    }
}

/// Resolves a seed into a base permutation.
///
/// Sequences are not checked for being a bijection; see
/// [`NoiseTables::is_bijective`](crate::tables::NoiseTables::is_bijective).
#[must_use]
pub fn build_permutation(seed: Seed<'_>) -> [u8; PERMUTATION_SIZE] {
    match seed {
        Seed::Entropy => entropy_permutation(),
        Seed::Generator(next) => match try_shuffle(next) {
            Ok(permutation) => permutation,
            Err(value) => {
                tracing::warn!(value, "seed generator returned a value outside [0, 1), using entropy");
                entropy_permutation()
            }
        },
        Seed::Table(table) => match <[u8; PERMUTATION_SIZE]>::try_from(table.as_slice()) {
            Ok(permutation) => permutation,
            Err(_) => {
                tracing::warn!(
                    len = table.len(),
                    expected = PERMUTATION_SIZE,
                    "seed table has the wrong length, using entropy"
                );
                entropy_permutation()
            }
        },
        Seed::Permutation(permutation) => permutation,
    }
}

/// `[0, 1, ..., 255]`.
#[must_use]
pub const fn identity_permutation() -> [u8; PERMUTATION_SIZE] {
    let mut permutation = [0u8; PERMUTATION_SIZE];
    let mut i = 0;
    while i < PERMUTATION_SIZE {
        permutation[i] = i as u8;
        i += 1;
    }
    permutation
}

/// Fisher-Yates over the identity, drawing from `next`.
///
/// Stops at the first unusable draw and returns it.
fn try_shuffle(mut next: impl FnMut() -> f64) -> Result<[u8; PERMUTATION_SIZE], f64> {
    let mut permutation = identity_permutation();
    for i in (1..PERMUTATION_SIZE).rev() {
        let value = next();
        if !(0.0..1.0).contains(&value) {
            return Err(value);
        }
        permutation.swap(i, pick(value, i));
    }
    Ok(permutation)
}

fn entropy_permutation() -> [u8; PERMUTATION_SIZE] {
    let mut rng = StdRng::from_entropy();
    let mut permutation = identity_permutation();
    for i in (1..PERMUTATION_SIZE).rev() {
        permutation.swap(i, pick(rng.gen::<f64>(), i));
    }
    permutation
}

/// `floor(value * (i + 1))`, for `value` in `[0, 1)`.
#[inline]
fn pick(value: f64, i: usize) -> usize {
    ((value * (i + 1) as f64) as usize).min(i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::expand_tables;

    fn is_bijective(permutation: &[u8; PERMUTATION_SIZE]) -> bool {
        expand_tables(permutation).is_bijective()
    }

    #[test]
    fn test_identity() {
        let permutation = build_permutation(Seed::identity());
        for (i, &value) in permutation.iter().enumerate() {
            assert_eq!(usize::from(value), i);
        }
    }

    #[test]
    fn test_table_used_verbatim() {
        let mut table: Vec<u8> = (0..=255).collect();
        table.reverse();
        // Not a permutation: accepted anyway.
        table[0] = 0;

        let permutation = build_permutation(Seed::Table(table.clone()));
        assert_eq!(permutation.as_slice(), table.as_slice());
        assert!(!is_bijective(&permutation));
    }

    #[test]
    fn test_wrong_length_falls_back() {
        let permutation = build_permutation(Seed::Table(vec![1, 2, 3]));
        assert!(is_bijective(&permutation), "Fallback must shuffle a real permutation");

        let permutation = build_permutation(Seed::Table(Vec::new()));
        assert!(is_bijective(&permutation));
    }

    #[test]
    fn test_generator_drives_shuffle() {
        let mut calls = 0;
        let permutation = build_permutation(Seed::generator(|| {
            calls += 1;
            0.0
        }));

        assert_eq!(calls, PERMUTATION_SIZE - 1, "One draw per swap");
        assert!(is_bijective(&permutation));
        // Always picking slot 0 rotates the identity by one.
        assert_eq!(permutation[0], 1);
        assert_eq!(permutation[255], 0);
    }

    #[test]
    fn test_generator_near_one() {
        // The largest draw keeps every element in place.
        let permutation = build_permutation(Seed::generator(|| 1.0 - f64::EPSILON));
        assert_eq!(permutation, identity_permutation());
    }

    #[test]
    fn test_unusable_generator_falls_back() {
        for bad in [1.0, -0.5, f64::NAN, f64::INFINITY] {
            let permutation = build_permutation(Seed::generator(move || bad));
            assert!(is_bijective(&permutation), "Fallback for {bad} must be a permutation");
        }
    }

    #[test]
    fn test_from_u64_reproducible() {
        let a = build_permutation(Seed::from_u64(12345));
        let b = build_permutation(Seed::from_u64(12345));
        let c = build_permutation(Seed::from_u64(54321));

        assert_eq!(a, b, "Same seed must give the same permutation");
        assert_ne!(a, c, "Different seeds should give different permutations");
        assert!(is_bijective(&a));
    }

    #[test]
    fn test_entropy_is_permutation() {
        let permutation = build_permutation(Seed::default());
        assert!(is_bijective(&permutation));
    }

    #[test]
    fn test_conversions() {
        assert!(matches!(Seed::from(vec![1u8, 2]), Seed::Table(_)));
        assert!(matches!(Seed::from([0u8; PERMUTATION_SIZE]), Seed::Permutation(_)));
        assert_eq!(format!("{:?}", Seed::Table(vec![9; 4])), "Table(4)");
    }
}
