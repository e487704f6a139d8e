//! # Quick Noise
//!
//! Seeded 3D Perlin gradient noise with optional tiling.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same tables and coordinates give bit-identical output
//! 2. **Immutable**: Tables are built once; evaluators are `Send + Sync`
//! 3. **Total**: Construction and evaluation never fail
//!
//! ## Core Components
//!
//! - `Seed`: Where the base permutation comes from
//! - `NoiseTables`: Doubled permutation table plus gradient table
//! - `Evaluator`: Trilinear lattice evaluation with quintic fade
//! - `DEFAULT`: Pre-seeded evaluator, built at compile time
//! - `NoiseConfig`: TOML description of an evaluator
//!
//! ## Example
//!
//! ```rust
//! use quick_noise::{create, noise, Seed};
//!
//! // Reproducible across runs.
//! assert_eq!(noise(0.5, 0.5, 0.5), 0.375);
//!
//! // Custom seeded evaluator.
//! let custom = create(Seed::from_u64(7));
//! let value = custom.noise_wrapped(3.25, 1.5, 0.0, 8, 8, 0);
//! assert!(value.is_finite());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod default_table;
pub mod error;
pub mod evaluator;
pub mod seed;
pub mod tables;

pub use config::{NoiseConfig, SeedConfig, WrapConfig};
pub use default_table::DEFAULT_PERMUTATION;
pub use error::{NoiseError, NoiseResult};
pub use evaluator::{create, noise, noise_wrapped, Evaluator, Wrap, DEFAULT};
pub use seed::{build_permutation, identity_permutation, Seed};
pub use tables::{expand_tables, NoiseTables, GRADIENT_BASIS, PERMUTATION_SIZE, TABLE_SIZE};
