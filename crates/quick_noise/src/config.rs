//! # Noise Configuration
//!
//! Optional TOML description of an evaluator, loaded once at startup.
//!
//! ```toml
//! seed = { value = 42 }
//!
//! [wrap]
//! x = 16
//! y = 16
//! ```
//!
//! `seed` accepts `"default"`, `"entropy"`, `"identity"`, `{ value = <u64> }`
//! or `{ table = [<256 integers>] }`. A table of the wrong length follows the
//! usual fallback and is not a configuration error.

use serde::{Deserialize, Serialize};

use crate::error::{NoiseError, NoiseResult};
use crate::evaluator::{Evaluator, Wrap, DEFAULT};
use crate::seed::Seed;

/// Largest accepted wrap period.
const MAX_WRAP: i64 = 256;

/// Where an evaluator's permutation comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedConfig {
    /// The embedded default table.
    #[default]
    Default,
    /// Shuffle from OS entropy.
    Entropy,
    /// The unshuffled table.
    Identity,
    /// Reproducible shuffle from a number.
    Value(u64),
    /// A literal table.
    Table(Vec<u8>),
}

impl SeedConfig {
    /// Builds the evaluator this seed describes.
    #[must_use]
    pub fn evaluator(&self) -> Evaluator {
        match self {
            Self::Default => DEFAULT.clone(),
            Self::Entropy => Evaluator::new(Seed::Entropy),
            Self::Identity => Evaluator::new(Seed::identity()),
            Self::Value(value) => Evaluator::new(Seed::from_u64(*value)),
            Self::Table(table) => Evaluator::new(Seed::Table(table.clone())),
        }
    }
}

/// Wrap periods as written in a config file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WrapConfig {
    /// Period along x (0 = none).
    pub x: i64,
    /// Period along y (0 = none).
    pub y: i64,
    /// Period along z (0 = none).
    pub z: i64,
}

impl WrapConfig {
    /// Converts to [`Wrap`], rejecting periods outside `0..=256`.
    pub fn to_wrap(self) -> NoiseResult<Wrap> {
        Ok(Wrap::new(
            checked_period('x', self.x)?,
            checked_period('y', self.y)?,
            checked_period('z', self.z)?,
        ))
    }
}

fn checked_period(axis: char, value: i64) -> NoiseResult<i32> {
    if (0..=MAX_WRAP).contains(&value) {
        i32::try_from(value).map_err(|_| NoiseError::InvalidWrap { axis, value })
    } else {
        Err(NoiseError::InvalidWrap { axis, value })
    }
}

/// Full evaluator description.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NoiseConfig {
    /// Permutation source.
    pub seed: SeedConfig,
    /// Default wrap periods for callers that tile.
    pub wrap: WrapConfig,
}

impl NoiseConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> NoiseResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| NoiseError::InvalidConfig(e.to_string()))?;
        config.wrap.to_wrap()?;
        Ok(config)
    }

    /// Serializes back to TOML.
    pub fn to_toml_string(&self) -> NoiseResult<String> {
        toml::to_string(self).map_err(|e| NoiseError::InvalidConfig(e.to_string()))
    }

    /// Builds the configured evaluator and its wrap periods.
    pub fn build(&self) -> NoiseResult<(Evaluator, Wrap)> {
        let wrap = self.wrap.to_wrap()?;
        tracing::debug!(seed = ?self.seed, ?wrap, "building evaluator from config");
        Ok((self.seed.evaluator(), wrap))
    }
}
