//! Generation configuration
//!
//! A [`GenerationConfig`] is validated once, when it is built or
//! deserialized, and is read-only afterwards. Generation never sees
//! out-of-range parameters.
//!
//! ```
//! use rc_core::GenerationConfig;
//!
//! let config = GenerationConfig::builder()
//!     .variants(["hall", "crypt"])
//!     .room_count(12)
//!     .seed(7)
//!     .dead_end_probability(0.25)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.room_count(), 12);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::grid::RoomSize;
use crate::rng::DEFAULT_SEED;

/// Probability of preferring a straight continuation over a turn
pub const STRAIGHT_BIAS: f32 = 0.7;

/// Minimum dot product for a candidate to count as straight ahead
pub const ALIGNMENT_THRESHOLD: f32 = 0.9;

/// Rooms placed when no count is given
pub const DEFAULT_ROOM_COUNT: usize = 5;

pub const DEFAULT_DEAD_END_PROBABILITY: f32 = 0.2;
pub const DEFAULT_LOOP_PROBABILITY: f32 = 0.1;

/// Validated parameters of one generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGenerationConfig", into = "RawGenerationConfig")]
pub struct GenerationConfig {
    variants: Vec<String>,
    room_count: usize,
    seed: Option<u64>,
    dead_end_probability: f32,
    loop_probability: f32,
    room_size: RoomSize,
}

impl GenerationConfig {
    pub fn builder() -> GenerationConfigBuilder {
        GenerationConfigBuilder::default()
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawGenerationConfig = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Room variant names; placed rooms refer to them by index
    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    pub fn room_count(&self) -> usize {
        self.room_count
    }

    /// Seed as configured, `None` if unset
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Seed a run actually uses
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    pub fn dead_end_probability(&self) -> f32 {
        self.dead_end_probability
    }

    pub fn loop_probability(&self) -> f32 {
        self.loop_probability
    }

    pub fn room_size(&self) -> RoomSize {
        self.room_size
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            variants: vec!["room".to_string()],
            room_count: DEFAULT_ROOM_COUNT,
            seed: None,
            dead_end_probability: DEFAULT_DEAD_END_PROBABILITY,
            loop_probability: DEFAULT_LOOP_PROBABILITY,
            room_size: RoomSize::default(),
        }
    }
}

/// Builder for [`GenerationConfig`]; `build` validates.
#[derive(Debug, Clone)]
pub struct GenerationConfigBuilder {
    raw: RawGenerationConfig,
}

impl Default for GenerationConfigBuilder {
    fn default() -> Self {
        Self {
            raw: GenerationConfig::default().into(),
        }
    }
}

impl GenerationConfigBuilder {
    pub fn variants<I, S>(mut self, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.raw.variants = variants.into_iter().map(Into::into).collect();
        self
    }

    /// Negative counts are rejected by `build`
    pub fn room_count(mut self, count: i64) -> Self {
        self.raw.room_count = count;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.raw.seed = Some(seed);
        self
    }

    pub fn dead_end_probability(mut self, p: f32) -> Self {
        self.raw.dead_end_probability = p;
        self
    }

    pub fn loop_probability(mut self, p: f32) -> Self {
        self.raw.loop_probability = p;
        self
    }

    /// Spacing between neighbours. Sizes below 1.0 pass validation but
    /// truncate neighbours onto occupied keys; see [`RoomSize`].
    pub fn room_size(mut self, x: f32, z: f32) -> Self {
        self.raw.room_size = RoomSize::new(x, z);
        self
    }

    pub fn build(self) -> Result<GenerationConfig, ConfigError> {
        GenerationConfig::try_from(self.raw)
    }
}

/// Unvalidated mirror of [`GenerationConfig`], the serialized form
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RawGenerationConfig {
    pub variants: Vec<String>,
    pub room_count: i64,
    pub seed: Option<u64>,
    pub dead_end_probability: f32,
    pub loop_probability: f32,
    pub room_size: RoomSize,
}

impl Default for RawGenerationConfig {
    fn default() -> Self {
        GenerationConfig::default().into()
    }
}

impl From<GenerationConfig> for RawGenerationConfig {
    fn from(config: GenerationConfig) -> Self {
        Self {
            variants: config.variants,
            room_count: config.room_count as i64,
            seed: config.seed,
            dead_end_probability: config.dead_end_probability,
            loop_probability: config.loop_probability,
            room_size: config.room_size,
        }
    }
}

impl TryFrom<RawGenerationConfig> for GenerationConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGenerationConfig) -> Result<Self, Self::Error> {
        check_probability("dead-end", raw.dead_end_probability)?;
        check_probability("loop", raw.loop_probability)?;

        let room_count = usize::try_from(raw.room_count)
            .map_err(|_| ConfigError::NegativeRoomCount(raw.room_count))?;

        if !raw.room_size.is_valid() {
            return Err(ConfigError::InvalidRoomSize {
                x: raw.room_size.x,
                z: raw.room_size.z,
            });
        }

        Ok(Self {
            variants: raw.variants,
            room_count,
            seed: raw.seed,
            dead_end_probability: raw.dead_end_probability,
            loop_probability: raw.loop_probability,
            room_size: raw.room_size,
        })
    }
}

fn check_probability(name: &'static str, value: f32) -> Result<(), ConfigError> {
    // NaN fails the range check
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ProbabilityOutOfRange { name, value })
    }
}
