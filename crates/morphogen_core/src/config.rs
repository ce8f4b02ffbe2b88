//! Configuration management for simulation parameters.
//!
//! Strongly-typed configuration that maps onto `morphogen.toml`.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `morphogen.toml` (overrides defaults)
//! 3. Command-line flags (applied by the binary)
//!
//! ## Example `morphogen.toml`
//!
//! ```toml
//! [simulation]
//! steps = 500
//! burn_in = 200
//! init_mode = "all_false"
//! seed = 7
//!
//! [network]
//! preset = "custom"
//!
//! [[network.sentences]]
//! id = "a"
//! label = "A"
//! kind = "ASSERT_FALSE"
//! target_id = "b"
//!
//! [[network.sentences]]
//! id = "b"
//! label = "B"
//! kind = "ASSERT_FALSE"
//! target_id = "a"
//! ```

use std::path::Path;

use morphogen_data::{AttractorParams, PresetId, Sentence, SimulationParams};
use serde::{Deserialize, Serialize};

use crate::presets::sentences_for_preset;

pub const MAX_STEPS: usize = 1_000_000;
pub const MAX_ATTRACTOR_ITERATIONS: usize = 5_000_000;

/// Which network to simulate.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct NetworkConfig {
    pub preset: PresetId,
    /// Sentences used when `preset` is `custom`; empty falls back to the basic preset.
    pub sentences: Vec<Sentence>,
}

impl NetworkConfig {
    /// The preset's sentences, or the custom list when `Custom` has one.
    pub fn resolve(&self) -> Vec<Sentence> {
        if self.preset == PresetId::Custom && !self.sentences.is_empty() {
            self.sentences.clone()
        } else {
            sentences_for_preset(self.preset)
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Milliseconds between playback ticks.
    pub interval_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self { interval_ms: 100 }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub simulation: SimulationParams,
    pub network: NetworkConfig,
    pub attractor: AttractorParams,
    pub playback: PlaybackConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Values the engine clamps itself (burn-in, window, percent target) are
    /// not checked here.
    pub fn validate(&self) -> anyhow::Result<()> {
        let sim = &self.simulation;
        anyhow::ensure!(
            sim.steps <= MAX_STEPS,
            "Steps too large (max {MAX_STEPS})"
        );
        anyhow::ensure!(
            sim.noise_flip_prob.is_finite() && (0.0..=1.0).contains(&sim.noise_flip_prob),
            "Noise flip probability must be in [0.0, 1.0]"
        );

        let att = &self.attractor;
        anyhow::ensure!(
            att.iterations <= MAX_ATTRACTOR_ITERATIONS,
            "Attractor iterations too large (max {MAX_ATTRACTOR_ITERATIONS})"
        );
        anyhow::ensure!(
            [att.initial_x, att.initial_y, att.initial_z, att.factor]
                .iter()
                .all(|v| v.is_finite()),
            "Attractor initial values and factor must be finite"
        );

        anyhow::ensure!(
            self.playback.interval_ms > 0,
            "Playback interval must be positive"
        );
        anyhow::ensure!(
            self.logging.level.parse::<tracing::Level>().is_ok(),
            "Unknown log level: {}",
            self.logging.level
        );

        if self.network.preset == PresetId::Custom {
            crate::network::validate_network(&self.network.sentences)?;
        }

        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if it exists, defaults otherwise.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }
}

/// SHA-256 hex digest identifying a (network, params) pair.
#[must_use]
pub fn fingerprint_run(sentences: &[Sentence], params: &SimulationParams) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(format!("{params:?}").as_bytes());
    for s in sentences {
        hasher.update(format!("{s:?}").as_bytes());
    }
    hex::encode(hasher.finalize())
}
