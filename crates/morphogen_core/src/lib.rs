//! # Morphogen Core
//!
//! Deterministic engine for networks of self-referential sentences
//! evaluated under time semantics: each sentence's truth value at tick `t`
//! is computed from the values committed at tick `t - 1`.
//!
//! This crate contains:
//! - A seeded Mulberry32 PRNG usable as a `rand` RNG
//! - Network validation and editing
//! - The per-tick update rules and the simulation driver
//! - Cycle detection and post-burn-in statistics
//! - Infinite-valued (continuous) attractor dynamics
//! - Presets, sentence readings, ensemble runs, configuration and logging
//!
//! ## Example
//!
//! ```
//! use morphogen_core::{simulate, InitMode, Sentence, SentenceKind, SimulationParams};
//!
//! let liar = vec![Sentence::new("l", "Liar", SentenceKind::LiarSelf)];
//! let params = SimulationParams {
//!     steps: 6,
//!     init_mode: InitMode::AllFalse,
//!     ..Default::default()
//! };
//! let result = simulate(&liar, &params).unwrap();
//! assert_eq!(result.cycle.period, 2);
//! ```

/// Cycle detection and per-sentence statistics
pub mod analysis;
/// Continuous-valued self-reference maps
pub mod attractor;
/// Configuration management (`morphogen.toml`)
pub mod config;
/// Natural-language readings and badges
pub mod describe;
/// Simulation driver (batch and incremental)
pub mod engine;
/// Many seeds of one network
pub mod ensemble;
pub mod error;
/// Append-only state history
pub mod history;
/// Run metrics and logging setup
pub mod metrics;
/// Network validation and editing
pub mod network;
/// Named starter networks
pub mod presets;
pub mod rng;
/// Per-tick update rules
pub mod step;

pub use analysis::{bit_key, compute_stats, detect_cycle};
pub use engine::{simulate, Simulation};
pub use error::{ConfigError, Result};
pub use history::History;
pub use metrics::{init_logging, Metrics};
pub use morphogen_data::{
    AttractorKind, AttractorParams, CycleInfo, InitMode, PresetId, Sentence, SentenceKind,
    SentenceStats, SimulationParams, SimulationResult,
};
pub use network::{validate_network, Network, NetworkIndex, SentenceDraft};
pub use rng::Mulberry32;
