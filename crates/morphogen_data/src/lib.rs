//! Core data structures for the logical-morphogenesis simulation.
//!
//! Everything here is plain data: sentences, run parameters, and the
//! results a run produces. Behaviour lives in `morphogen_core`.

pub mod data;

pub use data::attractor::{
    AttractorKind, AttractorParams, AttractorPoint, AttractorResult, DualistMode,
    EscapeTimePoint,
};
pub use data::params::{InitMode, SimulationParams};
pub use data::preset::PresetId;
pub use data::result::{CycleInfo, SentenceStats, SimulationResult};
pub use data::sentence::{Sentence, SentenceKind, DEFAULT_PERCENT_TARGET, DEFAULT_WINDOW};
