use serde::{Deserialize, Serialize};

use super::sentence::SentenceKind;

/// First exact repetition of a state vector in a history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CycleInfo {
    pub found: bool,
    /// Tick of the first occurrence of the repeated state.
    pub start_index: usize,
    pub period: usize,
}

impl CycleInfo {
    pub const NONE: CycleInfo = CycleInfo {
        found: false,
        start_index: 0,
        period: 0,
    };

    /// One-line description of the cycle, or of its absence.
    pub fn summary(&self) -> String {
        if self.found {
            format!(
                "Cycle detected: start t={}, period={}",
                self.start_index, self.period
            )
        } else {
            "No exact cycle detected (within simulated horizon)".to_string()
        }
    }
}

/// Post-burn-in summary of one sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceStats {
    pub id: String,
    pub label: String,
    pub kind: SentenceKind,
    /// Fraction of ticks true.
    pub mean: f64,
    /// Fraction of adjacent tick pairs whose value changed.
    pub flip_rate: f64,
    /// `4 * mean * (1 - mean)`.
    pub entropy_proxy: f64,
}

/// Everything a run hands to a renderer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimulationResult {
    pub history: Vec<Vec<bool>>,
    pub cycle: CycleInfo,
    pub stats: Vec<SentenceStats>,
}

impl SimulationResult {
    /// Last valid playback index; 0 for an empty history.
    pub fn max_step(&self) -> usize {
        self.history.len().saturating_sub(1)
    }
}
