//! Append-only record of committed state vectors.

use serde::{Deserialize, Serialize};

/// Ordered state vectors, one per committed tick.
///
/// Ticks are only ever appended; nothing hands out mutable access to a
/// committed vector, so window averages and cycle detection can read any
/// past tick.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    ticks: Vec<Vec<bool>>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves room for `ticks` state vectors.
    pub fn with_capacity(ticks: usize) -> Self {
        Self {
            ticks: Vec::with_capacity(ticks),
        }
    }

    /// Commits a whole state vector as the newest tick.
    pub fn push(&mut self, state: Vec<bool>) {
        self.ticks.push(state);
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    /// The newest committed tick.
    pub fn last(&self) -> Option<&[bool]> {
        self.ticks.last().map(Vec::as_slice)
    }

    pub fn as_slice(&self) -> &[Vec<bool>] {
        &self.ticks
    }

    pub fn into_inner(self) -> Vec<Vec<bool>> {
        self.ticks
    }

    /// Fraction of `true` for sentence `index` over the last `window`
    /// committed ticks (fewer if fewer exist); 0.5 when nothing is committed.
    pub fn window_average(&self, index: usize, window: usize) -> f64 {
        let window = window.max(1);
        let start = self.ticks.len().saturating_sub(window);
        let recent = &self.ticks[start..];
        if recent.is_empty() {
            return 0.5;
        }
        let ones = recent.iter().filter(|state| state[index]).count();
        ones as f64 / recent.len() as f64
    }
}

impl From<Vec<Vec<bool>>> for History {
    fn from(ticks: Vec<Vec<bool>>) -> Self {
        Self { ticks }
    }
}
