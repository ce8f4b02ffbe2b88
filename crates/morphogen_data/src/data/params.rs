use serde::{Deserialize, Deserializer, Serialize};

/// How tick 0 is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitMode {
    /// Each sentence independently true with probability 0.5 (seeded).
    #[default]
    Random,
    AllFalse,
    AllTrue,
    /// Even positions true, odd positions false.
    #[serde(alias = "checkerboard")]
    Checker,
}

impl InitMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InitMode::Random => "random",
            InitMode::AllFalse => "all_false",
            InitMode::AllTrue => "all_true",
            InitMode::Checker => "checker",
        }
    }

    /// Parses the wire name, e.g. `"random"`.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "random" => Some(InitMode::Random),
            "all_false" | "false" => Some(InitMode::AllFalse),
            "all_true" | "true" => Some(InitMode::AllTrue),
            "checker" | "checkerboard" => Some(InitMode::Checker),
            _ => None,
        }
    }
}

/// Parameters of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Total ticks in the history, tick 0 included.
    pub steps: usize,
    /// Leading ticks excluded from summary statistics.
    pub burn_in: usize,
    pub init_mode: InitMode,
    /// Any integer is accepted; only its low 32 bits are kept.
    #[serde(deserialize_with = "deserialize_seed")]
    pub seed: u32,
    /// Per-sentence, per-tick probability of flipping the computed value.
    pub noise_flip_prob: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            steps: 200,
            burn_in: 20,
            init_mode: InitMode::Random,
            seed: 42,
            noise_flip_prob: 0.0,
        }
    }
}

fn deserialize_seed<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let seed = i64::deserialize(deserializer)?;
    Ok(seed as u32)
}

impl SimulationParams {
    /// Burn-in clamped so at least one tick of a `len`-tick history survives.
    pub fn effective_burn_in(&self, len: usize) -> usize {
        self.burn_in.min(len.saturating_sub(1))
    }
}
