use serde::{Deserialize, Serialize};

/// Named network topologies offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetId {
    #[default]
    Basic,
    Mutual,
    Ring3,
    Ring5,
    Custom,
}

impl PresetId {
    pub const ALL: [PresetId; 5] = [
        PresetId::Basic,
        PresetId::Mutual,
        PresetId::Ring3,
        PresetId::Ring5,
        PresetId::Custom,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            PresetId::Basic => "Basic examples",
            PresetId::Mutual => "Mutual negation",
            PresetId::Ring3 => "Ring of 3",
            PresetId::Ring5 => "Ring of 5",
            PresetId::Custom => "Custom",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PresetId::Basic => "Liar, conditional, percent-controller, and truth-teller.",
            PresetId::Mutual => "Two sentences each claiming the other is false.",
            PresetId::Ring3 => "Three sentences in a circular reference pattern.",
            PresetId::Ring5 => "Five sentences in a circular reference pattern.",
            PresetId::Custom => "Build your own sentence network.",
        }
    }

    /// Parses the wire name, e.g. `"ring3"`.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "basic" => Some(PresetId::Basic),
            "mutual" => Some(PresetId::Mutual),
            "ring3" => Some(PresetId::Ring3),
            "ring5" => Some(PresetId::Ring5),
            "custom" => Some(PresetId::Custom),
            _ => None,
        }
    }

    /// Next preset in display order, wrapping; used to cycle presets.
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|p| p == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}
