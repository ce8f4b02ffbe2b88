use serde::{Deserialize, Serialize};

/// Target fraction used by a percentage controller that does not set one.
pub const DEFAULT_PERCENT_TARGET: f64 = 0.7;
/// Window length (ticks) used by a percentage controller that does not set one.
pub const DEFAULT_WINDOW: i64 = 50;

/// Behaviour rule of a sentence.
///
/// Every rule reads only previous-tick values, so the enumeration is the
/// complete description of how a sentence evolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SentenceKind {
    /// "Always true."
    ConstTrue,
    /// "Always false."
    ConstFalse,
    /// "This sentence is false."
    LiarSelf,
    /// "This sentence is true."
    TruthTellerSelf,
    /// "X is true."
    AssertTrue,
    /// "X is false."
    AssertFalse,
    /// "This sentence is true if X is true." (X -> Self)
    ImpliesSelfIfTarget,
    /// "This sentence is true iff X is true." (Self <-> X)
    IffTarget,
    /// Steers its own sliding-window truth frequency toward a target fraction.
    PercentSelfController,
}

impl SentenceKind {
    pub const ALL: [SentenceKind; 9] = [
        SentenceKind::LiarSelf,
        SentenceKind::TruthTellerSelf,
        SentenceKind::ConstTrue,
        SentenceKind::ConstFalse,
        SentenceKind::AssertTrue,
        SentenceKind::AssertFalse,
        SentenceKind::ImpliesSelfIfTarget,
        SentenceKind::IffTarget,
        SentenceKind::PercentSelfController,
    ];

    /// Whether the rule reads another sentence's previous value.
    pub fn needs_target(&self) -> bool {
        matches!(
            self,
            SentenceKind::AssertTrue
                | SentenceKind::AssertFalse
                | SentenceKind::ImpliesSelfIfTarget
                | SentenceKind::IffTarget
        )
    }

    /// Whether the rule uses `percent_target` and `window`.
    pub fn needs_percent(&self) -> bool {
        matches!(self, SentenceKind::PercentSelfController)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentenceKind::ConstTrue => "CONST_TRUE",
            SentenceKind::ConstFalse => "CONST_FALSE",
            SentenceKind::LiarSelf => "LIAR_SELF",
            SentenceKind::TruthTellerSelf => "TRUTH_TELLER_SELF",
            SentenceKind::AssertTrue => "ASSERT_TRUE",
            SentenceKind::AssertFalse => "ASSERT_FALSE",
            SentenceKind::ImpliesSelfIfTarget => "IMPLIES_SELF_IF_TARGET",
            SentenceKind::IffTarget => "IFF_TARGET",
            SentenceKind::PercentSelfController => "PERCENT_SELF_CONTROLLER",
        }
    }
}

/// One self- or inter-referential boolean variable of a network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    pub id: String,
    pub label: String,
    #[serde(alias = "type")]
    pub kind: SentenceKind,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "targetId")]
    pub target_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "percentTarget")]
    pub percent_target: Option<f64>,
    /// Window length in ticks; fractional values are floored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<f64>,
}

impl Sentence {
    /// A sentence with no target and no controller settings.
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: SentenceKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            target_id: None,
            percent_target: None,
            window: None,
        }
    }

    /// Points the sentence at `target_id`.
    #[must_use]
    pub fn with_target(mut self, target_id: impl Into<String>) -> Self {
        self.target_id = Some(target_id.into());
        self
    }

    /// Sets the controller target and window.
    #[must_use]
    pub fn with_percent(mut self, percent_target: f64, window: i64) -> Self {
        self.percent_target = Some(percent_target);
        self.window = Some(window as f64);
        self
    }

    /// Target fraction clamped to [0, 1]; missing or NaN falls back to the default.
    pub fn effective_percent_target(&self) -> f64 {
        match self.percent_target {
            Some(p) if !p.is_nan() => p.clamp(0.0, 1.0),
            _ => DEFAULT_PERCENT_TARGET,
        }
    }

    /// Window length in ticks, floored and never below 1; missing or NaN falls back to the default.
    pub fn effective_window(&self) -> usize {
        match self.window {
            Some(w) if !w.is_nan() => w.floor().max(1.0) as usize,
            _ => DEFAULT_WINDOW as usize,
        }
    }
}
