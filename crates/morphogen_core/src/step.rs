//! Per-tick update rules.
//!
//! Every sentence's next value is a function of the previous committed tick
//! only (plus, for percentage controllers, the committed history prefix), so
//! a tick is computed into a fresh vector and committed as a whole.

use morphogen_data::{Sentence, SentenceKind};

use crate::history::History;
use crate::network::NetworkIndex;
use crate::rng::Mulberry32;

/// A sentence with its target resolved and its parameters clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub kind: SentenceKind,
    pub target: Option<usize>,
    pub percent_target: f64,
    pub window: usize,
}

impl Rule {
    /// Resolves every sentence into a rule over state positions.
    pub fn compile(sentences: &[Sentence], index: &NetworkIndex) -> Vec<Rule> {
        sentences
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let target = index.target_of(i);
                if s.kind.needs_target() && target.is_none() {
                    tracing::warn!(
                        id = %s.id,
                        kind = s.kind.as_str(),
                        "Sentence has no target; its target reads as false"
                    );
                }
                Rule {
                    kind: s.kind,
                    target,
                    percent_target: s.effective_percent_target(),
                    window: s.effective_window(),
                }
            })
            .collect()
    }
}

/// Next value of sentence `i` before noise.
pub fn next_truth(rule: &Rule, i: usize, prev: &[bool], history: &History) -> bool {
    let self_prev = prev[i];
    let target_prev = rule.target.is_some_and(|t| prev[t]);

    match rule.kind {
        SentenceKind::ConstTrue => true,
        SentenceKind::ConstFalse => false,
        SentenceKind::LiarSelf => !self_prev,
        SentenceKind::TruthTellerSelf => self_prev,
        SentenceKind::AssertTrue => target_prev,
        SentenceKind::AssertFalse => !target_prev,
        // target -> self, read on the previous tick
        SentenceKind::ImpliesSelfIfTarget => !target_prev || self_prev,
        SentenceKind::IffTarget => self_prev == target_prev,
        SentenceKind::PercentSelfController => {
            history.window_average(i, rule.window) < rule.percent_target
        }
    }
}

/// Computes the next state vector from the last committed tick.
///
/// One PRNG draw per sentence when `noise_flip_prob > 0`, none otherwise.
pub fn step(
    rules: &[Rule],
    history: &History,
    noise_flip_prob: f64,
    rng: &mut Mulberry32,
) -> Vec<bool> {
    let fallback;
    let prev = match history.last() {
        Some(prev) => prev,
        None => {
            fallback = vec![false; rules.len()];
            &fallback
        }
    };

    rules
        .iter()
        .enumerate()
        .map(|(i, rule)| {
            let value = next_truth(rule, i, prev, history);
            if noise_flip_prob > 0.0 && rng.chance(noise_flip_prob) {
                !value
            } else {
                value
            }
        })
        .collect()
}
