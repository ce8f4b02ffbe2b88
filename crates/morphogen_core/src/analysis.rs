//! Cycle detection and per-sentence summary statistics.

use std::collections::HashMap;

use morphogen_data::{CycleInfo, Sentence, SentenceStats};

/// Canonical key of a state vector: one '0'/'1' per sentence in order.
pub fn bit_key(state: &[bool]) -> String {
    state.iter().map(|&b| if b { '1' } else { '0' }).collect()
}

/// Finds the first state vector that repeats an earlier one.
pub fn detect_cycle(history: &[Vec<bool>]) -> CycleInfo {
    let mut seen: HashMap<String, usize> = HashMap::with_capacity(history.len());
    for (t, state) in history.iter().enumerate() {
        let key = bit_key(state);
        if let Some(&start) = seen.get(&key) {
            return CycleInfo {
                found: true,
                start_index: start,
                period: t - start,
            };
        }
        seen.insert(key, t);
    }
    CycleInfo::NONE
}

/// Stats for every sentence over `history[burn_in..]`, with `burn_in`
/// clamped so at least the last tick is kept.
pub fn compute_stats(
    sentences: &[Sentence],
    history: &[Vec<bool>],
    burn_in: usize,
) -> Vec<SentenceStats> {
    let burn = burn_in.min(history.len().saturating_sub(1));
    let post = &history[burn..];

    sentences
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let ones = post.iter().filter(|state| state[i]).count();
            let flips = post.windows(2).filter(|w| w[0][i] != w[1][i]).count();
            let mean = if post.is_empty() {
                0.0
            } else {
                ones as f64 / post.len() as f64
            };
            let flip_rate = if post.len() > 1 {
                flips as f64 / (post.len() - 1) as f64
            } else {
                0.0
            };

            SentenceStats {
                id: s.id.clone(),
                label: s.label.clone(),
                kind: s.kind,
                mean,
                flip_rate,
                entropy_proxy: 4.0 * mean * (1.0 - mean),
            }
        })
        .collect()
}
