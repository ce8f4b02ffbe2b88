//! Named starter networks.

use morphogen_data::{PresetId, Sentence, SentenceKind};

use crate::network::uid;

/// Liar, a conditional on the liar, a 70% controller and a truth-teller.
pub fn preset_basic_examples() -> Vec<Sentence> {
    let liar = Sentence::new(uid("s"), "Liar", SentenceKind::LiarSelf);
    let conditional = Sentence::new(uid("s"), "If Liar then Self", SentenceKind::ImpliesSelfIfTarget)
        .with_target(liar.id.clone());
    let controller = Sentence::new(uid("s"), "70% true", SentenceKind::PercentSelfController)
        .with_percent(0.7, 60);
    let truth_teller = Sentence::new(uid("s"), "Truth-teller", SentenceKind::TruthTellerSelf);
    vec![liar, conditional, controller, truth_teller]
}

/// A and B each assert the other is false.
pub fn preset_mutual_negation() -> Vec<Sentence> {
    let a_id = uid("s");
    let b_id = uid("s");
    vec![
        Sentence::new(a_id.clone(), "A", SentenceKind::AssertFalse).with_target(b_id.clone()),
        Sentence::new(b_id, "B", SentenceKind::AssertFalse).with_target(a_id),
    ]
}

/// `n` sentences each reading the next one (wrapping); even positions
/// assert it true, odd positions assert it false.
pub fn preset_ring(n: usize) -> Vec<Sentence> {
    let ids: Vec<String> = (0..n).map(|_| uid("s")).collect();
    ids.iter()
        .enumerate()
        .map(|(i, id)| {
            let kind = if i % 2 == 0 {
                SentenceKind::AssertTrue
            } else {
                SentenceKind::AssertFalse
            };
            Sentence::new(id.clone(), format!("Ring-{}", i + 1), kind)
                .with_target(ids[(i + 1) % n].clone())
        })
        .collect()
}

/// Fresh sentences for `preset`; `Custom` falls back to the basic examples.
pub fn sentences_for_preset(preset: PresetId) -> Vec<Sentence> {
    match preset {
        PresetId::Basic | PresetId::Custom => preset_basic_examples(),
        PresetId::Mutual => preset_mutual_negation(),
        PresetId::Ring3 => preset_ring(3),
        PresetId::Ring5 => preset_ring(5),
    }
}
