//! Human-readable readings of sentences.

use morphogen_data::{Sentence, SentenceKind};

/// Entry of the "add sentence" menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceTemplate {
    pub kind: SentenceKind,
    pub label: &'static str,
}

pub const SENTENCE_TEMPLATES: [SentenceTemplate; 9] = [
    SentenceTemplate {
        kind: SentenceKind::LiarSelf,
        label: "This sentence is false (oscillator)",
    },
    SentenceTemplate {
        kind: SentenceKind::TruthTellerSelf,
        label: "This sentence is true (fixed point)",
    },
    SentenceTemplate {
        kind: SentenceKind::ConstTrue,
        label: "Always true",
    },
    SentenceTemplate {
        kind: SentenceKind::ConstFalse,
        label: "Always false",
    },
    SentenceTemplate {
        kind: SentenceKind::AssertTrue,
        label: "X is true",
    },
    SentenceTemplate {
        kind: SentenceKind::AssertFalse,
        label: "X is false",
    },
    SentenceTemplate {
        kind: SentenceKind::ImpliesSelfIfTarget,
        label: "Self is true if X is true (X → Self)",
    },
    SentenceTemplate {
        kind: SentenceKind::IffTarget,
        label: "Self is true iff X is true (Self ↔ X)",
    },
    SentenceTemplate {
        kind: SentenceKind::PercentSelfController,
        label: "Self is p% true (controller)",
    },
];

/// Short tag shown next to a sentence.
pub fn badge(kind: SentenceKind) -> &'static str {
    match kind {
        SentenceKind::LiarSelf => "LIAR",
        SentenceKind::TruthTellerSelf => "TT",
        SentenceKind::PercentSelfController => "P%",
        SentenceKind::ImpliesSelfIfTarget => "→",
        SentenceKind::IffTarget => "↔",
        SentenceKind::AssertTrue => "X=T",
        SentenceKind::AssertFalse => "X=F",
        SentenceKind::ConstTrue => "⊤",
        SentenceKind::ConstFalse => "⊥",
    }
}

/// What the sentence says, with its target's label spelled out.
pub fn render_sentence_text(sentence: &Sentence, network: &[Sentence]) -> String {
    let target = match &sentence.target_id {
        Some(id) => network
            .iter()
            .find(|s| &s.id == id)
            .map_or("(missing)", |s| s.label.as_str()),
        None => "(none)",
    };

    match sentence.kind {
        SentenceKind::ConstTrue => "Always true.".to_string(),
        SentenceKind::ConstFalse => "Always false.".to_string(),
        SentenceKind::LiarSelf => "This sentence is false.".to_string(),
        SentenceKind::TruthTellerSelf => "This sentence is true.".to_string(),
        SentenceKind::AssertTrue => format!("\"{target}\" is true."),
        SentenceKind::AssertFalse => format!("\"{target}\" is false."),
        SentenceKind::ImpliesSelfIfTarget => format!("This is true if \"{target}\" is true."),
        SentenceKind::IffTarget => format!("This is true iff \"{target}\" is true."),
        SentenceKind::PercentSelfController => format!(
            "This sentence is {}% true.",
            (sentence.effective_percent_target() * 100.0).round()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_targets() {
        let network = vec![
            Sentence::new("a", "Alpha", SentenceKind::LiarSelf),
            Sentence::new("b", "B", SentenceKind::AssertFalse).with_target("a"),
            Sentence::new("c", "C", SentenceKind::IffTarget).with_target("gone"),
            Sentence::new("d", "D", SentenceKind::AssertTrue),
        ];
        assert_eq!(render_sentence_text(&network[0], &network), "This sentence is false.");
        assert_eq!(render_sentence_text(&network[1], &network), "\"Alpha\" is false.");
        assert_eq!(
            render_sentence_text(&network[2], &network),
            "This is true iff \"(missing)\" is true."
        );
        assert_eq!(render_sentence_text(&network[3], &network), "\"(none)\" is true.");
    }

    #[test]
    fn test_render_percent() {
        let s = Sentence::new("p", "P", SentenceKind::PercentSelfController).with_percent(0.355, 10);
        assert_eq!(render_sentence_text(&s, &[]), "This sentence is 36% true.");
        let default = Sentence::new("p", "P", SentenceKind::PercentSelfController);
        assert_eq!(render_sentence_text(&default, &[]), "This sentence is 70% true.");
    }

    #[test]
    fn test_templates_cover_every_kind() {
        for kind in SentenceKind::ALL {
            assert_eq!(
                SENTENCE_TEMPLATES.iter().filter(|t| t.kind == kind).count(),
                1
            );
            assert!(!badge(kind).is_empty());
        }
    }
}
