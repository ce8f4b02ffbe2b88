//! Sentence networks: validation, id lookup and editing.

use std::collections::HashMap;
use std::ops::Deref;

use morphogen_data::{Sentence, SentenceKind};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ConfigError, Result};

/// Resolved id lookup for a validated network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkIndex {
    by_id: HashMap<String, usize>,
    targets: Vec<Option<usize>>,
}

impl NetworkIndex {
    /// Position of the sentence with `id`.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// Position of the sentence that sentence `i` targets, if it has a target.
    pub fn target_of(&self, i: usize) -> Option<usize> {
        self.targets.get(i).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Builds the id lookup, rejecting empty ids, duplicate ids and targets that
/// name no sentence. Self-targets and reference cycles are accepted.
pub fn validate_network(sentences: &[Sentence]) -> Result<NetworkIndex> {
    let mut by_id = HashMap::with_capacity(sentences.len());
    for (i, s) in sentences.iter().enumerate() {
        if s.id.is_empty() {
            return Err(ConfigError::EmptyId { index: i });
        }
        if by_id.insert(s.id.clone(), i).is_some() {
            return Err(ConfigError::duplicate_id(&s.id));
        }
    }

    let mut targets = Vec::with_capacity(sentences.len());
    for s in sentences {
        let target = match &s.target_id {
            Some(t) => Some(
                *by_id
                    .get(t)
                    .ok_or_else(|| ConfigError::unresolved_target(&s.id, t))?,
            ),
            None => None,
        };
        targets.push(target);
    }

    Ok(NetworkIndex { by_id, targets })
}

/// Fresh opaque sentence id.
pub fn uid(prefix: &str) -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("{prefix}_{}", &hex[..12])
}

/// User input for a new sentence, before normalisation.
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceDraft {
    pub kind: SentenceKind,
    pub label: String,
    pub target_id: Option<String>,
    pub percent_target: f64,
    pub window: i64,
}

impl Default for SentenceDraft {
    fn default() -> Self {
        Self {
            kind: SentenceKind::LiarSelf,
            label: "New sentence".to_string(),
            target_id: None,
            percent_target: 0.7,
            window: 60,
        }
    }
}

impl SentenceDraft {
    /// Normalises the draft into a sentence with a fresh id.
    pub fn build(self) -> Sentence {
        let label = self.label.trim();
        let label = if label.is_empty() { "Untitled" } else { label };
        let mut sentence = Sentence::new(uid("s"), label, self.kind);
        if self.kind.needs_target() {
            sentence.target_id = self.target_id;
        }
        if self.kind.needs_percent() {
            sentence.percent_target = Some(self.percent_target.clamp(0.0, 1.0));
            sentence.window = Some(self.window.max(1) as f64);
        }
        sentence
    }
}

/// Ordered sentences; order is display order only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Network {
    sentences: Vec<Sentence>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks ids and targets; see [`validate_network`].
    pub fn validate(&self) -> Result<NetworkIndex> {
        validate_network(&self.sentences)
    }

    /// Appends `sentence` as is, without normalising it.
    pub fn push(&mut self, sentence: Sentence) {
        self.sentences.push(sentence);
    }

    /// Appends a sentence built from `draft` and returns it.
    pub fn add(&mut self, draft: SentenceDraft) -> &Sentence {
        self.sentences.push(draft.build());
        &self.sentences[self.sentences.len() - 1]
    }

    /// Removes the sentence with `id` and clears every target pointing at it.
    pub fn remove(&mut self, id: &str) -> Option<Sentence> {
        let pos = self.sentences.iter().position(|s| s.id == id)?;
        let removed = self.sentences.remove(pos);
        for s in &mut self.sentences {
            if s.target_id.as_deref() == Some(id) {
                s.target_id = None;
            }
        }
        tracing::debug!(id, label = %removed.label, "Removed sentence");
        Some(removed)
    }

    /// Looks a sentence up by id.
    pub fn get(&self, id: &str) -> Option<&Sentence> {
        self.sentences.iter().find(|s| s.id == id)
    }
}

impl Deref for Network {
    type Target = [Sentence];

    fn deref(&self) -> &[Sentence] {
        &self.sentences
    }
}

impl From<Vec<Sentence>> for Network {
    fn from(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }
}
