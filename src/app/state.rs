use std::time::Instant;

use morphogen_core::config::{fingerprint_run, AppConfig};
use morphogen_core::describe::SENTENCE_TEMPLATES;
use morphogen_core::presets::sentences_for_preset;
use morphogen_core::{simulate, Metrics, Network, SentenceDraft};
use morphogen_data::{PresetId, SimulationParams, SimulationResult};

use super::playback::Playback;

/// Interactive playground state: the current inputs and the latest results.
///
/// Results are recomputed from scratch whenever an input changes.
pub struct App {
    pub running: bool,
    pub config: AppConfig,
    pub preset: PresetId,
    pub network: Network,
    pub result: SimulationResult,
    pub playback: Playback,
    pub fingerprint: String,
    /// Configuration error of the current network, shown instead of results.
    pub error: Option<String>,
    pub metrics: Metrics,
}

impl App {
    /// Builds the playground from `config` and runs it once.
    pub fn new(config: AppConfig) -> Self {
        let preset = config.network.preset;
        let network = Network::from(config.network.resolve());
        let mut app = Self {
            running: true,
            config,
            preset,
            network,
            result: SimulationResult::default(),
            playback: Playback::default(),
            fingerprint: String::new(),
            error: None,
            metrics: Metrics::new(),
        };
        app.rerun();
        app
    }

    pub fn params(&self) -> &SimulationParams {
        &self.config.simulation
    }

    /// Re-simulates the current network and rewinds playback.
    pub fn rerun(&mut self) {
        let started = Instant::now();
        match simulate(&self.network, &self.config.simulation) {
            Ok(result) => {
                self.metrics.record_run(started.elapsed(), &result);
                self.result = result;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Network rejected");
                self.result = SimulationResult::default();
                self.error = Some(e.to_string());
            }
        }
        self.fingerprint = fingerprint_run(&self.network, &self.config.simulation);
        self.playback = Playback::new(self.result.max_step());
    }

    /// Loads `preset`; `Custom` keeps the current sentences.
    pub fn select_preset(&mut self, preset: PresetId) {
        self.preset = preset;
        if preset != PresetId::Custom {
            self.network = Network::from(sentences_for_preset(preset));
        }
        self.rerun();
    }

    pub fn next_preset(&mut self) {
        self.select_preset(self.preset.next());
    }

    /// Replaces the run parameters and re-simulates.
    pub fn set_params(&mut self, params: SimulationParams) {
        self.config.simulation = params;
        self.rerun();
    }

    /// Applies an edit to the network; any edit makes the network custom.
    pub fn edit_network(&mut self, edit: impl FnOnce(&mut Network)) {
        edit(&mut self.network);
        self.preset = PresetId::Custom;
        self.rerun();
    }

    /// Appends the next "add sentence" template, cycling by network size.
    /// Targeted kinds point at the first sentence.
    pub fn add_template_sentence(&mut self) {
        let template = SENTENCE_TEMPLATES[self.network.len() % SENTENCE_TEMPLATES.len()];
        let target_id = if template.kind.needs_target() {
            self.network.first().map(|s| s.id.clone())
        } else {
            None
        };
        self.edit_network(|network| {
            network.add(SentenceDraft {
                kind: template.kind,
                label: template.label.to_string(),
                target_id,
                ..Default::default()
            });
        });
    }

    /// Drops the newest sentence; targets that named it are cleared.
    pub fn remove_last_sentence(&mut self) {
        let Some(id) = self.network.last().map(|s| s.id.clone()) else {
            return;
        };
        self.edit_network(|network| {
            network.remove(&id);
        });
    }

    /// Default parameters and the basic preset.
    pub fn reset(&mut self) {
        self.config.simulation = SimulationParams::default();
        self.select_preset(PresetId::Basic);
    }
}
