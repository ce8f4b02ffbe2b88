pub mod macros;

use morphogen_core::{simulate, Simulation};
use morphogen_data::{InitMode, Sentence, SentenceKind, SimulationParams, SimulationResult};

/// Builds a network with readable ids (`"a"`, `"b"`, ...) and run parameters.
#[allow(dead_code)]
pub struct NetworkBuilder {
    sentences: Vec<Sentence>,
    params: SimulationParams,
}

#[allow(dead_code)]
impl NetworkBuilder {
    pub fn new() -> Self {
        Self {
            sentences: Vec::new(),
            params: SimulationParams::default(),
        }
    }

    pub fn sentence(mut self, id: &str, kind: SentenceKind) -> Self {
        self.sentences
            .push(Sentence::new(id, id.to_uppercase(), kind));
        self
    }

    pub fn targeting(mut self, id: &str, kind: SentenceKind, target: &str) -> Self {
        self.sentences
            .push(Sentence::new(id, id.to_uppercase(), kind).with_target(target));
        self
    }

    pub fn controller(mut self, id: &str, percent_target: f64, window: i64) -> Self {
        self.sentences.push(
            Sentence::new(id, id.to_uppercase(), SentenceKind::PercentSelfController)
                .with_percent(percent_target, window),
        );
        self
    }

    pub fn with_sentences(mut self, sentences: Vec<Sentence>) -> Self {
        self.sentences.extend(sentences);
        self
    }

    pub fn steps(mut self, steps: usize) -> Self {
        self.params.steps = steps;
        self
    }

    pub fn burn_in(mut self, burn_in: usize) -> Self {
        self.params.burn_in = burn_in;
        self
    }

    pub fn init(mut self, init_mode: InitMode) -> Self {
        self.params.init_mode = init_mode;
        self
    }

    pub fn seed(mut self, seed: u32) -> Self {
        self.params.seed = seed;
        self
    }

    pub fn noise(mut self, noise_flip_prob: f64) -> Self {
        self.params.noise_flip_prob = noise_flip_prob;
        self
    }

    pub fn build(self) -> (Vec<Sentence>, SimulationParams) {
        (self.sentences, self.params)
    }

    pub fn run(self) -> SimulationResult {
        simulate(&self.sentences, &self.params).expect("Failed to simulate network in test builder")
    }

    pub fn run_incremental(self) -> SimulationResult {
        let mut sim = Simulation::new(&self.sentences, self.params)
            .expect("Failed to start simulation in test builder");
        while sim.step() {}
        sim.finish()
    }
}

/// Values of sentence `i` over the whole history.
#[allow(dead_code)]
pub fn column(result: &SimulationResult, i: usize) -> Vec<bool> {
    result.history.iter().map(|state| state[i]).collect()
}
