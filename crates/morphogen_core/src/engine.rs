//! Simulation driver.
//!
//! `Simulation` owns one run: its validated rules, its own PRNG and its
//! history. `simulate` is the batch path and is built from the same
//! `step`, so stepping one tick per timer callback yields exactly the
//! batch history.

use morphogen_data::{
    CycleInfo, InitMode, Sentence, SentenceStats, SimulationParams, SimulationResult,
};

use crate::analysis::{compute_stats, detect_cycle};
use crate::error::Result;
use crate::history::History;
use crate::network::validate_network;
use crate::rng::Mulberry32;
use crate::step::{self, Rule};

/// Upper bound on ticks reserved up front; longer runs grow on demand.
const PREALLOCATED_TICKS: usize = 4096;

/// Tick-0 state vector for `n` sentences.
///
/// Only `InitMode::Random` draws from `rng` (one draw per sentence).
pub fn initial_state(mode: InitMode, n: usize, rng: &mut Mulberry32) -> Vec<bool> {
    match mode {
        InitMode::AllFalse => vec![false; n],
        InitMode::AllTrue => vec![true; n],
        InitMode::Checker => (0..n).map(|i| i % 2 == 0).collect(),
        InitMode::Random => (0..n).map(|_| rng.chance(0.5)).collect(),
    }
}

pub struct Simulation {
    sentences: Vec<Sentence>,
    rules: Vec<Rule>,
    params: SimulationParams,
    rng: Mulberry32,
    history: History,
}

impl Simulation {
    /// Validates the network and commits tick 0.
    ///
    /// An empty network or `steps == 0` yields an empty history.
    pub fn new(sentences: &[Sentence], params: SimulationParams) -> Result<Self> {
        let index = validate_network(sentences)?;
        let rules = Rule::compile(sentences, &index);
        let mut rng = Mulberry32::new(params.seed);
        let mut history = History::with_capacity(params.steps.min(PREALLOCATED_TICKS));

        if !sentences.is_empty() && params.steps > 0 {
            history.push(initial_state(params.init_mode, sentences.len(), &mut rng));
        }

        tracing::debug!(
            sentences = sentences.len(),
            steps = params.steps,
            seed = params.seed,
            init_mode = params.init_mode.as_str(),
            "Simulation started"
        );

        Ok(Self {
            sentences: sentences.to_vec(),
            rules,
            params,
            rng,
            history,
        })
    }

    /// Commits one tick. Returns `false` once `steps` ticks exist.
    pub fn step(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        let next = step::step(
            &self.rules,
            &self.history,
            self.params.noise_flip_prob,
            &mut self.rng,
        );
        tracing::trace!(tick = self.history.len(), "Tick committed");
        self.history.push(next);
        true
    }

    /// True once `steps` ticks are committed; degenerate runs start complete.
    pub fn is_complete(&self) -> bool {
        self.history.is_empty() || self.history.len() >= self.params.steps
    }

    /// Steps until complete.
    pub fn run_to_end(&mut self) {
        while self.step() {}
    }

    /// Number of committed ticks.
    pub fn tick(&self) -> usize {
        self.history.len()
    }

    /// Ticks committed so far.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The network this run was started with.
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    /// Cycle detection over the ticks committed so far.
    pub fn cycle(&self) -> CycleInfo {
        detect_cycle(self.history.as_slice())
    }

    /// Per-sentence metrics over the post-burn-in ticks committed so far.
    pub fn stats(&self) -> Vec<SentenceStats> {
        let burn_in = self.params.effective_burn_in(self.history.len());
        compute_stats(&self.sentences, self.history.as_slice(), burn_in)
    }

    /// Analyses the committed history and hands it over.
    pub fn finish(self) -> SimulationResult {
        let cycle = self.cycle();
        let stats = self.stats();
        tracing::debug!(
            ticks = self.history.len(),
            cycle_found = cycle.found,
            period = cycle.period,
            "Simulation finished"
        );
        SimulationResult {
            history: self.history.into_inner(),
            cycle,
            stats,
        }
    }
}

/// Runs all `params.steps` ticks and analyses the result.
pub fn simulate(sentences: &[Sentence], params: &SimulationParams) -> Result<SimulationResult> {
    let mut sim = Simulation::new(sentences, params.clone())?;
    sim.run_to_end();
    Ok(sim.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use morphogen_data::SentenceKind;

    fn params(steps: usize, init_mode: InitMode) -> SimulationParams {
        SimulationParams {
            steps,
            burn_in: 0,
            init_mode,
            seed: 42,
            noise_flip_prob: 0.0,
        }
    }

    #[test]
    fn test_liar_oscillates() {
        let liar = vec![Sentence::new("l", "Liar", SentenceKind::LiarSelf)];
        let result = simulate(&liar, &params(6, InitMode::AllFalse)).unwrap();
        assert_eq!(
            result.history,
            vec![
                vec![false],
                vec![true],
                vec![false],
                vec![true],
                vec![false],
                vec![true]
            ]
        );
        assert_eq!(
            result.cycle,
            CycleInfo {
                found: true,
                start_index: 0,
                period: 2
            }
        );
    }

    #[test]
    fn test_empty_network_is_degenerate() {
        let result = simulate(&[], &params(10, InitMode::Random)).unwrap();
        assert!(result.history.is_empty());
        assert_eq!(result.cycle, CycleInfo::NONE);
        assert!(result.stats.is_empty());
    }

    #[test]
    fn test_zero_steps_is_degenerate() {
        let liar = vec![Sentence::new("l", "Liar", SentenceKind::LiarSelf)];
        let result = simulate(&liar, &params(0, InitMode::AllTrue)).unwrap();
        assert!(result.history.is_empty());
        assert_eq!(result.cycle, CycleInfo::NONE);
        assert_eq!(result.stats.len(), 1);
        assert_eq!(result.stats[0].mean, 0.0);
    }

    #[test]
    fn test_invalid_network_is_rejected_before_running() {
        let broken = vec![Sentence::new("a", "A", SentenceKind::AssertTrue).with_target("nope")];
        assert!(matches!(
            Simulation::new(&broken, params(5, InitMode::AllFalse)),
            Err(ConfigError::UnresolvedTarget { .. })
        ));
    }

    #[test]
    fn test_initial_states() {
        let mut rng = Mulberry32::new(42);
        assert_eq!(
            initial_state(InitMode::Checker, 5, &mut rng),
            vec![true, false, true, false, true]
        );
        assert_eq!(initial_state(InitMode::AllTrue, 2, &mut rng), vec![true, true]);
        // untouched so far: first draw of seed 42 is ~0.601
        let random = initial_state(InitMode::Random, 1, &mut rng);
        assert_eq!(random, vec![false]);
    }

    #[test]
    fn test_incremental_matches_batch() {
        let sentences = vec![
            Sentence::new("a", "A", SentenceKind::LiarSelf),
            Sentence::new("b", "B", SentenceKind::IffTarget).with_target("a"),
            Sentence::new("c", "C", SentenceKind::PercentSelfController).with_percent(0.3, 7),
        ];
        let p = SimulationParams {
            steps: 80,
            burn_in: 10,
            init_mode: InitMode::Random,
            seed: 1234,
            noise_flip_prob: 0.05,
        };
        let batch = simulate(&sentences, &p).unwrap();

        let mut sim = Simulation::new(&sentences, p).unwrap();
        let mut ticks = 1;
        while sim.step() {
            ticks += 1;
            assert_eq!(sim.history().as_slice(), &batch.history[..ticks]);
        }
        assert_eq!(ticks, 80);
        assert!(!sim.step());
        assert_eq!(sim.finish(), batch);
    }

    #[test]
    fn test_huge_horizon_steps_lazily() {
        let liar = vec![Sentence::new("l", "Liar", SentenceKind::LiarSelf)];
        let mut sim = Simulation::new(&liar, params(usize::MAX / 2, InitMode::AllFalse)).unwrap();
        for _ in 0..10 {
            assert!(sim.step());
        }
        assert_eq!(sim.tick(), 11);
        assert!(!sim.is_complete());
        assert_eq!(sim.history().last(), Some(&[false][..]));
    }
}
