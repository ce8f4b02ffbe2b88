//! Independent runs of one network across many seeds.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use morphogen_data::{Sentence, SimulationParams, SimulationResult};
use serde::{Deserialize, Serialize};

use crate::engine::simulate;
use crate::error::Result;
use crate::network::validate_network;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnsembleMember {
    pub seed: u32,
    pub result: SimulationResult,
}

/// Aggregate over all members of an ensemble.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnsembleSummary {
    pub runs: usize,
    /// Per-sentence average of the members' post-burn-in means.
    pub mean_of_means: Vec<f64>,
    /// Fraction of runs in which a cycle was found.
    pub cycle_fraction: f64,
    /// Distinct periods found, ascending.
    pub periods: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ensemble {
    pub members: Vec<EnsembleMember>,
    pub summary: EnsembleSummary,
}

/// Runs the network once per seed; members keep the order of `seeds`.
///
/// Each run owns its PRNG and history, so the result is identical whether
/// the runs execute in parallel or not.
pub fn run_ensemble(
    sentences: &[Sentence],
    params: &SimulationParams,
    seeds: &[u32],
) -> Result<Ensemble> {
    validate_network(sentences)?;

    let run = |&seed: &u32| -> Result<EnsembleMember> {
        let params = SimulationParams {
            seed,
            ..params.clone()
        };
        Ok(EnsembleMember {
            seed,
            result: simulate(sentences, &params)?,
        })
    };

    #[cfg(feature = "parallel")]
    let members = seeds.par_iter().map(run).collect::<Result<Vec<_>>>()?;
    #[cfg(not(feature = "parallel"))]
    let members = seeds.iter().map(run).collect::<Result<Vec<_>>>()?;

    let summary = summarize(sentences.len(), &members);
    tracing::info!(
        runs = summary.runs,
        cycle_fraction = summary.cycle_fraction,
        "Ensemble finished"
    );
    Ok(Ensemble { members, summary })
}

/// Folds per-seed members into cross-seed means and cycle counts.
pub fn summarize(sentence_count: usize, members: &[EnsembleMember]) -> EnsembleSummary {
    if members.is_empty() {
        return EnsembleSummary {
            mean_of_means: vec![0.0; sentence_count],
            ..Default::default()
        };
    }

    let runs = members.len();
    let mut mean_of_means = vec![0.0; sentence_count];
    let mut cycles = 0;
    let mut periods = Vec::new();

    for member in members {
        for (acc, stat) in mean_of_means.iter_mut().zip(&member.result.stats) {
            *acc += stat.mean;
        }
        if member.result.cycle.found {
            cycles += 1;
            periods.push(member.result.cycle.period);
        }
    }
    for acc in &mut mean_of_means {
        *acc /= runs as f64;
    }
    periods.sort_unstable();
    periods.dedup();

    EnsembleSummary {
        runs,
        mean_of_means,
        cycle_fraction: cycles as f64 / runs as f64,
        periods,
    }
}
