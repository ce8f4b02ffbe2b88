//! Plain-text renderings for the non-interactive modes.

use std::fmt::Write;

use morphogen_core::describe::{badge, render_sentence_text};
use morphogen_core::ensemble::Ensemble;
use morphogen_data::{Sentence, SimulationParams, SimulationResult};

fn bits(state: &[bool]) -> String {
    state.iter().map(|&b| if b { '█' } else { '·' }).collect()
}

/// Readings, a timeline of the first ticks, the cycle line and the stats table.
pub fn render_report(
    sentences: &[Sentence],
    params: &SimulationParams,
    result: &SimulationResult,
    fingerprint: &str,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "steps={} burn_in={} init={} seed={} noise={}",
        params.steps,
        params.burn_in,
        params.init_mode.as_str(),
        params.seed,
        params.noise_flip_prob
    );
    let _ = writeln!(out, "run {}", &fingerprint[..fingerprint.len().min(16)]);
    out.push('\n');

    for s in sentences {
        let _ = writeln!(
            out,
            "[{:>4}] {:<16} {}",
            badge(s.kind),
            s.label,
            render_sentence_text(s, sentences)
        );
    }
    out.push('\n');

    let shown = result.history.len().min(64);
    for (i, s) in sentences.iter().enumerate() {
        let row: Vec<bool> = result.history[..shown].iter().map(|t| t[i]).collect();
        let _ = writeln!(out, "{:<16} {}", s.label, bits(&row));
    }
    if result.history.len() > shown {
        let _ = writeln!(out, "({} more ticks)", result.history.len() - shown);
    }
    out.push('\n');

    let _ = writeln!(out, "{}", result.cycle.summary());
    out.push('\n');

    let _ = writeln!(
        out,
        "{:<16} {:>6} {:>6} {:>6} {:>6}",
        "sentence", "kind", "mean", "flip", "ent"
    );
    for stat in &result.stats {
        let _ = writeln!(
            out,
            "{:<16} {:>6} {:>6.3} {:>6.3} {:>6.3}",
            stat.label,
            badge(stat.kind),
            stat.mean,
            stat.flip_rate,
            stat.entropy_proxy
        );
    }
    out
}

/// Text table of cross-seed means per sentence.
pub fn render_ensemble(sentences: &[Sentence], ensemble: &Ensemble) -> String {
    let summary = &ensemble.summary;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} runs, cycle found in {:.1}%",
        summary.runs,
        summary.cycle_fraction * 100.0
    );
    let periods: Vec<String> = summary.periods.iter().map(|p| p.to_string()).collect();
    let _ = writeln!(out, "periods: {}", periods.join(", "));
    for (s, mean) in sentences.iter().zip(&summary.mean_of_means) {
        let _ = writeln!(out, "{:<16} {:.3}", s.label, mean);
    }
    out
}
