use clap::Parser;
use morphogen_core::config::fingerprint_run;
use morphogen_core::presets::sentences_for_preset;
use morphogen_core::{simulate, Simulation};
use morphogen_data::{InitMode, PresetId, SimulationParams};

#[derive(Parser, Debug)]
#[command(author, version, about = "Checks that runs are reproducible", long_about = None)]
struct Args {
    /// Number of seeds per preset and init mode
    #[arg(short, long, default_value_t = 8)]
    seeds: u32,

    #[arg(long, default_value_t = 300)]
    steps: usize,

    /// Per-tick flip probability
    #[arg(long, default_value_t = 0.05)]
    noise: f64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    println!("Verifying Morphogen determinism...");

    let mut checked = 0usize;
    let mut failures = Vec::new();

    for preset in PresetId::ALL {
        let sentences = sentences_for_preset(preset);
        for init_mode in [
            InitMode::Random,
            InitMode::AllFalse,
            InitMode::AllTrue,
            InitMode::Checker,
        ] {
            for seed in 0..args.seeds {
                let params = SimulationParams {
                    steps: args.steps,
                    init_mode,
                    seed,
                    noise_flip_prob: args.noise,
                    ..Default::default()
                };

                // 1. Two batch runs
                let first = simulate(&sentences, &params)?;
                let second = simulate(&sentences, &params)?;

                // 2. Incremental run
                let mut sim = Simulation::new(&sentences, params.clone())?;
                sim.run_to_end();
                let stepped = sim.finish();

                checked += 1;
                if first != second || first != stepped {
                    let fingerprint = fingerprint_run(&sentences, &params);
                    failures.push(format!(
                        "{} / {} / seed {}: run {}",
                        preset.name(),
                        init_mode.as_str(),
                        seed,
                        &fingerprint[..16]
                    ));
                }
            }
        }
    }

    if failures.is_empty() {
        println!("\n✅ VERIFICATION SUCCESSFUL!");
        println!("{checked} runs reproduced exactly.");
        Ok(())
    } else {
        println!("\n❌ VERIFICATION FAILED!");
        for failure in &failures {
            println!("  {failure}");
        }
        anyhow::bail!("{} of {checked} runs diverged", failures.len())
    }
}
