use anyhow::{Context, Result};
use clap::Parser;
use morphogen_core::attractor::{generate_escape_time, simulate_attractor};
use morphogen_core::config::{fingerprint_run, AppConfig};
use morphogen_core::ensemble::run_ensemble;
use morphogen_core::{init_logging, simulate};
use morphogen_data::{AttractorKind, DualistMode, InitMode, PresetId};
use morphogen_lib::app::App;
use morphogen_lib::ui::{render_ensemble, render_report};
use morphogen_tui::Tui;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// What to do with the configured network
    #[arg(short, long, value_enum, default_value = "watch")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "morphogen.toml")]
    config: String,

    /// Starter network (basic, mutual, ring3, ring5, custom)
    #[arg(short, long)]
    preset: Option<String>,

    #[arg(long)]
    seed: Option<u32>,

    #[arg(long)]
    steps: Option<usize>,

    #[arg(long)]
    burn_in: Option<usize>,

    /// Initial state (random, all_false, all_true, checker)
    #[arg(long)]
    init: Option<String>,

    /// Per-tick flip probability
    #[arg(long)]
    noise: Option<f64>,

    /// Number of consecutive seeds for ensemble mode
    #[arg(long, default_value_t = 16)]
    seeds: u32,

    /// Grid resolution for escape mode
    #[arg(long, default_value_t = 150)]
    resolution: usize,

    #[arg(long, default_value_t = 100)]
    max_iterations: usize,

    #[arg(long, default_value_t = 1.03)]
    escape_distance: f64,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    Watch,
    Report,
    Json,
    Attractor,
    Escape,
    Ensemble,
    /// Print the effective configuration as TOML
    Config,
}

fn apply_overrides(config: &mut AppConfig, args: &Args) -> Result<()> {
    if let Some(name) = &args.preset {
        config.network.preset =
            PresetId::from_str(name).with_context(|| format!("Unknown preset: {name}"))?;
    }
    if let Some(name) = &args.init {
        config.simulation.init_mode =
            InitMode::from_str(name).with_context(|| format!("Unknown init mode: {name}"))?;
    }
    let sim = &mut config.simulation;
    if let Some(seed) = args.seed {
        sim.seed = seed;
    }
    if let Some(steps) = args.steps {
        sim.steps = steps;
    }
    if let Some(burn_in) = args.burn_in {
        sim.burn_in = burn_in;
    }
    if let Some(noise) = args.noise {
        sim.noise_flip_prob = noise;
    }
    config.validate()
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load(&args.config)?;
    apply_overrides(&mut config, &args)?;
    init_logging(&config.logging.level);

    let sentences = config.network.resolve();
    tracing::debug!(
        preset = config.network.preset.name(),
        sentences = sentences.len(),
        "Resolved network"
    );

    match args.mode {
        Mode::Watch => {
            let mut tui = Tui::enter()?;

            let mut app = App::new(config);
            let res = app.run(&mut tui);

            tui.leave()?;

            if let Err(e) = res {
                eprintln!("Application error: {e}");
            }
        }
        Mode::Report => {
            let result = simulate(&sentences, &config.simulation)?;
            let fingerprint = fingerprint_run(&sentences, &config.simulation);
            print!(
                "{}",
                render_report(&sentences, &config.simulation, &result, &fingerprint)
            );
        }
        Mode::Json => {
            let result = simulate(&sentences, &config.simulation)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Mode::Attractor => {
            let result = simulate_attractor(&config.attractor);
            println!("{}", serde_json::to_string(&result)?);
        }
        Mode::Escape => {
            let mode = match config.attractor.kind {
                AttractorKind::DualistSequential => DualistMode::Sequential,
                _ => DualistMode::Simultaneous,
            };
            let points = generate_escape_time(
                args.resolution,
                args.max_iterations,
                args.escape_distance,
                mode,
            );
            println!("{}", serde_json::to_string(&points)?);
        }
        Mode::Ensemble => {
            let base = config.simulation.seed;
            let seeds: Vec<u32> = (0..args.seeds).map(|i| base.wrapping_add(i)).collect();
            let ensemble = run_ensemble(&sentences, &config.simulation, &seeds)?;
            print!("{}", render_ensemble(&sentences, &ensemble));
        }
        Mode::Config => {
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
