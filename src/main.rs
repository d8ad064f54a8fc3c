use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use pendulum::config::{ChainConfig, Scenario};
use pendulum::sim::{Simulator, TrajectoryWriter};

/// Simulate a multi-bead pendulum and stream its trajectory as CSV.
#[derive(Parser, Debug)]
#[command(name = "pendulum")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Write the trajectory to this file instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON scenario file describing the chain and run settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Built-in chain used when no scenario file is given
    #[arg(long, value_enum, default_value_t = Preset::Triple)]
    preset: Preset,

    /// Displayed frames per unit of simulated time
    #[arg(long)]
    fps: Option<u32>,

    /// Integrator sub-steps per displayed frame
    #[arg(long)]
    sub_steps: Option<u32>,

    /// Simulated time to cover
    #[arg(long)]
    duration: Option<f64>,

    /// Signed vertical acceleration (negative pulls down)
    #[arg(long, allow_negative_numbers = true)]
    gravity: Option<f64>,

    /// Fixed number of decimal digits in the output
    #[arg(long)]
    precision: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Preset {
    /// Three beads, the first rod horizontal and the others pointing up
    Triple,
    /// One unit bead on a unit rod, released from horizontal
    Single,
}

impl Preset {
    fn chain(self) -> ChainConfig {
        match self {
            Preset::Triple => ChainConfig::triple(),
            Preset::Single => ChainConfig::single(1.0, 1.0, std::f64::consts::FRAC_PI_2),
        }
    }
}

fn resolve_scenario(cli: &Cli) -> anyhow::Result<Scenario> {
    let mut scenario = match &cli.config {
        Some(path) => Scenario::load(path)
            .with_context(|| format!("failed to load scenario {}", path.display()))?,
        None => Scenario::new(cli.preset.chain(), Default::default()),
    };

    let sim = &mut scenario.simulation;
    if let Some(fps) = cli.fps {
        sim.fps = fps;
    }
    if let Some(sub_steps) = cli.sub_steps {
        sim.sub_steps = sub_steps;
    }
    if let Some(duration) = cli.duration {
        sim.duration = duration;
    }
    if let Some(gravity) = cli.gravity {
        sim.gravity = gravity;
    }

    scenario.validate()?;
    Ok(scenario)
}

fn open_output(cli: &Cli) -> anyhow::Result<Box<dyn Write>> {
    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let scenario = resolve_scenario(&cli)?;
    let out = open_output(&cli)?;

    let mut writer = TrajectoryWriter::new(out).with_precision(cli.precision);
    let mut simulator = Simulator::new(&scenario.chain, scenario.simulation);
    simulator.run(&mut writer)?;

    Ok(())
}
