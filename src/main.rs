use std::{fs, path::PathBuf, process::ExitCode};

use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use scenario_gen::{
    domain::{generate_scenario, FlatDirichlet, RaceProfile},
    params::{self, DEFAULT_OUTPUT},
    Result,
};

/// Generate randomized test inputs for the box-pushing planner and the race simulator
#[derive(Parser, Debug)]
#[command(name = "scenario-gen")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Place movable boxes, moving obstacles and static obstacles without overlaps
    Boxes(BoxesArgs),
    /// Draw terrain, car, driver and tyre profiles for a race level
    Race(RaceArgs),
}

#[derive(Args, Debug)]
struct BoxesArgs {
    /// MOVING_BOXES MOVING_OBSTACLES STATIC_OBSTACLES; defaults (10 7 12) unless all three are given
    counts: Vec<usize>,

    /// Output file
    #[arg(long, short, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Random seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Give up on an entity after this many rejected draws instead of retrying forever
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    max_attempts: Option<u64>,

    /// Robot half-extent in hundredths
    #[arg(long)]
    robot_length: Option<i32>,

    /// Moving obstacle half-width in hundredths (drawn from 5..7 if omitted)
    #[arg(long)]
    obstacle_width: Option<i32>,
}

#[derive(Args, Debug)]
struct RaceArgs {
    /// Race level, 1 to 4
    level: Option<String>,

    /// Output file
    file: Option<PathBuf>,

    /// Random seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Boxes(args) => boxes(args),
        Command::Race(args) => race(args),
    };

    exit_code(result)
}

fn exit_code(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    let seed = seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "seeded random number generator");
    ChaCha8Rng::seed_from_u64(seed)
}

fn boxes(args: BoxesArgs) -> Result<()> {
    let mut rng = seeded_rng(args.seed);
    let parameters = params::resolve_placement(
        &args.counts,
        args.robot_length,
        args.obstacle_width,
        args.max_attempts,
        &mut rng,
    )?;

    let scenario = generate_scenario(
        parameters.counts,
        &parameters.geometry,
        parameters.limits,
        &mut rng,
    )?;

    fs::write(&args.output, scenario.to_string())?;
    tracing::info!(output = %args.output.display(), "Test input generated");
    Ok(())
}

fn race(args: RaceArgs) -> Result<()> {
    let parameters = params::resolve_level(args.level.as_deref())?;
    let output = args.file.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let mut rng = seeded_rng(args.seed);
    let profile = RaceProfile::generate(&parameters, &FlatDirichlet, &mut rng);

    fs::write(&output, profile.to_string())?;
    tracing::info!(output = %output.display(), "Test input generated");
    Ok(())
}
