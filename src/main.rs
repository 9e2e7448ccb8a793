use gravsim::{bench_gravity, bench_step, run_simulation};
use gravsim::{CloudConfig, ParametersConfig, ScenarioConfig};

use clap::Parser;

use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
struct Args {
    /// Run scenario YAML; when given it defines the whole run
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Number of particles to sample
    #[arg(short = 'n', long, default_value_t = 20_000)]
    particles: usize,

    /// Number of unit timesteps to integrate
    #[arg(short = 't', long, default_value_t = 10)]
    timesteps: u32,

    /// Seed for the initial-condition sampler
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Gravitational constant
    #[arg(long, default_value_t = 0.001)]
    gravconst: f64,

    /// Softening floor on pair separation
    #[arg(long, default_value_t = 0.01)]
    min_dist: f64,

    /// Run the force/step scaling benchmarks instead of a simulation
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> anyhow::Result<ScenarioConfig> {
    match &args.file {
        Some(path) => Ok(ScenarioConfig::from_yaml_file(path)?),
        None => Ok(ScenarioConfig {
            parameters: ParametersConfig {
                timesteps: args.timesteps,
                seed: args.seed,
                min_dist: args.min_dist,
                G: args.gravconst,
            },
            cloud: CloudConfig {
                count: args.particles,
            },
        }),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_step();
        return ExitCode::SUCCESS;
    }

    let cfg = match load_scenario(&args) {
        Ok(cfg) => cfg,
        Err(e) => {
            println!(" ERROR loading scenario: {e:#} - aborting");
            return ExitCode::FAILURE;
        }
    };

    match run_simulation(cfg) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            println!(" ERROR {e} - aborting");
            ExitCode::from(e.exit_code())
        }
    }
}
