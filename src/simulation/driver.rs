//! Orchestrate one full simulation run
//!
//! Builds the scenario, reports t = 0 diagnostics, advances the system one
//! unit step at a time with a centre-of-mass report after every step, and
//! finishes with the wall-clock time and a higher-precision final centre of
//! mass. Reporting happens only at step boundaries, outside the parallel
//! region.

use std::time::{Duration, Instant};

use log::debug;

use crate::configuration::config::ScenarioConfig;
use crate::error::Result;
use crate::simulation::diagnostics::{centre_of_mass, total_mass};
use crate::simulation::integrator::{euler_integrator, StepScratch};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec3;

/// Final state of a completed run, for callers that want more than the
/// console report.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub particles: usize,
    pub timesteps: u32,
    pub centre_of_mass: NVec3,
    pub elapsed: Duration,
}

/// Run a complete simulation from `cfg`: initialize once, integrate
/// `timesteps` unit steps, report diagnostics per step, and return the
/// final summary.
///
/// Any failure aborts the whole run; nothing is retried. An unfinished run
/// leaves no observable state behind.
pub fn run_simulation(cfg: ScenarioConfig) -> Result<RunSummary> {
    let start = Instant::now();
    let count = cfg.cloud.count;

    println!("Initializing for {count} particles in x,y,z space...");
    let mut scenario = Scenario::build_scenario(cfg)?;
    println!("  INIT COMPLETE");

    // Mass never changes during a run, so the diagnostics denominator is
    // computed once up front and reused for every report.
    let mass_sum = total_mass(&scenario.system);
    let com = centre_of_mass(&scenario.system, mass_sum)?;
    println!(
        "At t=0, centre of mass = ({:.3},{:.3},{:.3})",
        com.x, com.y, com.z
    );

    let timesteps = scenario.parameters.timesteps;
    println!("Now to integrate for {timesteps} timesteps");

    let mut scratch = StepScratch::with_capacity(scenario.system.len());

    // time = 0 was the initial conditions
    for step in 1..=timesteps {
        let step_start = Instant::now();
        euler_integrator(&mut scenario.system, &scenario.forces, &mut scratch);
        debug!("step {step} integrated in {:?}", step_start.elapsed());

        let com = centre_of_mass(&scenario.system, mass_sum)?;
        println!(
            "End of timestep {step}, centre of mass = ({:.3},{:.3},{:.3})",
            com.x, com.y, com.z
        );
    }

    let elapsed = start.elapsed();
    println!(
        "Time to init+solve {count} particles for {timesteps} timesteps is {:.6} seconds",
        elapsed.as_secs_f64()
    );
    let com = centre_of_mass(&scenario.system, mass_sum)?;
    println!("Centre of mass = ({:.5},{:.5},{:.5})", com.x, com.y, com.z);

    Ok(RunSummary {
        particles: count,
        timesteps,
        centre_of_mass: com,
        elapsed,
    })
}
