//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with the sampled cloud at t = 0)
//! - active force set (`AccelSet`)
//!
//! Initial conditions are drawn from a seeded RNG with a fixed per-particle
//! draw order, so a given seed always reproduces the same cloud.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::configuration::config::ScenarioConfig;
use crate::error::{Error, Result};
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, Particle, System};

// Sampling ranges for the initial cloud, all half-open
const MIN_POS: f64 = -50.0; // x and y lower bound; z starts at 0
const POS_SPAN: f64 = 100.0; // width of every position range
const MAX_VEL: f64 = 5.0; // velocity components in [-MAX_VEL, MAX_VEL)
const MIN_MASS: f64 = 0.1; // masses in [MIN_MASS, MIN_MASS + MASS_SPAN)
const MASS_SPAN: f64 = 10.0;

/// Fully-initialized runtime bundle for one simulation run
///
/// Contains the numerical parameters, the system state at t = 0, and the
/// set of active force laws, ready for the driver to integrate.
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    /// Validate `cfg`, sample the initial cloud, and register gravity.
    ///
    /// Errors:
    /// - `InvalidParam` for a zero particle count or unusable constants
    /// - `ResourceExhausted` if storage for the cloud cannot be reserved
    /// - `Init` if the sampler produces an unusable particle
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let p_cfg = cfg.parameters;

        // Zero particles would make the diagnostics divide by a zero total
        // mass, so the count is rejected before any work happens.
        if cfg.cloud.count == 0 {
            return Err(Error::InvalidParam("cloud.count must be > 0".into()));
        }
        if !p_cfg.G.is_finite() {
            return Err(Error::InvalidParam(format!(
                "G must be finite, got {}",
                p_cfg.G
            )));
        }
        if !(p_cfg.min_dist > 0.0) {
            return Err(Error::InvalidParam(format!(
                "min_dist must be > 0, got {}",
                p_cfg.min_dist
            )));
        }

        // Parameters (runtime) from ParametersConfig
        let parameters = Parameters {
            timesteps: p_cfg.timesteps,
            seed: p_cfg.seed,
            min_dist: p_cfg.min_dist,
            G: p_cfg.G,
        };

        // Initial system state: sampled cloud at t = 0
        let system = sample_cloud(cfg.cloud.count, parameters.seed)?;

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity {
            G: parameters.G,
            min_dist: parameters.min_dist,
        });

        Ok(Self {
            parameters,
            system,
            forces,
        })
    }
}

/// Sample `count` particles from a RNG seeded with `seed`.
///
/// The draw order is fixed and strictly sequential: for particle i, draw
/// x, then y, then z, then vx, then vy, then vz, then mass, in that exact
/// order, before advancing to particle i + 1. Reproducibility for a given
/// seed depends on this order; never parallelise or reorder the draws.
pub fn sample_cloud(count: usize, seed: u64) -> Result<System> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut particles: Vec<Particle> = Vec::new();
    particles
        .try_reserve_exact(count)
        .map_err(|e| Error::ResourceExhausted(format!("{count} particles: {e}")))?;

    for i in 0..count {
        let x = rng.gen_range(MIN_POS..MIN_POS + POS_SPAN);
        let y = rng.gen_range(MIN_POS..MIN_POS + POS_SPAN);
        let z = rng.gen_range(0.0..POS_SPAN);
        let vx = rng.gen_range(-MAX_VEL..MAX_VEL);
        let vy = rng.gen_range(-MAX_VEL..MAX_VEL);
        let vz = rng.gen_range(-MAX_VEL..MAX_VEL);
        let m = rng.gen_range(MIN_MASS..MIN_MASS + MASS_SPAN);

        let p = Particle {
            x: NVec3::new(x, y, z),
            v: NVec3::new(vx, vy, vz),
            m,
        };

        if !(p.m > 0.0)
            || !p.x.iter().all(|c| c.is_finite())
            || !p.v.iter().all(|c| c.is_finite())
        {
            return Err(Error::Init(format!("particle {i} sampled out of range")));
        }

        particles.push(p);
    }

    Ok(System {
        particles,
        t: 0.0,
    })
}
