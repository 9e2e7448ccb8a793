//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - number of unit time steps to integrate,
//! - softening floor and gravitational constant (`min_dist`, `G`),
//! - random seed for the initial-condition sampler

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub timesteps: u32, // number of unit steps
    pub seed: u64, // deterministic seed
    pub min_dist: f64, // softening floor on pair separation
    pub G: f64, // gravitational constant
}
