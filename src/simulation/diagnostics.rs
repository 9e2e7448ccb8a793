//! Summary metrics over the particle population
//!
//! `total_mass` and `centre_of_mass` are read-only probes for checking a
//! run; they never feed back into the dynamics.

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::simulation::states::{NVec3, System};

/// Sum of all particle masses.
///
/// Commutative, associative reduction; a parallel decomposition only
/// reorders the floating-point sums within reassociation tolerance.
pub fn total_mass(sys: &System) -> f64 {
    sys.particles.par_iter().map(|p| p.m).sum()
}

/// Mass-weighted average position, `sum(m_i * x_i) / total_mass` per axis.
///
/// Requires `total_mass > 0` and returns `Error::InvalidParam` otherwise
/// (an empty system has zero total mass and lands there too).
pub fn centre_of_mass(sys: &System, total_mass: f64) -> Result<NVec3> {
    if !(total_mass > 0.0) {
        return Err(Error::InvalidParam(format!(
            "centre of mass needs a positive total mass, got {total_mass}"
        )));
    }

    let weighted: NVec3 = sys
        .particles
        .par_iter()
        .map(|p| p.m * p.x)
        .reduce(NVec3::zeros, |a, b| a + b);

    Ok(weighted / total_mass)
}
