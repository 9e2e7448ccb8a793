//! Force / acceleration contributors for the n-body engine
//!
//! Defines the acceleration trait and the direct all-pairs Newtonian
//! gravity term, evaluated against the start-of-step snapshot with a
//! data-parallel fan-out over particle index

use rayon::prelude::*;

use crate::simulation::states::{NVec3, Snapshot, System};

/// Collection of acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per particle
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl Acceleration + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all particles in `sys`
    /// - `snap` is the start-of-step copy of (mass, position); terms read
    ///   old state only through it
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, snap: &Snapshot, sys: &System, out: &mut [NVec3]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(snap, sys, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each particle,
/// reading positions and neighbour masses only from the snapshot and
/// writing only their own slot
pub trait Acceleration {
    fn acceleration(&self, snap: &Snapshot, sys: &System, out: &mut [NVec3]);
}

/// Direct n^2 Newtonian gravity with a floor on the pair separation
///
/// The separation entering the force law is clamped to `min_dist`, so
/// coincident or nearly coincident particles never produce a singular
/// force. Self-interaction (j = i) is skipped outright rather than left to
/// the clamp.
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub min_dist: f64, // softening floor on pair separation
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, snap: &Snapshot, sys: &System, out: &mut [NVec3]) {
        let n = sys.particles.len();
        if n == 0 { // no particles, return
            return;
        }

        // One task per particle i, read-old / write-own: every read goes to
        // the immutable snapshot, every write goes to out[i] only, so the
        // fan-out needs no synchronization between particles.
        out.par_iter_mut().enumerate().for_each(|(i, out_i)| {
            // current mass of i; neighbour masses come from the snapshot
            let mi = sys.particles[i].m;
            let xi = snap.position[i];

            // local running sum of accelerations on i
            let mut acc = NVec3::zeros();

            for j in 0..n {
                if j == i {
                    continue; // no self-interaction
                }

                // displacement from i to j at the start of the step
                let r = snap.position[j] - xi;

                // separation, clamped from below
                let d = r.norm().max(self.min_dist);

                // inverse-square force magnitude
                let f = self.G * mi * snap.mass[j] / (d * d);

                // acceleration on i due to the force f, along r
                acc += (f / mi) * (r / d);
            }

            *out_i += acc;
        });
    }
}
