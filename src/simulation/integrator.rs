//! Fixed-step time integrator for the N-body system
//!
//! One call advances the whole population by a single unit time step:
//! snapshot capture, force accumulation, then the in-place velocity and
//! position commit, driven by `AccelSet` and the reusable `StepScratch`

use rayon::prelude::*;

use super::forces::AccelSet;
use super::states::{NVec3, Snapshot, System};

/// Reusable per-step working storage: the start-of-step snapshot and the
/// per-particle acceleration buffer. Reused across steps, so the stepping
/// loop performs no allocation once the buffers are warm.
#[derive(Debug, Default)]
pub struct StepScratch {
    pub snapshot: Snapshot,
    pub accel: Vec<NVec3>,
}

impl StepScratch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            snapshot: Snapshot::with_capacity(n),
            accel: Vec::with_capacity(n),
        }
    }
}

/// Advance the system by one unit time step.
///
/// Per particle i: accumulate the net acceleration from every j != i using
/// the snapshot, then update velocity in place (`v += a`, accelerations act
/// as impulse per unit time, there is no separate dt factor), then update
/// position from the newly updated velocity and the old position
/// (`x = old_x + v`). Mass is untouched. Mutates `sys` in place and bumps
/// `sys.t` by one.
pub fn euler_integrator(sys: &mut System, forces: &AccelSet, scratch: &mut StepScratch) {
    let n = sys.particles.len();
    if n == 0 { // no particles, return
        return;
    }

    // Copy (mass, position) of all particles before anything is updated.
    // Every force read below goes through this snapshot, never through a
    // neighbour's in-progress update.
    scratch.snapshot.capture(sys);

    // accel[i] receives the net acceleration on particle i
    scratch.accel.resize(n, NVec3::zeros());
    forces.accumulate_accels(&scratch.snapshot, sys, &mut scratch.accel);

    // Commit phase, one task per particle:
    //   v_i = v_i + a_i
    //   x_i = old_x_i + v_i
    let snap = &scratch.snapshot;
    let accel = &scratch.accel;
    sys.particles.par_iter_mut().enumerate().for_each(|(i, p)| {
        p.v += accel[i];
        p.x = snap.position[i] + p.v;
    });

    // one step has implicit unit duration
    sys.t += 1.0;
}
