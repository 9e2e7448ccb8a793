use std::time::Instant;

use crate::simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
use crate::simulation::integrator::{euler_integrator, StepScratch};
use crate::simulation::states::{NVec3, Particle, Snapshot, System};

/// Helper to build a deterministic System of size `n`, no rand needed
fn make_system(n: usize) -> System {
    let mut particles = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let x = NVec3::new(
            (i_f * 0.37).sin() * 5.0,
            (i_f * 0.13).cos() * 5.0,
            (i_f * 0.07).sin() * 5.0,
        );

        particles.push(Particle {
            x,
            v: NVec3::zeros(),
            m: 1.0,
        });
    }

    System { particles, t: 0.0 }
}

fn make_gravity() -> NewtonianGravity {
    NewtonianGravity {
        G: 0.001,
        min_dist: 0.01,
    }
}

/// Benchmark one direct force evaluation for a range of n
pub fn bench_gravity() {
    // Different system sizes to test
    let ns = [200, 400, 800, 1600, 3200, 6400];

    for n in ns {
        let sys = make_system(n);
        let gravity = make_gravity();

        let mut snap = Snapshot::with_capacity(n);
        snap.capture(&sys);

        let mut out = vec![NVec3::zeros(); n];

        // Warm up
        gravity.acceleration(&snap, &sys, &mut out);

        let t0 = Instant::now();
        gravity.acceleration(&snap, &sys, &mut out);
        let dt = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, direct force eval = {dt:8.6} s");
    }
}

/// Benchmark the full unit step (snapshot + forces + commit) for a range
/// of n
pub fn bench_step() {
    let ns = [200, 400, 800, 1600, 3200, 6400, 12800];
    let steps = 2; // number of integrator steps per size (tune as needed)

    for n in ns {
        let mut sys = make_system(n);
        let forces = AccelSet::new().with(make_gravity());
        let mut scratch = StepScratch::with_capacity(n);

        // Warm-up
        euler_integrator(&mut sys, &forces, &mut scratch);

        let t0 = Instant::now();
        for _ in 0..steps {
            euler_integrator(&mut sys, &forces, &mut scratch);
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, step = {per_step:8.6} s");
    }
}
