//! Core state types for the N-body simulation.
//!
//! Defines the particle/system structs plus the per-step `Snapshot`:
//! - `Particle` / `System` using `NVec3`
//! - `Snapshot` holding the read-only (mass, position) copy for one step
//!
//! The system holds the list of particles and the current simulation time `t`.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub m: f64, // mass (> 0)
}

#[derive(Debug, Clone)]
pub struct System {
    pub particles: Vec<Particle>, // collection of particles, index-stable
    pub t: f64, // time, advances by 1 per step
}

impl System {
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Read-only copy of every particle's mass and position, taken at the start
/// of a step and used as the right-hand side of that step's force sums.
///
/// The buffers are owned and reused: `capture` refills them in place, so
/// after the first step the stepping loop performs no allocation.
#[derive(Debug, Default)]
pub struct Snapshot {
    pub mass: Vec<f64>,
    pub position: Vec<NVec3>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            mass: Vec::with_capacity(n),
            position: Vec::with_capacity(n),
        }
    }

    /// Refill the snapshot from the current system state.
    ///
    /// Must complete before any particle is updated within the step; no
    /// update may read another particle's in-progress state.
    pub fn capture(&mut self, sys: &System) {
        self.mass.clear();
        self.position.clear();
        self.mass.extend(sys.particles.iter().map(|p| p.m));
        self.position.extend(sys.particles.iter().map(|p| p.x));
    }
}
