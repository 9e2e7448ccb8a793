pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;

pub use simulation::states::{NVec3, Particle, Snapshot, System};
pub use simulation::params::Parameters;
pub use simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
pub use simulation::integrator::{euler_integrator, StepScratch};
pub use simulation::diagnostics::{centre_of_mass, total_mass};
pub use simulation::scenario::{sample_cloud, Scenario};
pub use simulation::driver::{run_simulation, RunSummary};

pub use configuration::config::{CloudConfig, ParametersConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_gravity, bench_step};

pub use error::{Error, Result};
