pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;

pub use simulation::states::{BlackHole, Photon, NVec3};
pub use simulation::coordinates::{cartesian_to_spherical, spherical_to_cartesian, Spherical};
pub use simulation::geodesic::{PhaseState, PhaseDeriv, SchwarzschildNull};
pub use simulation::launch::launch_photon;
pub use simulation::integrator::{rk4_step, step_photon};
pub use simulation::scenario::{Scenario, RunSummary};

pub use configuration::config::{
    Dimension, EngineConfig, ParametersConfig, BlackHoleConfig, PhotonConfig, SpawnConfig,
    ScenarioConfig,
};

pub use error::{SimError, SimResult};

pub use benchmark::benchmark::bench_rk4;
