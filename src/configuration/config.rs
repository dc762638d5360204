//! Configuration types for loading photon scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – global engine options (dimension, step cap)
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BlackHoleConfig`]  – the gravitational source
//! - [`PhotonConfig`]     – explicit photon launches
//! - [`SpawnConfig`]      – optional deterministic random fan of photons
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example 3D scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   dimension: "3d"         # "2d" or "3d"
//!   max_steps: 1000         # driver-side bound on simulation ticks
//!
//! parameters:
//!   h0: 0.1                 # affine-parameter step size Δλ
//!   G: 1.0                  # gravitational constant
//!   c: 1.0                  # light speed
//!   theta_eps: 1.0e-6       # pole clamp (optional)
//!   horizon_eps: 0.15       # absorbing shell above rs (optional)
//!   cot_eps: 1.0e-6         # cotθ regularizer (optional)
//!
//! black_hole:
//!   mass: 1.0
//!   position: [ 0.0, 0.0, 0.0 ]
//!
//! photons:
//!   - position: [ 30.0, 0.5, 0.0 ]
//!     direction: [ -1.0, 0.0, 0.0 ]
//!
//! spawn:
//!   count: 16
//!   seed: 42
//!   x0: 10.0                # launch x in units of rs
//!   spread: 25.0            # y/z spread in units of rs
//!   direction: [ -1.0, -0.1, 0.1 ]
//! ```
//!
//! The engine then maps this configuration into its internal runtime scenario
//! representation; photon directions are normalized during that mapping.

use serde::Deserialize;

/// Spatial dimensionality of the geodesic equations
/// `dimension: "2d"` or `dimension: "3d"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    #[serde(rename = "2d")] // equatorial plane only: θ pinned at π/2, θ-equation dropped
    Two,

    #[serde(rename = "3d")] // full polar/azimuthal motion
    Three,
}

/// High-level engine configuration
/// Controls the structure of the simulation
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub dimension: Dimension, // which specialization of the equations to run
    pub max_steps: usize, // bound on ticks; an orbit that neither escapes nor falls in would run forever
}

/// Global numerical and physical parameters for a scenario
///
/// The three epsilons are empirical guards, not physical constants, so they
/// are configurable with defaults rather than hard-coded.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub h0: f64, // affine-parameter step size Δλ
    #[serde(rename = "G")]
    pub g: f64, // gravitational constant
    pub c: f64, // light speed
    pub theta_eps: Option<f64>,   // pole clamp for θ
    pub horizon_eps: Option<f64>, // absorbing shell thickness above rs
    pub cot_eps: Option<f64>,     // added to sinθ in cotθ denominators
}

/// Configuration for the gravitational source
#[derive(Deserialize, Debug)]
pub struct BlackHoleConfig {
    pub mass: f64, // mass, must be > 0
    pub position: Vec<f64>, // fixed center, typically the origin
}

/// Configuration for a single explicit photon launch
#[derive(Deserialize, Debug)]
pub struct PhotonConfig {
    pub position: Vec<f64>,  // Cartesian launch position
    pub direction: Vec<f64>, // desired launch direction (normalized at build)
}

/// Configuration for a deterministic random fan of photons
///
/// The classic lensing picture: a sheet of parallel photons launched toward
/// the hole from `x0·rs`, spread across `spread·rs` in y (and z in 3D).
#[derive(Deserialize, Debug)]
pub struct SpawnConfig {
    pub count: usize, // how many photons to spawn
    pub seed: u64, // rng seed, same seed -> same fan
    pub x0: f64, // launch x in units of rs
    pub spread: f64, // y/z spread in units of rs
    pub direction: Vec<f64>, // shared launch direction
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // engine-level configuration (dimension, step cap)
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub black_hole: BlackHoleConfig, // the gravitational source
    #[serde(default)]
    pub photons: Vec<PhotonConfig>, // explicit photon launches
    pub spawn: Option<SpawnConfig>, // optional random fan on top of the explicit launches
}
