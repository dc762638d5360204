//! Core state types for the photon simulation.
//!
//! Defines the two entities of the system:
//! - `BlackHole` – static gravitational source with its Schwarzschild radius
//! - `Photon`    – mutable simulation entity carrying position, polar
//!   velocities, conserved quantities, trajectory history, and the terminal
//!   absorption flag
//!
//! Only `integrator::step_photon` mutates a `Photon` after launch.

use nalgebra::Vector3;

use crate::error::{SimError, SimResult};

pub type NVec3 = Vector3<f64>;

/// Static gravitational source. Immutable after construction.
#[derive(Debug, Clone)]
pub struct BlackHole {
    pub mass: f64, // mass
    pub position: NVec3, // fixed center, typically the origin
    pub rs: f64, // Schwarzschild radius, 2·G·mass/c²
}

impl BlackHole {
    /// Construct a black hole and derive its Schwarzschild radius.
    ///
    /// `mass`, `g`, and `c` must all be finite and positive so that `rs > 0`.
    pub fn new(mass: f64, position: NVec3, g: f64, c: f64) -> SimResult<Self> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "black hole mass must be > 0, got {mass}"
            )));
        }
        if !g.is_finite() || g <= 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "gravitational constant must be > 0, got {g}"
            )));
        }
        if !c.is_finite() || c <= 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "light speed must be > 0, got {c}"
            )));
        }

        let rs = 2.0 * g * mass / (c * c);
        Ok(Self { mass, position, rs })
    }
}

/// One photon on a null geodesic
///
/// The polar velocities are derivatives with respect to the affine
/// parameter λ. `energy` and `angular_momentum` are constants of motion
/// fixed at launch; the angular position itself is re-derived from the
/// Cartesian `position` every step.
#[derive(Debug, Clone)]
pub struct Photon {
    pub position: NVec3, // current Cartesian position
    pub dr: f64, // radial velocity dr/dλ
    pub dtheta: f64, // polar angular velocity dθ/dλ (always 0 in 2d)
    pub dphi: f64, // azimuthal angular velocity dφ/dλ
    pub energy: f64, // conserved energy E, fixed at launch
    pub angular_momentum: f64, // conserved |L|, fixed at launch
    pub is_done: bool, // true once absorbed at the horizon; stepping then no-ops
    pub trajectory: Vec<NVec3>, // past positions, one appended per accepted step
}

impl Photon {
    /// Impact parameter b = L/E: how far the photon would miss the hole
    /// if its path were not bent.
    pub fn impact_parameter(&self) -> f64 {
        self.angular_momentum / self.energy
    }
}
