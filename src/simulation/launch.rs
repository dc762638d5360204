//! Initial conditions for a photon on a null geodesic
//!
//! Turns a desired Cartesian launch position and unit direction into the
//! polar velocities and conserved quantities of a null geodesic:
//!
//! 1. position → (r0, θ0, φ0)
//! 2. project the direction onto the local spherical basis to get dθ0, dφ0
//! 3. fix E = 1 (only ratios matter on a null geodesic)
//! 4. L² = r0⁴·(dθ0² + sin²θ0·dφ0²)
//! 5. solve the null constraint E² = dr0² + f0·L²/r0² for |dr0|, taking the
//!    sign from the radial component of the direction
//!
//! A direction/position pair whose radicand is negative has no null geodesic
//! and is rejected outright instead of poisoning the photon with NaN.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::configuration::config::Dimension;
use crate::error::{SimError, SimResult};
use crate::simulation::coordinates::cartesian_to_spherical;
use crate::simulation::states::{BlackHole, NVec3, Photon};

/// Conserved energy per unit mass, fixed arbitrarily at launch
const ENERGY: f64 = 1.0;

/// Derive a fully-populated photon from a launch position and direction.
///
/// `direction` is taken as given; callers wanting unit-speed launches
/// normalize first. The same θ clamp the integrator applies is applied here
/// so dφ0 stays finite near the poles.
pub fn launch_photon(
    bh: &BlackHole,
    position: NVec3,
    direction: NVec3,
    dimension: Dimension,
    theta_eps: f64,
) -> SimResult<Photon> {
    if direction.norm_squared() == 0.0 {
        return Err(SimError::InvalidInitialConditions(
            "launch direction has zero length".into(),
        ));
    }

    // Spherical chart centered on the hole
    let mut sph = cartesian_to_spherical(&(position - bh.position))?;
    match dimension {
        Dimension::Two => sph.theta = FRAC_PI_2,
        Dimension::Three => sph.theta = sph.theta.clamp(theta_eps, PI - theta_eps),
    }

    let r0 = sph.r;
    let (sin_t, cos_t) = sph.theta.sin_cos();
    let (sin_p, cos_p) = sph.phi.sin_cos();
    let (dx, dy, dz) = (direction.x, direction.y, direction.z);

    // Jacobian of (θ, φ) wrt (x, y, z), applied to the Cartesian direction
    let dphi0 = (-dx * sin_p + dy * cos_p) / (r0 * sin_t);
    let dtheta0 = match dimension {
        Dimension::Two => 0.0,
        Dimension::Three => (dx * cos_t * cos_p + dy * cos_t * sin_p - dz * sin_t) / r0,
    };

    // Conserved quantities: E fixed, L² from the angular velocities
    let l_squared = r0.powi(4) * (dtheta0 * dtheta0 + sin_t * sin_t * dphi0 * dphi0);

    // Gravitational redshift factor at the launch radius
    let f0 = 1.0 - bh.rs / r0;

    // Null constraint with dt/dλ = E/f0:
    // dr0² = E² − L²·f0/r0²
    let radicand = ENERGY * ENERGY - l_squared * f0 / (r0 * r0);
    if radicand < 0.0 {
        return Err(SimError::InvalidInitialConditions(format!(
            "no null geodesic fits this position/direction pair (radicand {radicand:.3e})"
        )));
    }

    // Inward or outward, from the radial component of the direction
    let radial = dx * sin_t * cos_p + dy * sin_t * sin_p + dz * cos_t;
    let sign = if radial >= 0.0 { 1.0 } else { -1.0 };
    let dr0 = sign * radicand.sqrt();

    Ok(Photon {
        position,
        dr: dr0,
        dtheta: dtheta0,
        dphi: dphi0,
        energy: ENERGY,
        angular_momentum: l_squared.sqrt(),
        is_done: false,
        trajectory: vec![position],
    })
}
