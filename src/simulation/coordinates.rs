//! Pure Cartesian ↔ spherical coordinate conversion
//!
//! Stateless, bidirectional:
//!
//! ```text
//! r = √(x² + y² + z²),  θ = acos(z/r),  φ = atan2(y, x)
//! x = r·sinθ·cosφ,      y = r·sinθ·sinφ,  z = r·cosθ
//! ```
//!
//! `r = 0` leaves θ and φ undefined and is rejected rather than divided
//! through. Callers working around a displaced black hole translate into its
//! frame before converting.

use crate::error::{SimError, SimResult};
use crate::simulation::states::NVec3;

/// Spherical chart point (r, θ, φ) with θ ∈ [0, π] measured from +z.
#[derive(Debug, Clone, Copy)]
pub struct Spherical {
    pub r: f64, // radial coordinate
    pub theta: f64, // polar angle
    pub phi: f64, // azimuthal angle
}

/// Convert a Cartesian point to spherical coordinates.
///
/// Fails with [`SimError::CoordinateSingularity`] at the origin, where the
/// angles are undefined.
pub fn cartesian_to_spherical(p: &NVec3) -> SimResult<Spherical> {
    let r = p.norm();
    if r == 0.0 {
        return Err(SimError::CoordinateSingularity(
            "θ and φ are undefined at r = 0".into(),
        ));
    }

    // z/r can stray past ±1 by a rounding error; acos would return NaN
    let cos_theta = (p.z / r).clamp(-1.0, 1.0);

    Ok(Spherical {
        r,
        theta: cos_theta.acos(),
        phi: p.y.atan2(p.x),
    })
}

/// Convert spherical coordinates back to a Cartesian point. Total.
pub fn spherical_to_cartesian(s: &Spherical) -> NVec3 {
    let (sin_t, cos_t) = s.theta.sin_cos();
    let (sin_p, cos_p) = s.phi.sin_cos();

    NVec3::new(
        s.r * sin_t * cos_p,
        s.r * sin_t * sin_p,
        s.r * cos_t,
    )
}
