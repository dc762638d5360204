//! Right-hand side of the Schwarzschild null-geodesic equations
//!
//! The second-order geodesic equations reduced to first order in the affine
//! parameter λ, with the conserved energy supplying dt/dλ = E/f(r) and
//! f(r) = 1 − rs/r the redshift factor:
//!
//! ```text
//! r''  = −(rs/2r²)·f·(dt)² + (rs/(2r²f))·(r')² + r·f·(θ')² + r·f·sin²θ·(φ')²
//! θ''  = sinθ·cosθ·(φ')² − (2/r)·r'·θ'
//! φ''  = −2·cotθ·θ'·φ' − (2/r)·r'·φ'
//! ```
//!
//! The 2D specialization pins θ = π/2 (sinθ = 1, cotθ = 0) and drops the
//! θ-equation entirely.

use crate::configuration::config::Dimension;

/// Ephemeral phase-space state (r, θ, φ, r', θ', φ')
///
/// Rebuilt from the photon's Cartesian position every step and never
/// persisted, so angle unwrapping cannot drift across steps.
#[derive(Debug, Clone, Copy)]
pub struct PhaseState {
    pub r: f64,
    pub theta: f64,
    pub phi: f64,
    pub dr: f64,
    pub dtheta: f64,
    pub dphi: f64,
}

/// d(state)/dλ as returned by the geodesic equations
#[derive(Debug, Clone, Copy)]
pub struct PhaseDeriv {
    pub dr: f64,
    pub dtheta: f64,
    pub dphi: f64,
    pub ddr: f64,     // r''
    pub ddtheta: f64, // θ''
    pub ddphi: f64,   // φ''
}

impl PhaseState {
    /// state + h·k, component-wise (the perturbed input of an RK4 stage)
    pub fn advanced(&self, k: &PhaseDeriv, h: f64) -> PhaseState {
        PhaseState {
            r: self.r + h * k.dr,
            theta: self.theta + h * k.dtheta,
            phi: self.phi + h * k.dphi,
            dr: self.dr + h * k.ddr,
            dtheta: self.dtheta + h * k.ddtheta,
            dphi: self.dphi + h * k.ddphi,
        }
    }
}

/// Null-geodesic equations of motion in the Schwarzschild metric
///
/// Stateless beyond its parameters; `derivative` is invoked four times per
/// RK4 step with perturbed inputs.
#[derive(Debug, Clone)]
pub struct SchwarzschildNull {
    pub rs: f64, // Schwarzschild radius of the source
    pub cot_eps: f64, // keeps cotθ finite at the poles
    pub dimension: Dimension, // 2d drops the θ-equation
}

impl SchwarzschildNull {
    /// Evaluate d(state)/dλ at `s` for a photon of conserved energy `energy`.
    ///
    /// The caller's horizon guard keeps `r` clear of `rs`, where the 1/f
    /// terms blow up.
    pub fn derivative(&self, s: &PhaseState, energy: f64) -> PhaseDeriv {
        let r = s.r;
        let r2 = r * r;

        // redshift factor, vanishing at the horizon
        let f = 1.0 - self.rs / r;

        // dt/dλ from the conserved energy: dt = E/f
        let dt = energy / f;

        match self.dimension {
            Dimension::Two => {
                // θ pinned at π/2: sinθ = 1, cosθ = 0, θ' = 0
                let ddr = -(self.rs / (2.0 * r2)) * f * dt * dt
                    + (self.rs / (2.0 * r2 * f)) * s.dr * s.dr
                    + r * f * s.dphi * s.dphi;
                let ddphi = -(2.0 / r) * s.dr * s.dphi;

                PhaseDeriv {
                    dr: s.dr,
                    dtheta: 0.0,
                    dphi: s.dphi,
                    ddr,
                    ddtheta: 0.0,
                    ddphi,
                }
            }
            Dimension::Three => {
                let (sin_t, cos_t) = s.theta.sin_cos();

                // regularized cotθ, bounded at the poles
                let cot_t = cos_t / (sin_t + self.cot_eps);

                let ddr = -(self.rs / (2.0 * r2)) * f * dt * dt
                    + (self.rs / (2.0 * r2 * f)) * s.dr * s.dr
                    + r * f * s.dtheta * s.dtheta
                    + r * f * sin_t * sin_t * s.dphi * s.dphi;
                let ddtheta = sin_t * cos_t * s.dphi * s.dphi - (2.0 / r) * s.dr * s.dtheta;
                let ddphi = -2.0 * cot_t * s.dtheta * s.dphi - (2.0 / r) * s.dr * s.dphi;

                PhaseDeriv {
                    dr: s.dr,
                    dtheta: s.dtheta,
                    dphi: s.dphi,
                    ddr,
                    ddtheta,
                    ddphi,
                }
            }
        }
    }
}
