//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - affine-parameter step size,
//! - physical constants (`g`, `c`),
//! - the three singularity guards (pole clamp, horizon shell, cotθ regularizer)

#[derive(Debug, Clone)]
pub struct Parameters {
    pub h0: f64, // affine-parameter step size Δλ
    pub g: f64, // gravitational constant
    pub c: f64, // light speed
    pub theta_eps: f64, // θ is clamped to [theta_eps, π - theta_eps]
    pub horizon_eps: f64, // photons are absorbed at r <= rs + horizon_eps
    pub cot_eps: f64, // added to sinθ in cotθ denominators near the poles
}
