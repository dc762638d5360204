//! Fixed-step RK4 integrator for photon null geodesics
//!
//! `step_photon` advances one photon by one affine-parameter step, applying
//! the pole clamp and the horizon guard before touching the state. The RK4
//! core itself is a pure function over `PhaseState`, so stepping different
//! photons never shares mutable state.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::configuration::config::Dimension;
use crate::simulation::coordinates::{cartesian_to_spherical, spherical_to_cartesian, Spherical};
use crate::simulation::geodesic::{PhaseState, SchwarzschildNull};
use crate::simulation::params::Parameters;
use crate::simulation::states::{BlackHole, Photon};

/// Advance one phase-space state by one classic 4-stage RK4 step of size `h`.
///
/// Pure. This is the single function an embedded adaptive scheme (RK45)
/// would replace; nothing else assumes a fixed stage count.
pub fn rk4_step(eq: &SchwarzschildNull, state: &PhaseState, energy: f64, h: f64) -> PhaseState {
    // k1 = G(y_n)
    let k1 = eq.derivative(state, energy);
    // k2 = G(y_n + k1·h/2)
    let k2 = eq.derivative(&state.advanced(&k1, 0.5 * h), energy);
    // k3 = G(y_n + k2·h/2)
    let k3 = eq.derivative(&state.advanced(&k2, 0.5 * h), energy);
    // k4 = G(y_n + k3·h)
    let k4 = eq.derivative(&state.advanced(&k3, h), energy);

    // y_n+1 = y_n + (h/6)·(k1 + 2k2 + 2k3 + k4), component-wise
    let w = h / 6.0;
    PhaseState {
        r: state.r + w * (k1.dr + 2.0 * k2.dr + 2.0 * k3.dr + k4.dr),
        theta: state.theta + w * (k1.dtheta + 2.0 * k2.dtheta + 2.0 * k3.dtheta + k4.dtheta),
        phi: state.phi + w * (k1.dphi + 2.0 * k2.dphi + 2.0 * k3.dphi + k4.dphi),
        dr: state.dr + w * (k1.ddr + 2.0 * k2.ddr + 2.0 * k3.ddr + k4.ddr),
        dtheta: state.dtheta + w * (k1.ddtheta + 2.0 * k2.ddtheta + 2.0 * k3.ddtheta + k4.ddtheta),
        dphi: state.dphi + w * (k1.ddphi + 2.0 * k2.ddphi + 2.0 * k3.ddphi + k4.ddphi),
    }
}

/// Advance `photon` by one step of `params.h0`, in place.
///
/// Calls on a photon whose `is_done` flag is set are no-ops. A photon at or
/// inside the absorbing shell `rs + horizon_eps` is marked done without
/// advancing; absorption is a terminal physical outcome, not an error.
/// Otherwise exactly one trajectory point is appended.
///
/// The step size is fixed: a `h0` too large for the local curvature can
/// carry a photon through the guard shell unnoticed. That is a documented
/// limitation of the scheme, not corrected here.
pub fn step_photon(photon: &mut Photon, bh: &BlackHole, params: &Parameters, dimension: Dimension) {
    if photon.is_done {
        return;
    }

    // Fresh spherical chart around the hole, never carried between steps
    let mut sph = match cartesian_to_spherical(&(photon.position - bh.position)) {
        Ok(s) => s,
        Err(_) => {
            // r = 0 sits deep inside the horizon: absorbed, not an error
            photon.is_done = true;
            return;
        }
    };

    // Keep θ clear of the coordinate poles
    match dimension {
        Dimension::Two => sph.theta = FRAC_PI_2,
        Dimension::Three => {
            sph.theta = sph.theta.clamp(params.theta_eps, PI - params.theta_eps)
        }
    }

    // Horizon guard: pre-empts the 1/f blow-up just above rs
    if sph.r <= bh.rs + params.horizon_eps {
        photon.is_done = true;
        return;
    }

    let eq = SchwarzschildNull {
        rs: bh.rs,
        cot_eps: params.cot_eps,
        dimension,
    };
    let state = PhaseState {
        r: sph.r,
        theta: sph.theta,
        phi: sph.phi,
        dr: photon.dr,
        dtheta: photon.dtheta,
        dphi: photon.dphi,
    };

    let next = rk4_step(&eq, &state, photon.energy, params.h0);

    // Back to Cartesian; the polar velocities ride along on the photon
    photon.position = bh.position
        + spherical_to_cartesian(&Spherical {
            r: next.r,
            theta: next.theta,
            phi: next.phi,
        });
    photon.dr = next.dr;
    photon.dtheta = next.dtheta;
    photon.dphi = next.dphi;
    photon.trajectory.push(photon.position);
}
