//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - the gravitational source (`BlackHole`)
//! - launched photons (explicit list plus the optional seeded random fan)
//!
//! A photon whose launch fails is skipped with a warning; only unusable
//! global parameters fail the whole build. `run` then drives every live
//! photon once per tick up to the engine's step cap.

use log::{info, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use crate::configuration::config::{Dimension, PhotonConfig, ScenarioConfig, SpawnConfig};
use crate::error::{SimError, SimResult};
use crate::simulation::engine::Engine;
use crate::simulation::integrator::step_photon;
use crate::simulation::launch::launch_photon;
use crate::simulation::params::Parameters;
use crate::simulation::states::{BlackHole, NVec3, Photon};

/// A fully-initialized runtime scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// engine settings, parameters, the black hole, and the photons to step.
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub black_hole: BlackHole,
    pub photons: Vec<Photon>,
}

/// What a finished run looked like
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub ticks: usize, // simulation ticks actually executed
    pub absorbed: usize, // photons absorbed at the horizon
    pub in_flight: usize, // photons still live when the run stopped
    pub trajectory_points: usize, // total stored polyline points across photons
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> SimResult<Self> {
        // Parameters (runtime) from ParametersConfig; epsilons default here
        let p_cfg = cfg.parameters;
        if !p_cfg.h0.is_finite() || p_cfg.h0 <= 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "step size h0 must be > 0, got {}",
                p_cfg.h0
            )));
        }
        let parameters = Parameters {
            h0: p_cfg.h0,
            g: p_cfg.g,
            c: p_cfg.c,
            theta_eps: p_cfg.theta_eps.unwrap_or(1e-6),
            horizon_eps: p_cfg.horizon_eps.unwrap_or(0.15),
            cot_eps: p_cfg.cot_eps.unwrap_or(1e-6),
        };

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            dimension: cfg.engine.dimension,
            max_steps: cfg.engine.max_steps,
        };

        // The source; mass/G/c validation happens in the constructor
        let bh_cfg = cfg.black_hole;
        let black_hole = BlackHole::new(
            bh_cfg.mass,
            vec3_from(&bh_cfg.position, engine.dimension)?,
            parameters.g,
            parameters.c,
        )?;

        // Photons: explicit launches first, then the seeded fan.
        // A failed launch skips that one photon, never the batch.
        let mut photons = Vec::new();
        for (i, pc) in cfg.photons.iter().enumerate() {
            match launch_from_config(&black_hole, pc, engine.dimension, parameters.theta_eps) {
                Ok(p) => photons.push(p),
                Err(e) => warn!("skipping photon {i}: {e}"),
            }
        }
        if let Some(spawn) = &cfg.spawn {
            spawn_fan(
                &black_hole,
                spawn,
                engine.dimension,
                parameters.theta_eps,
                &mut photons,
            )?;
        }
        info!(
            "scenario ready: {} photons around rs = {}",
            photons.len(),
            black_hole.rs
        );

        Ok(Self {
            engine,
            parameters,
            black_hole,
            photons,
        })
    }

    /// Advance every live photon once per tick, up to `engine.max_steps`
    /// ticks, stopping early once all photons are absorbed.
    ///
    /// Bounding the tick count is the driver's job: an orbit that neither
    /// escapes nor crosses the horizon would otherwise run forever.
    pub fn run(&mut self) -> RunSummary {
        // Split &mut Scenario into &mut fields in one destructuring step
        let Scenario {
            engine,
            parameters,
            black_hole,
            photons,
        } = self;

        let mut ticks = 0;
        for _ in 0..engine.max_steps {
            if photons.iter().all(|p| p.is_done) {
                break;
            }
            for photon in photons.iter_mut() {
                step_photon(photon, black_hole, parameters, engine.dimension);
            }
            ticks += 1;
        }

        let absorbed = photons.iter().filter(|p| p.is_done).count();
        RunSummary {
            ticks,
            absorbed,
            in_flight: photons.len() - absorbed,
            trajectory_points: photons.iter().map(|p| p.trajectory.len()).sum(),
        }
    }
}

/// Map one `PhotonConfig` to a launched photon, normalizing the direction.
fn launch_from_config(
    bh: &BlackHole,
    pc: &PhotonConfig,
    dimension: Dimension,
    theta_eps: f64,
) -> SimResult<Photon> {
    let position = vec3_from(&pc.position, dimension)?;
    let direction = unit_vec3(&pc.direction, dimension)?;
    launch_photon(bh, position, direction, dimension, theta_eps)
}

/// Deterministic random fan: parallel photons launched toward the hole from
/// `x0·rs`, spread uniformly across `spread·rs` in y (and z in 3D).
fn spawn_fan(
    bh: &BlackHole,
    spawn: &SpawnConfig,
    dimension: Dimension,
    theta_eps: f64,
    out: &mut Vec<Photon>,
) -> SimResult<()> {
    let direction = unit_vec3(&spawn.direction, dimension)?;
    let mut rng = ChaChaRng::seed_from_u64(spawn.seed);

    let x0 = spawn.x0 * bh.rs;
    let spread = spawn.spread * bh.rs;

    for i in 0..spawn.count {
        let y0 = rng.gen_range(-0.5..0.5) * spread;
        let z0 = match dimension {
            Dimension::Two => 0.0,
            Dimension::Three => rng.gen_range(-0.5..0.5) * spread,
        };
        let position = bh.position + NVec3::new(x0, y0, z0);

        match launch_photon(bh, position, direction, dimension, theta_eps) {
            Ok(p) => out.push(p),
            Err(e) => warn!("skipping spawned photon {i}: {e}"),
        }
    }
    Ok(())
}

/// Runtime vector from a config component list.
/// 2D scenarios take the first two components and live in the z = 0 plane.
fn vec3_from(v: &[f64], dimension: Dimension) -> SimResult<NVec3> {
    match dimension {
        Dimension::Two if v.len() >= 2 => Ok(NVec3::new(v[0], v[1], 0.0)),
        Dimension::Three if v.len() >= 3 => Ok(NVec3::new(v[0], v[1], v[2])),
        _ => Err(SimError::InvalidParameter(format!(
            "expected at least {} vector components, got {}",
            if dimension == Dimension::Two { 2 } else { 3 },
            v.len()
        ))),
    }
}

/// As `vec3_from`, then normalized; zero-length directions are rejected.
fn unit_vec3(v: &[f64], dimension: Dimension) -> SimResult<NVec3> {
    let vec = vec3_from(v, dimension)?;
    let mag = vec.norm();
    if mag == 0.0 {
        return Err(SimError::InvalidInitialConditions(
            "launch direction has zero length".into(),
        ));
    }
    Ok(vec / mag)
}
