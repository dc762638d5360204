use photonsim::configuration::config::{
    BlackHoleConfig, Dimension, EngineConfig, ParametersConfig, PhotonConfig, ScenarioConfig,
    SpawnConfig,
};
use photonsim::error::SimError;
use photonsim::simulation::coordinates::{cartesian_to_spherical, spherical_to_cartesian};
use photonsim::simulation::integrator::step_photon;
use photonsim::simulation::launch::launch_photon;
use photonsim::simulation::params::Parameters;
use photonsim::simulation::scenario::Scenario;
use photonsim::simulation::states::{BlackHole, NVec3, Photon};

use approx::assert_relative_eq;
use std::f64::consts::{FRAC_PI_2, PI};

/// Default physics parameters for tests: geometric units G = c = 1
pub fn test_params() -> Parameters {
    Parameters {
        h0: 0.1,
        g: 1.0,
        c: 1.0,
        theta_eps: 1e-6,
        horizon_eps: 0.15,
        cot_eps: 1e-6,
    }
}

/// Unit-mass black hole at the origin: rs = 2 in geometric units
pub fn unit_black_hole() -> BlackHole {
    BlackHole::new(1.0, NVec3::zeros(), 1.0, 1.0).expect("unit mass is valid")
}

/// Launch a photon with a normalized direction
pub fn launch(bh: &BlackHole, pos: [f64; 3], dir: [f64; 3], dim: Dimension) -> Photon {
    let direction = NVec3::new(dir[0], dir[1], dir[2]).normalize();
    launch_photon(bh, NVec3::new(pos[0], pos[1], pos[2]), direction, dim, test_params().theta_eps)
        .expect("launch should succeed")
}

// ==================================================================================
// Black hole tests
// ==================================================================================

#[test]
fn schwarzschild_radius_in_geometric_units() {
    let bh = unit_black_hole();
    assert_eq!(bh.rs, 2.0, "rs = 2GM/c² should be 2 for M=1, G=c=1");
}

#[test]
fn nonpositive_mass_rejected() {
    for mass in [0.0, -1.0] {
        let result = BlackHole::new(mass, NVec3::zeros(), 1.0, 1.0);
        assert!(
            matches!(result, Err(SimError::InvalidParameter(_))),
            "mass {} should be rejected",
            mass
        );
    }
}

// ==================================================================================
// Coordinate transform tests
// ==================================================================================

#[test]
fn cartesian_spherical_round_trip() {
    let points = [
        NVec3::new(1.0, 2.0, 3.0),
        NVec3::new(-4.0, 0.5, 2.0),
        NVec3::new(3.0, -3.0, -1.0),
        NVec3::new(0.0, 0.0, 5.0),
        NVec3::new(1e-3, 2e-3, -1e-3),
    ];

    for p in points {
        let sph = cartesian_to_spherical(&p).expect("nonzero point");
        let back = spherical_to_cartesian(&sph);

        assert_relative_eq!(back.x, p.x, epsilon = 1e-12);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-12);
        assert_relative_eq!(back.z, p.z, epsilon = 1e-12);
    }
}

#[test]
fn origin_has_no_spherical_chart() {
    let result = cartesian_to_spherical(&NVec3::zeros());
    assert!(matches!(result, Err(SimError::CoordinateSingularity(_))));
}

#[test]
fn axis_points_map_to_poles() {
    let north = cartesian_to_spherical(&NVec3::new(0.0, 0.0, 5.0)).unwrap();
    assert_relative_eq!(north.theta, 0.0, epsilon = 1e-12);

    let south = cartesian_to_spherical(&NVec3::new(0.0, 0.0, -5.0)).unwrap();
    assert_relative_eq!(south.theta, PI, epsilon = 1e-12);

    let equator = cartesian_to_spherical(&NVec3::new(1.0, 0.0, 0.0)).unwrap();
    assert_relative_eq!(equator.theta, FRAC_PI_2, epsilon = 1e-12);
    assert_relative_eq!(equator.phi, 0.0, epsilon = 1e-12);
}

// ==================================================================================
// Launch (initial condition) tests
// ==================================================================================

#[test]
fn launch_satisfies_null_constraint() {
    let bh = unit_black_hole();
    let cases = [
        ([30.0, 0.5, 0.0], [-1.0, 0.0, 0.0]),
        ([10.0, 5.0, -3.0], [0.3, -1.0, 0.2]),
        ([8.0, 0.0, 6.0], [-0.5, -0.5, 0.5]),
    ];

    for (pos, dir) in cases {
        let p = launch(&bh, pos, dir, Dimension::Three);

        let r0 = p.position.norm();
        let f0 = 1.0 - bh.rs / r0;
        let l2 = p.angular_momentum * p.angular_momentum;

        // E² = dr² + f·L²/r² on a null geodesic
        let violation = (p.energy * p.energy - p.dr * p.dr - f0 * l2 / (r0 * r0)).abs();
        assert!(
            violation < 1e-9,
            "null constraint violated by {:.3e} for launch at {:?}",
            violation,
            pos
        );
    }
}

#[test]
fn radial_launch_carries_no_angular_momentum() {
    let bh = unit_black_hole();
    let p = launch(&bh, [30.0, 0.0, 0.0], [-1.0, 0.0, 0.0], Dimension::Three);

    assert_eq!(p.angular_momentum, 0.0);
    assert_eq!(p.dphi, 0.0);
    assert_eq!(p.dtheta, 0.0);
    assert!(p.dr < 0.0, "inward launch should have dr < 0, got {}", p.dr);
}

#[test]
fn outward_launch_gets_positive_dr() {
    let bh = unit_black_hole();
    let p = launch(&bh, [30.0, 0.0, 0.0], [1.0, 0.0, 0.0], Dimension::Three);
    assert!(p.dr > 0.0);
}

#[test]
fn superluminal_tangential_direction_rejected() {
    let bh = unit_black_hole();

    // |d| = 3 tangentially at r = 10: L²·f/r² = 7.2 > E² = 1, no null geodesic
    let result = launch_photon(
        &bh,
        NVec3::new(10.0, 0.0, 0.0),
        NVec3::new(0.0, 3.0, 0.0),
        Dimension::Three,
        test_params().theta_eps,
    );
    assert!(matches!(result, Err(SimError::InvalidInitialConditions(_))));
}

#[test]
fn zero_direction_rejected() {
    let bh = unit_black_hole();
    let result = launch_photon(
        &bh,
        NVec3::new(30.0, 0.0, 0.0),
        NVec3::zeros(),
        Dimension::Three,
        test_params().theta_eps,
    );
    assert!(matches!(result, Err(SimError::InvalidInitialConditions(_))));
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn radial_infall_stays_radial_until_absorption() {
    let bh = unit_black_hole();
    let params = test_params();
    let mut p = launch(&bh, [30.0, 0.0, 0.0], [-1.0, 0.0, 0.0], Dimension::Three);

    for _ in 0..1000 {
        step_photon(&mut p, &bh, &params, Dimension::Three);
        if p.is_done {
            break;
        }
    }

    assert!(p.is_done, "radial infall photon should be absorbed");
    for point in &p.trajectory {
        assert!(
            point.y.abs() < 1e-9 && point.z.abs() < 1e-9,
            "L = 0 photon drifted laterally to {:?}",
            point
        );
    }
}

#[test]
fn step_is_noop_once_done() {
    let bh = unit_black_hole();
    let params = test_params();
    let mut p = launch(&bh, [30.0, 0.0, 0.0], [-1.0, 0.0, 0.0], Dimension::Three);

    for _ in 0..1000 {
        step_photon(&mut p, &bh, &params, Dimension::Three);
        if p.is_done {
            break;
        }
    }
    assert!(p.is_done);

    let position = p.position;
    let (dr, dtheta, dphi) = (p.dr, p.dtheta, p.dphi);
    let trajectory_len = p.trajectory.len();

    for _ in 0..5 {
        step_photon(&mut p, &bh, &params, Dimension::Three);
    }

    assert_eq!(p.position, position);
    assert_eq!(p.dr, dr);
    assert_eq!(p.dtheta, dtheta);
    assert_eq!(p.dphi, dphi);
    assert_eq!(p.trajectory.len(), trajectory_len);
}

#[test]
fn trajectory_grows_by_one_per_step() {
    let bh = unit_black_hole();
    let params = test_params();

    // outward photon: never absorbed, every step is accepted
    let mut p = launch(&bh, [30.0, 0.0, 0.0], [1.0, 0.0, 0.0], Dimension::Three);
    assert_eq!(p.trajectory.len(), 1, "trajectory starts at the launch point");

    for i in 1..=10 {
        step_photon(&mut p, &bh, &params, Dimension::Three);
        assert_eq!(p.trajectory.len(), i + 1);
    }
}

#[test]
fn absorption_happens_at_the_guard_shell() {
    let bh = unit_black_hole();
    let params = test_params();
    let mut p = launch(&bh, [30.0, 0.0, 0.0], [-1.0, 0.0, 0.0], Dimension::Three);

    let mut transitions = 0;
    let mut was_done = p.is_done;
    for _ in 0..1000 {
        step_photon(&mut p, &bh, &params, Dimension::Three);
        if p.is_done && !was_done {
            transitions += 1;
            let r = (p.position - bh.position).norm();
            assert!(
                r <= bh.rs + params.horizon_eps + 1e-9,
                "photon flagged done at r = {}, outside the shell",
                r
            );
        }
        was_done = p.is_done;
    }

    assert_eq!(transitions, 1, "is_done should flip exactly once");
    assert!(p.is_done, "flag must never revert");
}

#[test]
fn grazing_photon_bends_harder_near_the_hole() {
    let bh = unit_black_hole();
    let params = test_params();
    let mut p = launch(&bh, [30.0, 0.5, 0.0], [-1.0, 0.0, 0.0], Dimension::Three);

    // impact parameter b = L/E is the lateral offset, well below critical
    assert_relative_eq!(p.impact_parameter(), 0.5, epsilon = 1e-2);

    let mut dphis = Vec::new();
    for _ in 0..2000 {
        step_photon(&mut p, &bh, &params, Dimension::Three);
        if p.is_done {
            break;
        }
        dphis.push(p.dphi);
    }

    assert!(p.is_done, "sub-critical photon should be captured");
    assert!(dphis.len() > 10, "expected a long infall, got {} steps", dphis.len());

    // |dφ/dλ| grows monotonically as the photon falls in
    for pair in dphis.windows(2) {
        assert!(
            pair[1].abs() >= pair[0].abs() - 1e-15,
            "|dφ| decreased from {:.6e} to {:.6e}",
            pair[0],
            pair[1]
        );
        assert!(pair[1] > 0.0, "bending flipped sign");
    }
    assert!(
        dphis.last().unwrap().abs() > dphis[0].abs(),
        "|dφ| never grew over the infall"
    );
}

#[test]
fn planar_photon_stays_in_plane() {
    let bh = unit_black_hole();
    let params = test_params();
    let mut p = launch(&bh, [20.0, 5.0, 0.0], [-1.0, 0.2, 0.0], Dimension::Two);

    assert_eq!(p.dtheta, 0.0);

    for _ in 0..200 {
        step_photon(&mut p, &bh, &params, Dimension::Two);
        if p.is_done {
            break;
        }
    }

    assert_eq!(p.dtheta, 0.0);
    for point in &p.trajectory {
        assert!(
            point.z.abs() < 1e-9,
            "2d photon left the equatorial plane: {:?}",
            point
        );
    }
}

// ==================================================================================
// Scenario tests
// ==================================================================================

fn base_config(photons: Vec<PhotonConfig>, spawn: Option<SpawnConfig>) -> ScenarioConfig {
    ScenarioConfig {
        engine: EngineConfig {
            dimension: Dimension::Three,
            max_steps: 1000,
        },
        parameters: ParametersConfig {
            h0: 0.1,
            g: 1.0,
            c: 1.0,
            theta_eps: None,
            horizon_eps: None,
            cot_eps: None,
        },
        black_hole: BlackHoleConfig {
            mass: 1.0,
            position: vec![0.0, 0.0, 0.0],
        },
        photons,
        spawn,
    }
}

#[test]
fn bad_photons_are_skipped_not_fatal() {
    let cfg = base_config(
        vec![
            PhotonConfig {
                position: vec![30.0, 0.0, 0.0],
                direction: vec![-1.0, 0.0, 0.0],
            },
            PhotonConfig {
                position: vec![30.0, 0.0, 0.0],
                direction: vec![0.0, 0.0, 0.0], // unlaunchable
            },
        ],
        None,
    );

    let scenario = Scenario::build_scenario(cfg).expect("build should survive one bad photon");
    assert_eq!(scenario.photons.len(), 1);
}

#[test]
fn invalid_step_size_rejected() {
    let mut cfg = base_config(Vec::new(), None);
    cfg.parameters.h0 = 0.0;

    let result = Scenario::build_scenario(cfg);
    assert!(matches!(result, Err(SimError::InvalidParameter(_))));
}

#[test]
fn run_reports_absorption() {
    let cfg = base_config(
        vec![PhotonConfig {
            position: vec![30.0, 0.0, 0.0],
            direction: vec![-1.0, 0.0, 0.0],
        }],
        None,
    );

    let mut scenario = Scenario::build_scenario(cfg).unwrap();
    let summary = scenario.run();

    assert_eq!(summary.absorbed, 1);
    assert_eq!(summary.in_flight, 0);
    assert!(summary.ticks < 1000, "absorption should end the run early");
    assert_eq!(summary.trajectory_points, scenario.photons[0].trajectory.len());
}

#[test]
fn spawn_fan_is_reproducible() {
    let spawn = || {
        Some(SpawnConfig {
            count: 8,
            seed: 7,
            x0: 10.0,
            spread: 25.0,
            direction: vec![-1.0, -0.1, 0.1],
        })
    };

    let a = Scenario::build_scenario(base_config(Vec::new(), spawn())).unwrap();
    let b = Scenario::build_scenario(base_config(Vec::new(), spawn())).unwrap();

    assert_eq!(a.photons.len(), b.photons.len());
    for (pa, pb) in a.photons.iter().zip(b.photons.iter()) {
        assert_eq!(pa.position, pb.position, "same seed must give the same fan");
    }
}

#[test]
fn yaml_scenario_parses() {
    let yaml = r#"
engine:
  dimension: "3d"
  max_steps: 100

parameters:
  h0: 0.1
  G: 1.0
  c: 1.0

black_hole:
  mass: 1.0
  position: [ 0.0, 0.0, 0.0 ]

photons:
  - position: [ 30.0, 0.5, 0.0 ]
    direction: [ -1.0, 0.0, 0.0 ]
"#;

    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).expect("yaml should deserialize");
    let scenario = Scenario::build_scenario(cfg).expect("scenario should build");

    assert_eq!(scenario.photons.len(), 1);
    assert_eq!(scenario.black_hole.rs, 2.0);
}
