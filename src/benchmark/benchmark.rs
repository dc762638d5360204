use std::time::Instant;

use crate::configuration::config::Dimension;
use crate::simulation::integrator::step_photon;
use crate::simulation::launch::launch_photon;
use crate::simulation::params::Parameters;
use crate::simulation::states::{BlackHole, NVec3};

/// Time raw RK4 stepping throughput over growing photon fans
pub fn bench_rk4() {
    // Different fan sizes to test
    let ns = [100, 200, 400, 800, 1600];

    let parameters = Parameters {
        h0: 0.1,
        g: 1.0,
        c: 1.0,
        theta_eps: 1e-6,
        horizon_eps: 0.15,
        cot_eps: 1e-6,
    };
    let bh = BlackHole::new(1.0, NVec3::zeros(), parameters.g, parameters.c)
        .expect("unit mass is valid");

    for n in ns {
        // Build a fan of photons falling in from x = 10·rs
        let mut photons = Vec::with_capacity(n);

        let direction = NVec3::new(-1.0, -0.1, 0.1).normalize();
        for i in 0..n {
            let i_f = i as f64;
            // deterministic positions, no rand needed
            let position = NVec3::new(
                10.0 * bh.rs,
                (i_f * 0.37).sin() * 5.0,
                (i_f * 0.13).cos() * 5.0,
            );

            if let Ok(p) = launch_photon(&bh, position, direction, Dimension::Three, parameters.theta_eps) {
                photons.push(p);
            }
        }

        let steps = 1000;
        let start = Instant::now();
        for _ in 0..steps {
            for p in photons.iter_mut() {
                step_photon(p, &bh, &parameters, Dimension::Three);
            }
        }
        let elapsed = start.elapsed();

        let total = (steps * photons.len()) as f64;
        println!(
            "n = {:5}  {:>12?}  {:>12.0} photon-steps/s",
            photons.len(),
            elapsed,
            total / elapsed.as_secs_f64()
        );
    }
}
