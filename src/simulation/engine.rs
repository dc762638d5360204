//! High-level runtime engine settings
//!
//! Selects the dimensionality of the geodesic equations and the
//! driver-side tick bound used when running a `Scenario`

use crate::configuration::config::Dimension;

#[derive(Debug, Clone)]
pub struct Engine {
    pub dimension: Dimension, // 2d = equatorial specialization, 3d = full equations
    pub max_steps: usize, // maximum simulation ticks per run
}
