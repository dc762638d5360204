//! Error types for scenario construction and photon launching

use thiserror::Error;

/// Result type for simulation operations
pub type SimResult<T> = Result<T, SimError>;

/// Errors that can occur while building a scenario or launching a photon
///
/// Horizon absorption is not an error: it is a terminal physical outcome
/// recorded on the photon's `is_done` flag.
#[derive(Error, Debug)]
pub enum SimError {
    /// A global parameter is unusable (non-positive mass, step size, etc.)
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The requested launch position/direction admits no null geodesic
    /// (negative radicand in the radial-velocity solve). Aborts that one
    /// photon, never the whole batch.
    #[error("invalid initial conditions: {0}")]
    InvalidInitialConditions(String),

    /// A point where the spherical chart is undefined (r = 0)
    #[error("coordinate singularity: {0}")]
    CoordinateSingularity(String),
}
