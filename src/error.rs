//! Simulation errors

use thiserror::Error;

/// Errors raised by the bubble simulation.
///
/// None of these reach the user: sampling faults abort a single spawn and
/// the schedule keeps ticking.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("gave up sampling {quantity} after {attempts} attempts")]
    SamplingExhausted {
        quantity: &'static str,
        attempts: u32,
    },

    #[error("invalid simulation config: {0}")]
    InvalidConfig(String),

    #[error("failed to spawn simulation thread: {0}")]
    Spawn(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
