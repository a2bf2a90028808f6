//! Category whose runtime level is raised to WARN.

use minlevel_logging::{logged, LoggingWitness, WitnessError};
use tracing::Level;

pub fn is_not_info(witness: &LoggingWitness) -> Result<bool, WitnessError> {
    Ok(!tracing::enabled!(Level::INFO) && !logged!(witness, Level::INFO, "should not print")?)
}

pub fn is_warn(witness: &LoggingWitness) -> Result<bool, WitnessError> {
    logged!(witness, Level::WARN, "warn message")
}
