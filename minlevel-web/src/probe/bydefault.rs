//! Category with no settings of its own.

use minlevel_logging::{logged, LoggingWitness, WitnessError};
use tracing::Level;

pub fn is_info(witness: &LoggingWitness) -> Result<bool, WitnessError> {
    logged!(witness, Level::INFO, "info message")
}

pub fn is_not_trace(witness: &LoggingWitness) -> Result<bool, WitnessError> {
    Ok(!tracing::enabled!(Level::TRACE) && !logged!(witness, Level::TRACE, "should not print")?)
}
