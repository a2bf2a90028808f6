//! Category whose minimum level is promoted above the root's.

use minlevel_logging::{logged, LoggingWitness, WitnessError};
use tracing::Level;

/// INFO is disabled here, and an attempted INFO record never lands.
///
/// Both halves are checked: the enablement query alone would not catch a
/// filter that answers `enabled!` one way and lets the event through anyway.
pub fn is_not_info(witness: &LoggingWitness) -> Result<bool, WitnessError> {
    Ok(!tracing::enabled!(Level::INFO) && !logged!(witness, Level::INFO, "should not print")?)
}

/// An ERROR record is emitted and observed.
pub fn is_error(witness: &LoggingWitness) -> Result<bool, WitnessError> {
    logged!(witness, Level::ERROR, "error message")
}
