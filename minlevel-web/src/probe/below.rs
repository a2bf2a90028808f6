//! Category whose minimum level is lowered below the root's, so TRACE
//! gets through. `child` has no settings and inherits them.

use minlevel_logging::{logged, LoggingWitness, WitnessError};
use tracing::Level;

pub fn is_trace(witness: &LoggingWitness) -> Result<bool, WitnessError> {
    logged!(witness, Level::TRACE, "trace message")
}

pub mod child {
    use minlevel_logging::{logged, LoggingWitness, WitnessError};
    use tracing::Level;

    pub fn is_trace(witness: &LoggingWitness) -> Result<bool, WitnessError> {
        logged!(witness, Level::TRACE, "trace message")
    }
}
