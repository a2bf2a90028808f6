use thiserror::Error;

/// Errors raised while reading logging configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level '{0}'. Valid values: off, error, warn, info, debug, trace")]
    InvalidLevel(String),

    #[error("Invalid log directives '{directives}': {reason}")]
    InvalidDirectives { directives: String, reason: String },
}

/// Errors raised when querying the witness.
#[derive(Error, Debug)]
pub enum WitnessError {
    #[error("Witness records unavailable: a thread panicked while holding the lock")]
    Poisoned,
}
