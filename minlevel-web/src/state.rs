use std::sync::Arc;

use minlevel_logging::{LoggingDispatch, LoggingWitness, WitnessError};

/// A probe checks one thing against the witness and answers yes or no.
pub type Probe = fn(&LoggingWitness) -> Result<bool, WitnessError>;

/// Shared application state accessible by all handlers
pub struct AppState {
    /// Dispatcher every probe logs through
    logging: LoggingDispatch,
}

impl AppState {
    pub fn new(logging: LoggingDispatch) -> Arc<Self> {
        Arc::new(Self { logging })
    }

    pub fn logging(&self) -> &LoggingDispatch {
        &self.logging
    }

    /// Run `probe` with this state's dispatcher as the current default.
    pub fn run_probe(&self, probe: Probe) -> Result<bool, WitnessError> {
        self.logging.in_scope(|| probe(self.logging.witness()))
    }
}
