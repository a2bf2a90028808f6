use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::error::WitnessError;

/// Emit a message at `level` from the calling module, then report whether
/// the witness saw it.
///
/// ```ignore
/// let printed = logged!(witness, Level::ERROR, "error message")?;
/// ```
#[macro_export]
macro_rules! logged {
    ($witness:expr, $level:expr, $message:literal) => {{
        $crate::__tracing::event!($level, $message);
        $witness.witnessed($level, module_path!(), $message)
    }};
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RecordKey {
    level: &'static str,
    target: String,
    message: String,
}

impl RecordKey {
    fn new(level: Level, target: &str, message: &str) -> Self {
        Self {
            level: level.as_str(),
            target: target.to_string(),
            message: message.to_string(),
        }
    }
}

/// Records every event that reaches it, keyed by level, target and message.
///
/// Install it behind the level filter: anything the filter drops never
/// shows up here, which is what lets probes tell "suppressed" apart from
/// "emitted".
#[derive(Clone, Default)]
pub struct LoggingWitness {
    records: Arc<Mutex<HashMap<RecordKey, usize>>>,
}

impl LoggingWitness {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `message` was recorded at `level` for `target`.
    pub fn witnessed(&self, level: Level, target: &str, message: &str) -> Result<bool, WitnessError> {
        Ok(self.count(level, target, message)? > 0)
    }

    /// How many times `message` was recorded at `level` for `target`.
    pub fn count(&self, level: Level, target: &str, message: &str) -> Result<usize, WitnessError> {
        let records = self.records.lock().map_err(|_| WitnessError::Poisoned)?;
        Ok(records
            .get(&RecordKey::new(level, target, message))
            .copied()
            .unwrap_or(0))
    }

    /// Total number of events recorded.
    pub fn total(&self) -> Result<usize, WitnessError> {
        let records = self.records.lock().map_err(|_| WitnessError::Poisoned)?;
        Ok(records.values().sum())
    }

    fn record(&self, key: RecordKey) {
        *self.lock_recovering().entry(key).or_insert(0) += 1;
    }

    // Recording must never take the process down with it.
    fn lock_recovering(&self) -> MutexGuard<'_, HashMap<RecordKey, usize>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for LoggingWitness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.lock_recovering().len();
        f.debug_struct("LoggingWitness")
            .field("distinct_records", &len)
            .finish()
    }
}

impl<S: Subscriber> Layer<S> for LoggingWitness {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let Some(message) = visitor.message else {
            return;
        };

        let metadata = event.metadata();
        self.record(RecordKey {
            level: metadata.level().as_str(),
            target: metadata.target().to_string(),
            message,
        });
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value));
        }
    }
}
