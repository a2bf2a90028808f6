use anyhow::{Context, Result};
use tracing::Dispatch;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;

use crate::config::LoggingConfig;
use crate::witness::LoggingWitness;

/// A `tracing` dispatcher enforcing a [`LoggingConfig`], paired with the
/// witness that sits behind its level filter.
#[derive(Clone, Debug)]
pub struct LoggingDispatch {
    dispatch: Dispatch,
    witness: LoggingWitness,
    config: LoggingConfig,
}

impl LoggingDispatch {
    /// Build a dispatcher that formats to stderr.
    pub fn new(config: LoggingConfig) -> Self {
        Self::with_writer(config, std::io::stderr)
    }

    /// Build a dispatcher whose formatted output goes to `writer`.
    pub fn with_writer<W>(config: LoggingConfig, writer: W) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let witness = LoggingWitness::new();
        let subscriber = tracing_subscriber::registry()
            .with(config.filter())
            .with(tracing_subscriber::fmt::layer().with_writer(writer))
            .with(witness.clone());

        Self {
            dispatch: Dispatch::new(subscriber),
            witness,
            config,
        }
    }

    /// Build a dispatcher that writes through libtest's capture.
    pub fn for_tests(config: LoggingConfig) -> Self {
        Self::with_writer(config, tracing_subscriber::fmt::TestWriter::new())
    }

    pub fn witness(&self) -> &LoggingWitness {
        &self.witness
    }

    pub fn config(&self) -> &LoggingConfig {
        &self.config
    }

    /// Run `f` with this dispatcher as the current thread's default.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    /// Make this dispatcher the process-wide default.
    pub fn install_global(&self) -> Result<()> {
        tracing::dispatcher::set_global_default(self.dispatch.clone())
            .context("failed to install global tracing dispatcher")
    }
}
