use std::cmp;

use tracing::level_filters::LevelFilter;
use tracing::subscriber::Interest;
use tracing::{Level, Metadata, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::config::LoggingConfig;

/// Global level filter resolving each target through
/// [`LoggingConfig::effective_level`].
///
/// Categories match on whole `::` segments: `app::promote` covers
/// `app::promote::child` but not `app::promoter`.
#[derive(Debug, Clone)]
pub struct CategoryFilter {
    config: LoggingConfig,
    max_level: LevelFilter,
}

impl CategoryFilter {
    pub fn new(config: LoggingConfig) -> Self {
        // Unconfigured targets resolve to the root or to a configured
        // ancestor, so these cover every reachable threshold.
        let max_level = config
            .categories
            .keys()
            .map(|name| config.effective_level(name))
            .fold(config.root_level(), cmp::max);
        Self { config, max_level }
    }

    pub fn would_enable(&self, target: &str, level: &Level) -> bool {
        *level <= self.config.effective_level(target)
    }
}

impl<S: Subscriber> Layer<S> for CategoryFilter {
    fn register_callsite(&self, metadata: &'static Metadata<'static>) -> Interest {
        if self.would_enable(metadata.target(), metadata.level()) {
            Interest::always()
        } else {
            Interest::never()
        }
    }

    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        self.would_enable(metadata.target(), metadata.level())
    }

    fn max_level_hint(&self) -> Option<LevelFilter> {
        Some(self.max_level)
    }
}
