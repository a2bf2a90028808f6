use std::cmp;
use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::Targets;

use crate::error::ConfigError;
use crate::filter::CategoryFilter;

/// Level settings for the root logger and any number of categories.
///
/// A category is a `tracing` target prefix such as
/// `minlevel_web::probe::promote`. Records are kept only when they pass
/// both the minimum level (the floor) and the runtime level.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    #[serde(deserialize_with = "deserialize_level")]
    pub min_level: LevelFilter,
    #[serde(deserialize_with = "deserialize_level")]
    pub level: LevelFilter,
    pub categories: BTreeMap<String, CategoryConfig>,
}

/// Per-category overrides. Unset values are inherited from the nearest
/// configured ancestor, then from the root.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CategoryConfig {
    #[serde(deserialize_with = "deserialize_optional_level")]
    pub min_level: Option<LevelFilter>,
    #[serde(deserialize_with = "deserialize_optional_level")]
    pub level: Option<LevelFilter>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            min_level: LevelFilter::DEBUG,
            level: LevelFilter::INFO,
            categories: BTreeMap::new(),
        }
    }
}

impl CategoryConfig {
    pub fn with_min_level(mut self, level: LevelFilter) -> Self {
        self.min_level = Some(level);
        self
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = Some(level);
        self
    }
}

impl LoggingConfig {
    /// Add or replace the settings for one category.
    pub fn with_category(mut self, category: impl Into<String>, config: CategoryConfig) -> Self {
        self.categories.insert(category.into(), config);
        self
    }

    /// Threshold applied to targets no category matches.
    pub fn root_level(&self) -> LevelFilter {
        more_severe(self.min_level, self.level)
    }

    /// Threshold applied to `category`.
    ///
    /// The minimum level and the runtime level are each taken from the
    /// closest `::`-separated ancestor that sets them (the category itself
    /// included), falling back to the root. The stricter of the two wins.
    pub fn effective_level(&self, category: &str) -> LevelFilter {
        let min_level = self
            .inherited(category, |c| c.min_level)
            .unwrap_or(self.min_level);
        let level = self.inherited(category, |c| c.level).unwrap_or(self.level);
        more_severe(min_level, level)
    }

    fn inherited(
        &self,
        category: &str,
        pick: impl Fn(&CategoryConfig) -> Option<LevelFilter>,
    ) -> Option<LevelFilter> {
        ancestors(category).find_map(|name| self.categories.get(name).and_then(&pick))
    }

    /// Build the level filter enforcing these settings.
    pub fn filter(&self) -> CategoryFilter {
        CategoryFilter::new(self.clone())
    }

    /// Merge `Targets`-style directives (`info,my_crate::module=warn`) into
    /// the runtime levels. A bare level replaces the root level; each
    /// `target=level` pair replaces that category's level.
    pub fn apply_directives(&mut self, directives: &str) -> Result<(), ConfigError> {
        let targets: Targets =
            directives
                .parse()
                .map_err(|e| ConfigError::InvalidDirectives {
                    directives: directives.to_string(),
                    reason: format!("{}", e),
                })?;

        if let Some(level) = targets.default_level() {
            self.level = level;
        }
        for (target, level) in targets.iter() {
            self.categories
                .entry(target.to_string())
                .or_default()
                .level = Some(level);
        }
        Ok(())
    }
}

/// Parse a level name, ignoring case and surrounding whitespace.
pub fn parse_level(raw: &str) -> Result<LevelFilter, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidLevel(raw.to_string()));
    }
    trimmed
        .parse::<LevelFilter>()
        .map_err(|_| ConfigError::InvalidLevel(raw.to_string()))
}

// LevelFilter orders OFF lowest and TRACE highest, so the stricter is the min.
fn more_severe(a: LevelFilter, b: LevelFilter) -> LevelFilter {
    cmp::min(a, b)
}

fn ancestors(category: &str) -> impl Iterator<Item = &str> {
    std::iter::successors(Some(category), |&name| {
        name.rfind("::").map(|idx| &name[..idx])
    })
}

fn deserialize_level<'de, D>(deserializer: D) -> Result<LevelFilter, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_level(&raw).map_err(serde::de::Error::custom)
}

fn deserialize_optional_level<'de, D>(deserializer: D) -> Result<Option<LevelFilter>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| parse_level(&raw).map_err(serde::de::Error::custom))
        .transpose()
}
