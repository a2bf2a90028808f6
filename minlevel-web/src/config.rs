use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;

use minlevel_logging::config::parse_level;
use minlevel_logging::{CategoryConfig, LoggingConfig};

pub const DEFAULT_HTTP_PORT: u16 = 8081;

/// Probe server configuration loaded from file and/or environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeConfig {
    pub http_port: u16,
    pub logging: LoggingConfig,
}

/// Raw TOML file structure.
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    http_port: Option<u16>,
    logging: Option<LoggingConfig>,
}

/// Values read from `MINLEVEL_*` environment variables.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    pub http_port: Option<String>,
    pub level: Option<String>,
    pub min_level: Option<String>,
    pub directives: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("MINLEVEL_HTTP_PORT").ok(),
            level: std::env::var("MINLEVEL_LOG_LEVEL").ok(),
            min_level: std::env::var("MINLEVEL_LOG_MIN_LEVEL").ok(),
            directives: std::env::var("MINLEVEL_LOG").ok(),
        }
    }
}

/// Default config file location.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("minlevel").join("config.toml"))
}

impl ProbeConfig {
    /// Levels matching what the probes expect: `above` raised to WARN,
    /// `below` lowered to TRACE, `promote` floored at ERROR.
    pub fn bundled() -> Self {
        let logging = LoggingConfig::default()
            .with_category(
                "minlevel_web::probe::above",
                CategoryConfig::default().with_level(LevelFilter::WARN),
            )
            .with_category(
                "minlevel_web::probe::below",
                CategoryConfig::default()
                    .with_min_level(LevelFilter::TRACE)
                    .with_level(LevelFilter::TRACE),
            )
            .with_category(
                "minlevel_web::probe::promote",
                CategoryConfig::default().with_min_level(LevelFilter::ERROR),
            );

        Self {
            http_port: DEFAULT_HTTP_PORT,
            logging,
        }
    }

    /// Load configuration from file and environment variables.
    ///
    /// Environment variables override file values. A missing file falls
    /// back to [`ProbeConfig::bundled`].
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let path = config_path
            .map(Path::to_path_buf)
            .or_else(default_config_path);

        let file_config = match path {
            Some(path) if path.exists() => {
                let content = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config: {}", path.display()))?;
                Some(
                    toml::from_str::<ConfigFile>(&content)
                        .with_context(|| format!("failed to parse config: {}", path.display()))?,
                )
            }
            _ => None,
        };

        Self::from_file_and_env(file_config, EnvOverrides::from_env())
    }

    /// Build config from a parsed file (if any) and environment values.
    fn from_file_and_env(file_config: Option<ConfigFile>, env: EnvOverrides) -> Result<Self> {
        let mut config = match file_config {
            Some(file) => Self {
                http_port: file.http_port.unwrap_or(DEFAULT_HTTP_PORT),
                logging: file.logging.unwrap_or_default(),
            },
            None => Self::bundled(),
        };

        if let Some(port) = env.http_port {
            config.http_port = port
                .trim()
                .parse::<u16>()
                .with_context(|| format!("invalid MINLEVEL_HTTP_PORT '{}'", port))?;
        }
        if let Some(level) = env.level {
            config.logging.level = parse_level(&level).context("invalid MINLEVEL_LOG_LEVEL")?;
        }
        if let Some(min_level) = env.min_level {
            config.logging.min_level =
                parse_level(&min_level).context("invalid MINLEVEL_LOG_MIN_LEVEL")?;
        }
        if let Some(directives) = env.directives {
            config
                .logging
                .apply_directives(&directives)
                .context("invalid MINLEVEL_LOG")?;
        }

        Ok(config)
    }
}
