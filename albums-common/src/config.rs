//! Bootstrap configuration loading
//!
//! Settings are resolved once at startup, highest priority first:
//! 1. Command-line arguments / environment (parsed by the binary)
//! 2. TOML configuration file
//! 3. Compiled defaults
//!
//! The config file itself is located by priority too: an explicit path,
//! then the `ALBUMS_CONFIG` environment variable, then
//! `<user config dir>/albums/config.toml`. Only the last one may be absent.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::{Error, Result};

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "ALBUMS_CONFIG";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Contents of the TOML config file
///
/// Every key is optional; absent keys fall through to compiled defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Listen address (host or IP)
    #[serde(default)]
    pub host: Option<String>,

    /// Listen port
    #[serde(default)]
    pub port: Option<u16>,

    /// Install the seed albums at startup
    #[serde(default)]
    pub seed: Option<bool>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default)]
    pub level: Option<String>,
}

impl TomlConfig {
    /// Parse config from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Cannot read config file {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }
}

/// Values supplied on the command line (or their environment fallbacks)
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
    pub config_file: Option<PathBuf>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub seed: bool,
    pub log_level: String,
    /// Config file the values were read from, if any
    pub config_file: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed: true,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            config_file: None,
        }
    }
}

impl ServiceConfig {
    /// Locate and load the config file (if any), then apply overrides
    pub fn resolve(overrides: &ConfigOverrides) -> Result<Self> {
        let path = locate_config_file(overrides.config_file.as_deref())?;
        let file = match &path {
            Some(path) => {
                debug!("Loading config file {}", path.display());
                Some(TomlConfig::load(path)?)
            }
            None => None,
        };

        Ok(Self {
            config_file: path,
            ..Self::merge(file, overrides)
        })
    }

    /// Combine file values and overrides on top of compiled defaults
    pub fn merge(file: Option<TomlConfig>, overrides: &ConfigOverrides) -> Self {
        let defaults = Self::default();
        let file = file.unwrap_or_default();

        Self {
            host: overrides
                .host
                .clone()
                .or(file.host)
                .unwrap_or(defaults.host),
            port: overrides.port.or(file.port).unwrap_or(defaults.port),
            seed: file.seed.unwrap_or(defaults.seed),
            log_level: overrides
                .log_level
                .clone()
                .or(file.logging.level)
                .unwrap_or(defaults.log_level),
            config_file: None,
        }
    }

    /// `host:port` string suitable for binding
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Find the config file to load
///
/// An explicit path (argument or environment) must exist. The per-user
/// default location is used only when present.
pub fn locate_config_file(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    let named = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

    if let Some(path) = named {
        if !path.exists() {
            return Err(Error::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        return Ok(Some(path));
    }

    match default_config_path() {
        Some(path) if path.exists() => Ok(Some(path)),
        Some(path) => {
            debug!("Default config file {} not present", path.display());
            Ok(None)
        }
        None => Ok(None),
    }
}

/// Per-user default config file location
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("albums").join("config.toml"))
}
