//! Configuration loading and endpoint resolution
//!
//! Settings sources priority:
//! 1. Command-line arguments
//! 2. Environment variables (XPNS_*)
//! 3. TOML configuration file (`~/.config/xpns/<module>.toml`)
//! 4. Compiled defaults
//!
//! Missing or malformed TOML files degrade to defaults with a warning;
//! startup never terminates over configuration. The compiled default for
//! the webhook URL is a placeholder, and the submission pipeline refuses
//! to send while it is in effect.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Unconfigured webhook placeholder value
pub const PLACEHOLDER_WEB_APP_URL: &str = "YOUR_GOOGLE_SCRIPT_WEB_APP_URL";

/// Sheet the webhook writes into unless overridden
pub const DEFAULT_SHEET_NAME: &str = "2025";

/// xpns-fe standard port
pub const DEFAULT_PORT: u16 = 5780;

pub const WEB_APP_URL_ENV: &str = "XPNS_WEB_APP_URL";
pub const SHEET_NAME_ENV: &str = "XPNS_SHEET_NAME";
pub const PORT_ENV: &str = "XPNS_FE_PORT";

/// Bootstrap configuration loaded from a TOML file.
///
/// Minimal by design: only settings that cannot change while the service
/// is running. Every field is optional so partial files parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Google Apps Script web app URL
    #[serde(default)]
    pub web_app_url: Option<String>,

    /// Target sheet inside the spreadsheet
    #[serde(default)]
    pub sheet_name: Option<String>,

    /// HTTP listen port
    #[serde(default)]
    pub port: Option<u16>,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path (optional, logs to stderr if not specified)
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TomlConfig {
    /// Platform config file path for a module: `~/.config/xpns/<module>.toml`
    pub fn config_file_path(module_name: &str) -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("xpns").join(format!("{}.toml", module_name)))
    }

    /// Load the module's TOML config, degrading to defaults when the file
    /// is missing, unreadable, or malformed.
    pub fn load(module_name: &str) -> Self {
        let path = match Self::config_file_path(module_name) {
            Some(path) => path,
            None => {
                warn!("Could not determine config directory, using defaults");
                return Self::default();
            }
        };

        if !path.exists() {
            // Normal on first run; all settings have compiled defaults.
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))
    }
}

/// Resolved webhook endpoint the submission pipeline talks to
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointConfig {
    pub web_app_url: String,
    pub sheet_name: String,
}

impl EndpointConfig {
    /// False while the URL is blank or still equals the compiled
    /// placeholder; the pipeline refuses to send in that state.
    pub fn is_configured(&self) -> bool {
        !self.web_app_url.trim().is_empty() && self.web_app_url != PLACEHOLDER_WEB_APP_URL
    }
}

/// Resolve the webhook endpoint with CLI → ENV → TOML → default priority
pub fn resolve_endpoint(
    cli_url: Option<&str>,
    cli_sheet: Option<&str>,
    toml_config: &TomlConfig,
) -> EndpointConfig {
    let web_app_url = resolve_string(
        cli_url,
        WEB_APP_URL_ENV,
        toml_config.web_app_url.as_deref(),
        PLACEHOLDER_WEB_APP_URL,
        "web app URL",
    );
    let sheet_name = resolve_string(
        cli_sheet,
        SHEET_NAME_ENV,
        toml_config.sheet_name.as_deref(),
        DEFAULT_SHEET_NAME,
        "sheet name",
    );
    EndpointConfig {
        web_app_url,
        sheet_name,
    }
}

fn resolve_string(
    cli: Option<&str>,
    env_var: &str,
    toml_value: Option<&str>,
    default: &str,
    what: &str,
) -> String {
    if let Some(value) = cli {
        info!("{} taken from command line", what);
        return value.to_string();
    }
    if let Ok(value) = std::env::var(env_var) {
        if !value.trim().is_empty() {
            info!("{} taken from {}", what, env_var);
            return value;
        }
    }
    if let Some(value) = toml_value {
        info!("{} taken from TOML config", what);
        return value.to_string();
    }
    default.to_string()
}

/// Resolve the listen port with CLI → ENV → TOML → default priority.
///
/// An unparseable environment value is ignored with a warning rather than
/// failing startup.
pub fn resolve_port(cli: Option<u16>, toml_config: &TomlConfig) -> u16 {
    if let Some(port) = cli {
        return port;
    }
    if let Ok(value) = std::env::var(PORT_ENV) {
        match value.parse::<u16>() {
            Ok(port) => return port,
            Err(_) => warn!("Ignoring invalid {}: {:?}", PORT_ENV, value),
        }
    }
    toml_config.port.unwrap_or(DEFAULT_PORT)
}
