//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`PLINTH_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;
use std::time::Duration;

use plinth_probe::ProbeTarget;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Pulse sketch configuration
    #[serde(default)]
    pub pulse: PulseConfig,
    /// Scanner dashboard configuration
    #[serde(default)]
    pub scanner: ScannerConfig,
    /// Dashboard grid layout
    #[serde(default)]
    pub grid: GridConfig,
    /// Scan scheduling
    #[serde(default)]
    pub scan: ScanConfig,
    /// Network reachability probe
    #[serde(default)]
    pub network: NetworkConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`PLINTH_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // PLINTH_WINDOW__WIDTH=800 -> window.width = 800
        figment = figment.merge(Env::prefixed("PLINTH_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
        }
    }
}

/// Pulse sketch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PulseConfig {
    /// Window title (and the name greeted on screen)
    pub title: String,
    /// Startup background gray level (0-255)
    pub background_gray: u8,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            title: "plinth".to_string(),
            background_gray: 10,
        }
    }
}

/// Scanner dashboard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Window title
    pub title: String,
    /// Background gray level (0-255)
    pub background_gray: u8,
    /// Start with auto-refresh enabled
    pub auto_refresh: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            title: "System Scanner - Interactive Installation".to_string(),
            background_gray: 15,
            auto_refresh: true,
        }
    }
}

/// Dashboard grid layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of columns
    pub cols: u32,
    /// Number of rows
    pub rows: u32,
    /// Margin between cells and around the grid, in pixels
    pub margin: f32,
    /// Height reserved at the bottom for the settings strip, in pixels
    pub footer_height: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cols: 4,
            rows: 3,
            margin: 20.0,
            footer_height: 100.0,
        }
    }
}

/// Scan scheduling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Auto-refresh interval in seconds
    pub interval_secs: f32,
    /// Network re-check interval in seconds
    pub network_interval_secs: f32,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            interval_secs: 10.0,
            network_interval_secs: 5.0,
        }
    }
}

/// Network reachability probe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Host to probe
    pub host: String,
    /// TCP port to connect to
    pub port: u16,
    /// Connect timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            host: "google.com".to_string(),
            port: 80,
            timeout_ms: 3000,
        }
    }
}

impl NetworkConfig {
    /// Probe target for the worker
    pub fn to_probe_target(&self) -> ProbeTarget {
        ProbeTarget {
            host: self.host.clone(),
            port: self.port,
            timeout: Duration::from_millis(self.timeout_ms),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1024);
        assert_eq!(config.grid.cols, 4);
        assert_eq!(config.grid.rows, 3);
        assert_eq!(config.scan.interval_secs, 10.0);
        assert!(config.scanner.auto_refresh);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("footer_height"));
        assert!(toml.contains("google.com"));
    }

    #[test]
    fn test_probe_target_conversion() {
        let target = NetworkConfig::default().to_probe_target();
        assert_eq!(target.host, "google.com");
        assert_eq!(target.port, 80);
        assert_eq!(target.timeout, Duration::from_secs(3));
    }
}
