use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::zones::ZoneConfig;

const LOCAL_CONFIG_PATH: &str = "gyip.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/gyip/config.toml";

/// Main configuration structure for gyip
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (port, hosts, protocols)
    #[serde(default)]
    pub server: ServerConfig,

    /// Zones answered from the query name
    #[serde(default)]
    pub zones: ZoneConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. gyip.toml in current directory
    /// 3. /etc/gyip/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::get_config_path() {
                Some(found) => Self::from_file(&found)?,
                None => Self::default(),
            },
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(domains) = overrides.domains {
            self.zones.domains = vec![domains];
        }
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(hosts) = overrides.bind_hosts {
            self.server.bind_hosts = hosts
                .split(',')
                .map(str::trim)
                .filter(|h| !h.is_empty())
                .map(str::to_string)
                .collect();
        }
        if overrides.tcp_off {
            self.server.tcp_enabled = false;
        }
        if overrides.udp_off {
            self.server.udp_enabled = false;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if !self.server.tcp_enabled && !self.server.udp_enabled {
            return Err(ConfigError::Validation(
                "TCP and UDP cannot both be disabled".to_string(),
            ));
        }

        if self.zones.valid_domains().is_empty() {
            return Err(ConfigError::NoServedZones(self.zones.domains.clone()));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    /// Comma separated zone list
    pub domains: Option<String>,
    pub dns_port: Option<u16>,
    /// Comma separated bind hosts
    pub bind_hosts: Option<String>,
    pub tcp_off: bool,
    pub udp_off: bool,
    pub log_level: Option<String>,
}
