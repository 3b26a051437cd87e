use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use mood_server::{DEFAULT_HOST, DEFAULT_PORT};

/// Configuration as stored in TOML files (with optional fields for merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawMoodConfig {
    #[serde(default)]
    pub server: RawServerConfig,

    #[serde(default)]
    pub storage: RawStorageConfig,
}

/// Server config as stored in TOML (optional fields for proper merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawServerConfig {
    /// Host for the mood server
    pub host: Option<String>,

    /// Port for the mood server
    pub port: Option<u16>,
}

/// Storage config as stored in TOML
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawStorageConfig {
    /// Feedback log location
    pub data_file: Option<PathBuf>,
}

/// Final configuration with defaults applied
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MoodConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host for the mood server
    pub host: String,

    /// Port for the mood server
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Feedback log location
    pub data_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: mood_paths::feedback_file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = MoodConfig::default();
        assert_eq!(config.server.host, DEFAULT_HOST);
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert!(config.storage.data_file.ends_with("feedback_data.csv"));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = MoodConfig {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            storage: StorageConfig {
                data_file: PathBuf::from("/srv/mood/feedback_data.csv"),
            },
        };

        let toml_str = toml::to_string(&config).unwrap();
        let parsed: MoodConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.server.host, "0.0.0.0");
        assert_eq!(parsed.server.port, 8080);
        assert_eq!(
            parsed.storage.data_file,
            PathBuf::from("/srv/mood/feedback_data.csv")
        );
    }

    #[test]
    fn test_raw_config_partial_parsing() {
        let toml_str = r#"
[server]
port = 9000
"#;
        let raw: RawMoodConfig = toml::from_str(toml_str).unwrap();

        // Only port was set
        assert_eq!(raw.server.port, Some(9000));
        assert!(raw.server.host.is_none());
        assert!(raw.storage.data_file.is_none());
    }

    #[test]
    fn test_raw_config_empty_uses_none() {
        let raw: RawMoodConfig = toml::from_str("").unwrap();

        assert!(raw.server.port.is_none());
        assert!(raw.server.host.is_none());
        assert!(raw.storage.data_file.is_none());
    }
}
