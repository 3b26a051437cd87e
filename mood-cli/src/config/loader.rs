use super::types::{
    DEFAULT_HOST, DEFAULT_PORT, MoodConfig, RawMoodConfig, RawServerConfig, RawStorageConfig,
    ServerConfig, StorageConfig,
};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load merged configuration (user + project)
    pub fn load() -> Result<MoodConfig> {
        let mut raw = RawMoodConfig::default();

        // Layer 1: User config
        let user_path = Self::user_config_path();
        if user_path.exists() {
            raw = Self::merge_raw(raw, Self::read_raw(&user_path)?);
        }

        // Layer 2: Project config
        let project_path = Self::project_config_path();
        if project_path.exists() {
            raw = Self::merge_raw(raw, Self::read_raw(&project_path)?);
        }

        Ok(Self::finalize(raw))
    }

    /// Get user config path (`$XDG_CONFIG_HOME/mood/config.toml` on every platform)
    pub fn user_config_path() -> PathBuf {
        mood_paths::config_dir().join("config.toml")
    }

    /// Get project config path
    /// Can be overridden with MOOD_PROJECT_CONFIG_DIR env var (useful for isolated e2e tests)
    pub fn project_config_path() -> PathBuf {
        if let Ok(dir) = std::env::var("MOOD_PROJECT_CONFIG_DIR") {
            PathBuf::from(dir).join("config.toml")
        } else {
            PathBuf::from(".mood/config.toml")
        }
    }

    fn read_raw(path: &Path) -> Result<RawMoodConfig> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Merge two raw configs (overlay values override base only if explicitly set)
    fn merge_raw(base: RawMoodConfig, overlay: RawMoodConfig) -> RawMoodConfig {
        RawMoodConfig {
            server: RawServerConfig {
                host: overlay.server.host.or(base.server.host),
                port: overlay.server.port.or(base.server.port),
            },
            storage: RawStorageConfig {
                data_file: overlay.storage.data_file.or(base.storage.data_file),
            },
        }
    }

    /// Convert raw config to final config with defaults applied
    fn finalize(raw: RawMoodConfig) -> MoodConfig {
        MoodConfig {
            server: ServerConfig {
                host: raw.server.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port: raw.server.port.unwrap_or(DEFAULT_PORT),
            },
            storage: StorageConfig {
                data_file: raw
                    .storage
                    .data_file
                    .unwrap_or_else(mood_paths::feedback_file),
            },
        }
    }
}
