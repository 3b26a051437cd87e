//! XDG Base Directory paths for mood.
//!
//! Like gh or kubectl, mood uses XDG paths on every platform rather than
//! platform-native locations.

use std::path::PathBuf;

/// File name of the feedback log inside the data directory.
pub const FEEDBACK_FILE: &str = "feedback_data.csv";

/// Get the mood config directory.
///
/// Returns `$XDG_CONFIG_HOME/mood` if set, otherwise `~/.config/mood`.
///
/// # Examples
///
/// ```
/// use mood_paths::config_dir;
///
/// let config = config_dir();
/// let file = config.join("config.toml");
/// ```
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg_config).join("mood")
    } else if let Some(home) = dirs::home_dir() {
        home.join(".config/mood")
    } else {
        PathBuf::from(".config/mood")
    }
}

/// Get the mood data directory.
///
/// Returns `$XDG_DATA_HOME/mood` if set, otherwise `~/.local/share/mood`.
pub fn data_dir() -> PathBuf {
    if let Ok(xdg_data) = std::env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg_data).join("mood")
    } else if let Some(home) = dirs::home_dir() {
        home.join(".local/share/mood")
    } else {
        PathBuf::from(".local/share/mood")
    }
}

/// Default location of the feedback log.
///
/// # Examples
///
/// ```
/// use mood_paths::feedback_file;
///
/// assert!(feedback_file().ends_with("feedback_data.csv"));
/// ```
pub fn feedback_file() -> PathBuf {
    data_dir().join(FEEDBACK_FILE)
}
