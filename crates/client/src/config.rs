//! Client configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

/// Shell configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Directory holding `config.toml`, `elements.ron` and `recipes.ron`.
    /// Built-in content is used when unset.
    pub data_dir: Option<PathBuf>,
    /// Write logs to a file in this directory instead of stderr.
    pub log_dir: Option<PathBuf>,
    pub ui: UiConfig,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ALCHEMY_DATA_DIR` - Content directory (default: built-in content)
    /// - `ALCHEMY_LOG_DIR` - Log file directory (default: log to stderr)
    /// - `ALCHEMY_SHOW_LOCKED` - List locked elements in the menu (default: false)
    /// - `ALCHEMY_MESSAGE_CAPACITY` - Notices kept in the log (default: 16)
    pub fn from_env() -> Self {
        let mut config = Self {
            data_dir: read_env_path("ALCHEMY_DATA_DIR"),
            log_dir: read_env_path("ALCHEMY_LOG_DIR"),
            ui: UiConfig::default(),
        };

        if let Some(show) = read_env_bool("ALCHEMY_SHOW_LOCKED") {
            config.ui.show_locked = show;
        }
        if let Some(capacity) = read_env::<usize>("ALCHEMY_MESSAGE_CAPACITY") {
            config.ui.message_capacity = capacity.max(1);
        }

        config
    }
}

/// Menu and notice display settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiConfig {
    /// List locked elements (marked, not selectable) alongside unlocked ones.
    pub show_locked: bool,
    pub message_capacity: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_locked: false,
            message_capacity: 16,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_path(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn read_env_bool(key: &str) -> Option<bool> {
    parse_bool(&env::var(key).ok()?)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
