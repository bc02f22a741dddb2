use serde::Deserialize;
use std::path::Path;

/// Root application configuration. Loaded from an optional TOML file and
/// environment variables with the prefix `ADCRAFT__`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    /// Simulated backend latency before the mock generator runs.
    #[serde(default = "default_mock_delay_ms")]
    pub mock_delay_ms: u64,
    /// Reject unrecognized platform/goal/tone/length labels instead of
    /// falling back to generic copy.
    #[serde(default)]
    pub strict_inputs: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClipboardConfig {
    /// Shell-style command that receives copied text on stdin.
    #[serde(default = "default_clipboard_command")]
    pub command: String,
    /// File written when the clipboard command is unavailable.
    #[serde(default = "default_fallback_path")]
    pub fallback_path: String,
}

// Default functions
fn default_mock_delay_ms() -> u64 {
    700
}
fn default_toast_duration_ms() -> u64 {
    1800
}
fn default_clipboard_command() -> String {
    "xclip -selection clipboard".to_string()
}
fn default_fallback_path() -> String {
    "adcraft-clipboard.txt".to_string()
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            mock_delay_ms: default_mock_delay_ms(),
            strict_inputs: false,
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            command: default_clipboard_command(),
            fallback_path: default_fallback_path(),
        }
    }
}

impl AppConfig {
    /// Load configuration from an optional TOML file, then environment
    /// variables (which take precedence).
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(false));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("ADCRAFT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.generation.mock_delay_ms, 700);
        assert!(!config.generation.strict_inputs);
        assert_eq!(config.notifications.toast_duration_ms, 1800);
        assert_eq!(config.clipboard.fallback_path, "adcraft-clipboard.txt");
    }

    #[test]
    fn test_load_from_toml_file() {
        let path = std::env::temp_dir().join(format!(
            "adcraft-config-test-{}.toml",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[generation]\nmock_delay_ms = 25\nstrict_inputs = true").unwrap();
        writeln!(file, "[clipboard]\ncommand = \"pbcopy\"").unwrap();
        drop(file);

        let config = AppConfig::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.generation.mock_delay_ms, 25);
        assert!(config.generation.strict_inputs);
        assert_eq!(config.clipboard.command, "pbcopy");
        assert_eq!(config.notifications.toast_duration_ms, 1800);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = Path::new("/nonexistent/adcraft.toml");
        let config = AppConfig::load(Some(path)).unwrap();
        assert_eq!(config.generation.mock_delay_ms, 700);
    }
}
