use serde::Deserialize;
use std::path::Path;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::Yaml(err) => write!(f, "yaml error: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err)
    }
}

/// Display settings. Read once before the window opens, so this load is
/// synchronous; a missing file just means defaults.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_width: i32,
    pub window_height: i32,
    pub show_hitboxes: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 800,
            show_hitboxes: false,
        }
    }
}

impl Settings {
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        if !Path::new(path).exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let settings = serde_yaml::from_str(&raw)?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let s = Settings::load_from("does-not-exist.yaml").unwrap();
        assert_eq!(s.window_width, 1280);
        assert_eq!(s.window_height, 800);
        assert!(!s.show_hitboxes);
    }

    #[test]
    fn partial_yaml_keeps_remaining_defaults() {
        let s: Settings = serde_yaml::from_str("window_width: 640\n").unwrap();
        assert_eq!(s.window_width, 640);
        assert_eq!(s.window_height, 800);
    }

    #[test]
    fn malformed_yaml_reports_error() {
        let err = serde_yaml::from_str::<Settings>("window_width: [not a number").unwrap_err();
        assert!(ConfigError::from(err).to_string().contains("yaml error"));
    }
}
