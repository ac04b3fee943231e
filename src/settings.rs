use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Defaults read from the optional `--config` file. Flags on the command
/// line take precedence over anything set here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log_level: String,
    pub pretty: bool,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            log_level: "info".to_owned(),
            pretty: false,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Settings, crate::inspect::ToolError> {
        let text = fs::read_to_string(path).map_err(|source| crate::inspect::ToolError::Config {
            path: path.display().to_string(),
            source: source.into(),
        })?;
        Settings::parse(&text).map_err(|source| crate::inspect::ToolError::Config {
            path: path.display().to_string(),
            source: source.into(),
        })
    }

    pub fn parse(text: &str) -> Result<Settings, serde_json::Error> {
        serde_json::from_str(text)
    }
}
