use std::path::PathBuf;

use serde::Deserialize;

use crate::document::ParseOptions;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    /// Parsing defaults applied to every file the CLI opens.
    #[serde(default)]
    pub format: ParseOptions,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Configuration after defaults are applied and paths expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub format: ParseOptions,
    pub logging: LoggingConfig,
}
