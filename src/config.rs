//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! We try to find a memit.toml in the working directory, and if present we load settings from
//! there. This provides the file extensions walked in directories and the chunk cap.

use facet::Facet;
use std::fs;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "memit.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from memit.toml or falling back to defaults.
pub struct Config {
    #[facet(default = vec!["md".to_string(), "mdown".to_string(), "txt".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
    #[facet(default = 20)]
    /// Most chunks offered in one session.
    pub max_chunks: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_extensions: vec!["md".to_string(), "mdown".to_string(), "txt".to_string()],
            max_chunks: 20,
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from memit.toml if present.
    pub fn load() -> Self {
        match fs::read_to_string(CONFIG_FILE) {
            Ok(contents) => Self::from_toml(&contents),
            Err(_) => Self::default(),
        }
    }

    #[must_use]
    /// Parse configuration text, falling back to defaults if it is invalid.
    pub fn from_toml(contents: &str) -> Self {
        match facet_toml::from_str::<Self>(contents) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring invalid {CONFIG_FILE}: {e}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
