//! Configuration with layered hierarchy
//!
//! Paths and the focus investor are never resolved at import time or
//! hardcoded; everything flows through this object, which the CLI layer
//! builds once and passes down.

use serde::Deserialize;
use std::path::PathBuf;

/// OAT configuration with layered hierarchy
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory containing the CSV datasets
    pub data_dir: Option<PathBuf>,

    /// Directory for exports and chart documents
    pub output_dir: Option<PathBuf>,

    /// Investor for the deep-dive and time-series sections
    pub focus_investor: Option<String>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/oat/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                if let Ok(contents) = std::fs::read_to_string(&global_path) {
                    if let Ok(global) = serde_yml::from_str::<Config>(&contents) {
                        config.merge(global);
                    }
                }
            }
        }

        // 3. Project config (./.oat/config.yaml)
        let project_config_path = PathBuf::from(".oat/config.yaml");
        if project_config_path.exists() {
            if let Ok(contents) = std::fs::read_to_string(&project_config_path) {
                if let Ok(project) = serde_yml::from_str::<Config>(&contents) {
                    config.merge(project);
                }
            }
        }

        // 4. Environment variables
        if let Ok(dir) = std::env::var("OAT_DATA_DIR") {
            config.data_dir = Some(PathBuf::from(dir));
        }
        if let Ok(dir) = std::env::var("OAT_OUTPUT_DIR") {
            config.output_dir = Some(PathBuf::from(dir));
        }
        if let Ok(name) = std::env::var("OAT_FOCUS_INVESTOR") {
            config.focus_investor = Some(name);
        }

        config
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "oat")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.data_dir.is_some() {
            self.data_dir = other.data_dir;
        }
        if other.output_dir.is_some() {
            self.output_dir = other.output_dir;
        }
        if other.focus_investor.is_some() {
            self.focus_investor = other.focus_investor;
        }
    }

    /// Data directory, defaulting to ./data
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("data"))
    }

    /// Output directory, defaulting to ./output
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("output"))
    }

    /// Focus investor, defaulting to the fund the shipped datasets track
    pub fn focus_investor(&self) -> String {
        self.focus_investor
            .clone()
            .unwrap_or_else(|| "Norges Bank (NBIM)".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_prefers_other() {
        let mut base = Config {
            data_dir: Some(PathBuf::from("/base/data")),
            output_dir: None,
            focus_investor: Some("A".to_string()),
        };
        base.merge(Config {
            data_dir: Some(PathBuf::from("/override/data")),
            output_dir: Some(PathBuf::from("/override/out")),
            focus_investor: None,
        });

        assert_eq!(base.data_dir(), PathBuf::from("/override/data"));
        assert_eq!(base.output_dir(), PathBuf::from("/override/out"));
        assert_eq!(base.focus_investor(), "A");
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.data_dir(), PathBuf::from("data"));
        assert_eq!(config.output_dir(), PathBuf::from("output"));
    }
}
