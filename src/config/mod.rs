//! @acp:module "Configuration"
//! @acp:summary "Project configuration loading and defaults"
//! @acp:domain cli
//! @acp:layer config

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::selection::ShuffleOptions;

pub const DEFAULT_CONFIG_FILE: &str = ".quizdeck.json";

fn default_version() -> String {
    "1.0.0".to_string()
}

/// @acp:summary "Main quizdeck configuration structure"
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Configuration format version
    #[serde(default = "default_version")]
    pub version: String,

    /// Directory searched for question databases
    #[serde(default = "default_sources_dir")]
    pub sources_dir: PathBuf,

    /// File name patterns treated as question databases (glob syntax)
    #[serde(default = "default_include")]
    pub include: Vec<String>,

    /// Database names (file stems) that are not loaded
    #[serde(default)]
    pub disabled_sources: Vec<String>,

    /// Preferences file override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<PathBuf>,

    /// Cycle construction tuning
    #[serde(default)]
    pub selection: ShuffleOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            sources_dir: default_sources_dir(),
            include: default_include(),
            disabled_sources: Vec::new(),
            preferences: None,
            selection: ShuffleOptions::default(),
        }
    }
}

impl Config {
    /// @acp:summary "Load config from a JSON file"
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @acp:summary "Load config if the file exists, otherwise use defaults"
    ///
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load_or_default<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Preferences file: explicit override, else the user config directory
    pub fn preferences_path(&self) -> PathBuf {
        self.preferences
            .clone()
            .unwrap_or_else(default_preferences_path)
    }
}

fn default_sources_dir() -> PathBuf {
    PathBuf::from("questions")
}

fn default_include() -> Vec<String> {
    vec![
        "*.json".to_string(),
        "*.yaml".to_string(),
        "*.yml".to_string(),
    ]
}

fn default_preferences_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("quizdeck")
        .join("preferences.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.sources_dir, PathBuf::from("questions"));
        assert_eq!(config.include.len(), 3);
        assert_eq!(config.selection.desired_cycle_size, 10.0);
        assert_eq!(config.selection.max_resample_passes, 1000);
    }

    #[test]
    fn test_partial_selection_override() {
        let config: Config =
            serde_json::from_str(r#"{ "selection": { "desiredCycleSize": 5 } }"#).unwrap();
        assert_eq!(config.selection.desired_cycle_size, 5.0);
        assert_eq!(config.selection.max_resample_passes, 1000);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        let mut config = Config::default();
        config.disabled_sources = vec!["sports".to_string()];
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.disabled_sources, vec!["sports".to_string()]);
    }

    #[test]
    fn test_load_or_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);

        let missing = Config::load_or_default(&path).unwrap();
        assert_eq!(missing.sources_dir, PathBuf::from("questions"));

        std::fs::write(&path, r#"{ "sourcesDir": "trivia" }"#).unwrap();
        let loaded = Config::load_or_default(&path).unwrap();
        assert_eq!(loaded.sources_dir, PathBuf::from("trivia"));

        std::fs::write(&path, "{ not json").unwrap();
        assert!(Config::load_or_default(&path).is_err());
    }

    #[test]
    fn test_preferences_override() {
        let config = Config {
            preferences: Some(PathBuf::from("/tmp/prefs.json")),
            ..Default::default()
        };
        assert_eq!(config.preferences_path(), PathBuf::from("/tmp/prefs.json"));
    }
}
