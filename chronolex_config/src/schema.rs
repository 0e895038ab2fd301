use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Context;
use chronolex_core::{Culture, DateTimeOptions, PatternDef};
use chronolex_locales::LocaleRequest;
use tracing::{debug, info};

const CONFIG_DIR: &str = "chronolex";
const CONFIG_FILE: &str = "config.json";

const CONFIG_TEMPLATE: &str = r#"{
  "locales": [
    { "culture": "en-us" },
    { "culture": "fr-fr" },
    { "culture": "pt-br" },
    { "culture": "de-de" }
  ],
  "log_level": "info"
}
"#;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "Config::default_locales")]
    pub locales: Vec<LocaleEntry>,
    #[serde(default = "Config::default_log_level")]
    pub log_level: String,
}

/// One locale to compose at startup.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LocaleEntry {
    /// Culture tag such as `en-us` or `pt`.
    pub culture: String,
    #[serde(default)]
    pub options: DateTimeOptions,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pattern_overrides: Vec<PatternDef>,
}

impl LocaleEntry {
    #[must_use]
    pub fn new(culture: Culture) -> Self {
        Self {
            culture: culture.as_str().to_string(),
            options: DateTimeOptions::default(),
            pattern_overrides: Vec::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales: Self::default_locales(),
            log_level: Self::default_log_level(),
        }
    }
}

impl Config {
    fn default_locales() -> Vec<LocaleEntry> {
        Culture::ALL.into_iter().map(LocaleEntry::new).collect()
    }

    fn default_log_level() -> String {
        "info".to_string()
    }

    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'chronolex init' to create config.",
                config_path.display()
            );
        }

        Self::load_from(&config_path)
    }

    /// Like [`Config::load`], but falls back to the built-in defaults when no
    /// file exists. A file that exists and fails to parse is still an error.
    pub fn load_or_default() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            debug!(path = %config_path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_json_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        info!(path = %path.display(), locales = config.locales.len(), "Loaded config");
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        if config.locales.is_empty() {
            anyhow::bail!("Config must list at least one locale");
        }
        Ok(config)
    }

    /// Turn the locale entries into registry requests, rejecting unknown
    /// culture tags.
    pub fn requests(&self) -> anyhow::Result<Vec<LocaleRequest>> {
        self.locales
            .iter()
            .map(|entry| -> anyhow::Result<LocaleRequest> {
                let culture = Culture::from_str(&entry.culture)?;
                Ok(LocaleRequest {
                    culture,
                    options: entry.options,
                    pattern_overrides: entry.pattern_overrides.clone(),
                })
            })
            .collect()
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    /// Write the config template to `~/chronolex/config.json`.
    pub fn create_config() -> anyhow::Result<PathBuf> {
        let config_dir = Self::ensure_config_dir()?;
        Self::create_config_in(&config_dir)
    }

    /// Write the config template into `dir`; refuses to overwrite.
    pub fn create_config_in(dir: &Path) -> anyhow::Result<PathBuf> {
        let config_path = dir.join(CONFIG_FILE);

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        std::fs::write(&config_path, CONFIG_TEMPLATE)?;
        info!(path = %config_path.display(), "Created config file");
        Ok(config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronolex_core::PatternKey;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_template_parses() {
        let config = Config::from_json_str(CONFIG_TEMPLATE).expect("template should parse");
        assert_eq!(config.locales.len(), 4);
        assert_eq!(config.log_level, "info");

        let requests = config.requests().expect("template cultures should resolve");
        assert_eq!(requests[2].culture, Culture::Portuguese);
        assert!(requests.iter().all(|r| r.options == DateTimeOptions::default()));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_template_matches_default() {
        let config = Config::from_json_str(CONFIG_TEMPLATE).expect("template should parse");
        assert_eq!(config, Config::default());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_overrides_and_defaults() {
        let config = Config::from_json_str(
            r#"{
                "locales": [
                    { "culture": "en",
                      "options": { "calendar": true },
                      "pattern_overrides": [ { "key": "now", "pattern": "\\bnow\\b" } ] }
                ]
            }"#,
        )
        .expect("config should parse");

        assert_eq!(config.log_level, "info");
        let requests = config.requests().expect("culture should resolve");
        assert_eq!(requests[0].culture, Culture::English);
        assert!(requests[0].options.calendar);
        assert_eq!(requests[0].pattern_overrides[0].key, PatternKey::Now);
    }

    #[test]
    fn test_missing_locales_use_defaults() {
        let config = Config::from_json_str(r#"{ "log_level": "debug" }"#);
        assert!(matches!(config, Ok(ref c) if c.locales.len() == 4 && c.log_level == "debug"));
    }

    #[test]
    fn test_empty_locales_rejected() {
        assert!(Config::from_json_str(r#"{ "locales": [] }"#).is_err());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_unknown_culture_rejected() {
        let config = Config::from_json_str(r#"{ "locales": [ { "culture": "ja-jp" } ] }"#)
            .expect("config should parse");
        let err = config.requests().expect_err("ja-jp has no locale module");
        assert!(err.to_string().contains("ja-jp"));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_create_config_refuses_overwrite() {
        let dir = std::env::temp_dir().join(format!("chronolex-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("temp dir should be writable");

        let path = Config::create_config_in(&dir).expect("first write should succeed");
        let loaded = Config::load_from(&path).expect("written template should load");
        assert_eq!(loaded.locales.len(), 4);
        assert!(Config::create_config_in(&dir).is_err());

        std::fs::remove_dir_all(&dir).expect("temp dir should be removable");
    }
}
