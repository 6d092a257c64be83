use std::path::PathBuf;

use anyhow::Context;

#[derive(serde::Serialize, serde::Deserialize, Default, Debug, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Key and style used when the command line leaves them out
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DefaultsConfig {
    pub root: String,
    pub scale: String,
    pub style: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            root: "C".to_string(),
            scale: "Major".to_string(),
            style: "Pop".to_string(),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub show_inversions: bool,
    pub json: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_inversions: true,
            json: false,
        }
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fretlab")
        .join("config.toml")
}

/// Read the config file, falling back to defaults when it is missing or
/// unreadable.
pub fn load_config() -> AppConfig {
    let path = config_path();
    let Ok(text) = std::fs::read_to_string(&path) else {
        tracing::debug!("No config at {}, using defaults", path.display());
        return AppConfig::default();
    };
    parse_config(&text).unwrap_or_else(|e| {
        tracing::warn!("Ignoring invalid config {}: {}", path.display(), e);
        AppConfig::default()
    })
}

pub fn parse_config(text: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(text)
}

pub fn save_config(config: &AppConfig) -> anyhow::Result<PathBuf> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let text = toml::to_string_pretty(config).context("serializing config")?;
    std::fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}
