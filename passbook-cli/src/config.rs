use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Owner id used when `--owner` is not passed
    pub default_owner: String,
    #[serde(default)]
    pub ai: AiSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AiSection {
    /// Allow `parse --ai-fallback` to call the model API
    pub enabled: bool,
    /// Overrides for the model names (env still wins for the API key)
    pub statement_model: Option<String>,
    pub receipt_model: Option<String>,
}

impl Default for AiSection {
    fn default() -> Self {
        Self {
            enabled: true,
            statement_model: None,
            receipt_model: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_owner: "local".to_string(),
            ai: AiSection::default(),
        }
    }
}

pub fn passbook_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".passbook"))
}

pub fn config_path(home: &Path) -> PathBuf {
    home.join("config.toml")
}

pub fn load_config(home: &Path) -> Result<Config> {
    let p = config_path(home);
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).context("parse config.toml")
}

pub fn save_config(home: &Path, cfg: &Config) -> Result<()> {
    fs::create_dir_all(home).with_context(|| format!("create {}", home.display()))?;
    let p = config_path(home);
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

/// Write default config unless one exists. Returns the path and whether it was created.
pub fn init_config(home: &Path) -> Result<(PathBuf, bool)> {
    let p = config_path(home);
    if p.exists() {
        return Ok((p, false));
    }
    save_config(home, &Config::default())?;
    Ok((p, true))
}
