use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default minimum visible generation delay in milliseconds.
const DEFAULT_MIN_DELAY_MS: u64 = 500;

fn default_min_delay_ms() -> u64 {
    DEFAULT_MIN_DELAY_MS
}

/// Global configuration loaded from `~/.config/pig/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PigConfig {
    /// Minimum visible delay for a generation, in milliseconds. Smooths the
    /// perceived latency of an otherwise instant URL swap; not a real
    /// dependency, so 0 is valid.
    #[serde(default = "default_min_delay_ms")]
    pub min_delay_ms: u64,
    /// Directory downloads are saved into (missing = current directory).
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
}

impl Default for PigConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: DEFAULT_MIN_DELAY_MS,
            download_dir: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pig")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PigConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PigConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: PigConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = PigConfig::default();
        assert_eq!(cfg.min_delay_ms, 500);
        assert!(cfg.download_dir.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = PigConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: PigConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.min_delay_ms, cfg.min_delay_ms);
        assert_eq!(parsed.download_dir, cfg.download_dir);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            min_delay_ms = 0
            download_dir = "/tmp/images"
        "#;
        let cfg: PigConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.min_delay_ms, 0);
        assert_eq!(cfg.download_dir.as_deref(), Some(std::path::Path::new("/tmp/images")));
    }

    #[test]
    fn config_toml_missing_fields_use_defaults() {
        let cfg: PigConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.min_delay_ms, 500);
        assert!(cfg.download_dir.is_none());
    }
}
