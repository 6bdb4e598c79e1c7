use crate::error::{PortfolioError, Result};
use ledgers_common::CoordinatorConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const BASE_PATH_ENV: &str = "LEDGERS_BASE_PATH";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// デプロイ先のベースパス（例: "/portfolio"）
    pub base_path: String,
    pub site_url: String,
    /// 既定のカタログJSON（未指定ならサイト組み込み）
    pub catalog: Option<PathBuf>,
    pub ui: CoordinatorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            log::debug!("config loaded: {}", config_path.display());
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PortfolioError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("ledgers-portfolio").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            base_path: String::new(),
            site_url: "https://yourdomain.com".into(),
            catalog: None,
            ui: CoordinatorConfig::default(),
        }
    }

    /// 環境変数を優先
    pub fn base_path(&self) -> String {
        std::env::var(BASE_PATH_ENV).unwrap_or_else(|_| self.base_path.clone())
    }

    pub fn set_interval_ms(&mut self, interval_ms: u32) {
        self.ui.auto_advance_ms = interval_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().expect("Failed to create temp dir");
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.ui.auto_advance_ms, 4000);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.set_interval_ms(1500);
        config.base_path = "/portfolio".into();
        config.save_to(&path).expect("設定保存失敗");

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.ui.auto_advance_ms, 1500);
        assert_eq!(loaded.base_path, "/portfolio");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"ui": {"autoAdvanceMs": 2000}}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.ui.auto_advance_ms, 2000);
        assert_eq!(config.ui.testimonial_autoplay_ms, 5000);
        assert_eq!(config.site_url, "https://yourdomain.com");
    }

    #[test]
    fn test_broken_file_is_error() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{").unwrap();
        assert!(matches!(Config::load_from(&path), Err(PortfolioError::JsonParse(_))));
    }
}
