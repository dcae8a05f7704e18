use crate::error::{DetectError, Result};
use accident_detect_common::Endpoint;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// ベースアドレスを上書きする環境変数
pub const BASE_URL_ENV: &str = "ACCIDENT_DETECT_URL";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
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
            .ok_or_else(|| DetectError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("accident-detect").join("config.json"))
    }

    /// 検証してから保存
    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        let endpoint = Endpoint::new(&url)?;
        self.base_url = Some(endpoint.base_url().to_string());
        self.save()
    }

    /// 優先順位: コマンドライン引数 → 環境変数 → 設定ファイル → 既定値
    pub fn resolve_endpoint(&self, cli_url: Option<&str>) -> Result<Endpoint> {
        let env_url = std::env::var(BASE_URL_ENV).ok().filter(|v| !v.trim().is_empty());
        self.resolve_endpoint_with(cli_url, env_url.as_deref())
    }

    fn resolve_endpoint_with(&self, cli_url: Option<&str>, env_url: Option<&str>) -> Result<Endpoint> {
        let chosen = cli_url.or(env_url).or(self.base_url.as_deref());
        match chosen {
            Some(url) => Ok(Endpoint::new(url)?),
            None => Ok(Endpoint::default()),
        }
    }
}
