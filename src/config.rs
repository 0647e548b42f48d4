use crate::error::{DgReviewError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Webダッシュボードのビルド成果物（index.html等）
    pub static_dir: PathBuf,
    /// 手動アップロードの保存先
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
    /// RUST_LOG未設定時のログフィルタ
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            static_dir: PathBuf::from("public"),
            upload_dir: PathBuf::from("uploads"),
            max_upload_bytes: 25 * 1024 * 1024,
            log_filter: "info".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            serde_json::from_str(&content)?
        } else {
            Self::default()
        };
        config.apply_env()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| DgReviewError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("dg-review").join("config.json"))
    }

    /// 環境変数PORTを優先
    fn apply_env(&mut self) -> Result<()> {
        if let Ok(port) = std::env::var("PORT") {
            self.port = parse_port(&port)?;
        }
        Ok(())
    }

    pub fn set_port(&mut self, port: u16) -> Result<()> {
        self.port = port;
        self.save()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(value: &str) -> Result<u16> {
    value
        .trim()
        .parse()
        .map_err(|_| DgReviewError::Config(format!("PORTが不正です: {}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.upload_dir, PathBuf::from("uploads"));
    }

    #[test]
    fn test_partial_config_file_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"port": 8080}"#).expect("config");
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port("4000").ok(), Some(4000));
        assert_eq!(parse_port(" 80 ").ok(), Some(80));
        assert!(matches!(parse_port("abc"), Err(DgReviewError::Config(_))));
        assert!(parse_port("70000").is_err());
    }
}
