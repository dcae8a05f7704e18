//! 検出サービスのエンドポイント
//!
//! ベースアドレスからアップロード先URLと、サーバー上の画像URLを組み立てる

use crate::error::{Error, Result};

/// 既定のベースアドレス
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

const UPLOAD_PATH: &str = "/upload";
const UPLOADS_DIR: &str = "/uploads/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base_url: String,
}

impl Endpoint {
    /// ベースアドレスを検証して生成（末尾の`/`は除去）
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(Error::Config("base URL is empty".into()));
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(Error::Config(format!(
                "base URL must start with http:// or https://: {}",
                base_url
            )));
        }
        Ok(Self { base_url: trimmed.to_string() })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST`先: `{base}/upload`
    pub fn upload_url(&self) -> String {
        format!("{}{}", self.base_url, UPLOAD_PATH)
    }

    /// サーバーが返したファイル名の表示URL: `{base}/uploads/{name}`
    pub fn uploaded_image_url(&self, file_name: &str) -> String {
        format!("{}{}{}", self.base_url, UPLOADS_DIR, file_name)
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string() }
    }
}
