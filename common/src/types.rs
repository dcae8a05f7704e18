//! 検出サービスとのやり取りの型定義
//!
//! - ServiceBody: `/upload` レスポンスボディ（成功・失敗共通）
//! - ServerReply: HTTPレスポンス1件をトランスポート非依存にしたもの
//! - TransportFailure: レスポンスが得られなかった場合

use serde::{Deserialize, Serialize};

/// `/upload` のレスポンスボディ
///
/// すべて任意項目。空文字列は未設定として扱う。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceBody {
    /// 検出結果テキスト
    pub result: Option<String>,
    /// アプリケーションエラー（HTTP 2xxでも失敗扱い）
    pub error: Option<String>,
    /// 表示用画像のURL（絶対・相対どちらも可）
    pub image_path: Option<String>,
    /// サーバー上の画像ファイル名（`image_path`がない場合に使用）
    pub image: Option<String>,
    /// 失敗時のユーザー向けメッセージ
    pub message: Option<String>,
}

impl ServiceBody {
    pub fn parse(text: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn result(&self) -> Option<&str> {
        non_empty(&self.result)
    }

    pub fn error(&self) -> Option<&str> {
        non_empty(&self.error)
    }

    pub fn image_path(&self) -> Option<&str> {
        non_empty(&self.image_path)
    }

    pub fn image(&self) -> Option<&str> {
        non_empty(&self.image)
    }

    pub fn message(&self) -> Option<&str> {
        non_empty(&self.message)
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// 受信したHTTPレスポンス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerReply {
    pub status: u16,
    pub status_text: String,
    /// JSONオブジェクトとして読めなかった場合はNone
    pub body: Option<ServiceBody>,
}

impl ServerReply {
    pub fn new(status: u16, status_text: impl Into<String>, body: Option<ServiceBody>) -> Self {
        Self { status, status_text: status_text.into(), body }
    }

    /// 2xxかどうか
    pub fn is_http_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// レスポンスを得られなかった送信
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportFailure {
    /// 送信済みだが応答なし（接続断など）
    NoResponse,
    /// 送信前に失敗（リクエスト構築・ファイル読込など）
    PreSend(String),
}
