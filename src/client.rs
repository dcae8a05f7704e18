//! 検出サービスへのmultipartアップロード（reqwest）

use crate::error::{DetectError, Result};
use crate::image_file::ImageFile;
use accident_detect_common::{Endpoint, ServerReply, ServiceBody, TransportFailure};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::{debug, warn};

/// multipartのフィールド名
pub const FILE_FIELD: &str = "file";

pub struct DetectionClient {
    http: Client,
    endpoint: Endpoint,
}

impl DetectionClient {
    /// タイムアウトは設定しない（応答か接続エラーまで待つ）
    pub fn new(endpoint: Endpoint) -> Result<Self> {
        let http = Client::builder()
            .build()
            .map_err(|e| DetectError::HttpClient(e.to_string()))?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// 画像を1回送信する
    ///
    /// HTTPレスポンスがあればステータスにかかわらず`Ok`。解釈は呼び出し側で行う。
    pub async fn upload(&self, image: &ImageFile) -> std::result::Result<ServerReply, TransportFailure> {
        let bytes = tokio::fs::read(&image.path)
            .await
            .map_err(|e| TransportFailure::PreSend(e.to_string()))?;

        debug!(file = %image.file_name, size = bytes.len(), mime = image.mime_type, "multipart body prepared");

        let part = Part::bytes(bytes)
            .file_name(image.file_name.clone())
            .mime_str(image.mime_type)
            .map_err(|e| TransportFailure::PreSend(e.to_string()))?;
        let form = Form::new().part(FILE_FIELD, part);

        let response = self
            .http
            .post(self.endpoint.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();

        let body = match response.text().await {
            Ok(text) => match ServiceBody::parse(&text) {
                Ok(body) => Some(body),
                Err(e) => {
                    debug!(error = %e, "response body is not a service JSON object");
                    None
                }
            },
            Err(e) => {
                warn!(error = %e, "failed to read response body");
                None
            }
        };

        debug!(status = status.as_u16(), "response received");
        Ok(ServerReply::new(status.as_u16(), status_text, body))
    }
}

/// 構築段階の失敗は送信前エラー、それ以外は無応答として扱う
fn classify_send_error(e: reqwest::Error) -> TransportFailure {
    if e.is_builder() {
        TransportFailure::PreSend(e.to_string())
    } else {
        warn!(error = %e, "request sent but no response received");
        TransportFailure::NoResponse
    }
}
