//! アップロードのリクエストライフサイクル
//!
//! 画像選択 → 送信開始 → レスポンス解釈 までの状態を1つの`UploadClient`が保持する。
//! ネットワーク送信そのものは呼び出し側（CLIはreqwest、Webはfetch）が行い、
//! 結果を`complete`に渡す。
//!
//! 状態遷移:
//! - `Idle --begin_submit(ファイルあり)--> Submitting`
//! - `Submitting --complete(成功・失敗とも)--> Idle`
//! - ファイル未選択の`begin_submit`は`Idle`のまま

use thiserror::Error;

use crate::endpoint::Endpoint;
use crate::types::{ServerReply, TransportFailure};

/// ファイル未選択で送信した場合の通知
pub const NO_FILE_NOTICE: &str = "Please upload an image for accident detection.";
/// `result`がないレスポンスの表示テキスト
pub const NO_DETECTION_TEXT: &str = "No accident detected";
/// 送信後に応答がなかった場合の通知
pub const NO_RESPONSE_NOTICE: &str = "Server is not responding. Please try again later.";
/// 他に使える文言がない場合の通知
pub const DEFAULT_FAILURE_NOTICE: &str = "An error occurred while processing the image.";

/// 送信状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Submitting,
}

impl RequestState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestState::Idle => "idle",
            RequestState::Submitting => "submitting",
        }
    }
}

/// 表示中の画像
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayedImage {
    /// 選択直後のローカルプレビュー（破棄可能なハンドル）
    Preview(String),
    /// サーバーが返した画像
    Remote(String),
}

impl DisplayedImage {
    pub fn url(&self) -> &str {
        match self {
            DisplayedImage::Preview(url) | DisplayedImage::Remote(url) => url,
        }
    }
}

/// 送信の失敗分類
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("no image selected")]
    NoFileSelected,

    #[error("a submission is already in flight")]
    InFlight,

    #[error("detection service reported an error: {error}")]
    Application { error: String },

    #[error("detection service responded with HTTP {status} {status_text}")]
    Response { status: u16, status_text: String, message: Option<String> },

    #[error("no response from detection service")]
    NoResponse,

    #[error("request could not be sent: {0}")]
    PreSend(String),
}

impl UploadError {
    /// ユーザーに表示する通知文
    ///
    /// 2xxの`error`はその文言をそのまま使う。
    /// 非2xxはボディの`message` → ステータステキスト。
    /// 空文字列は汎用文に置き換える（前後の空白はそのまま）。
    pub fn notice(&self) -> String {
        let text = match self {
            UploadError::NoFileSelected => Some(NO_FILE_NOTICE),
            UploadError::InFlight => None,
            UploadError::Application { error } => Some(error.as_str()),
            UploadError::Response { status_text, message, .. } => {
                message.as_deref().or(Some(status_text.as_str()))
            }
            UploadError::NoResponse => Some(NO_RESPONSE_NOTICE),
            UploadError::PreSend(description) => Some(description.as_str()),
        };

        text.filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_FAILURE_NOTICE)
            .to_string()
    }
}

/// 成功時の解釈結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub result_text: String,
    /// サーバー側の画像URL（どちらの項目もなければNone）
    pub image_url: Option<String>,
}

impl Detection {
    /// 1件の送信結果を成功・失敗に振り分ける
    ///
    /// HTTPステータスだけでは判断せず、ボディの`error`があれば2xxでも失敗とする。
    pub fn interpret(
        outcome: Result<ServerReply, TransportFailure>,
        endpoint: &Endpoint,
    ) -> Result<Self, UploadError> {
        let reply = match outcome {
            Ok(reply) => reply,
            Err(TransportFailure::NoResponse) => return Err(UploadError::NoResponse),
            Err(TransportFailure::PreSend(description)) => {
                return Err(UploadError::PreSend(description))
            }
        };

        let success = reply.is_http_success();
        let ServerReply { status, status_text, body } = reply;
        let body = body.unwrap_or_default();

        if !success {
            return Err(UploadError::Response {
                status,
                status_text,
                message: body.message().map(str::to_string),
            });
        }

        if let Some(error) = body.error() {
            return Err(UploadError::Application { error: error.to_string() });
        }

        let result_text = body.result().unwrap_or(NO_DETECTION_TEXT).to_string();
        let image_url = body
            .image_path()
            .map(str::to_string)
            .or_else(|| body.image().map(|name| endpoint.uploaded_image_url(name)));

        Ok(Self { result_text, image_url })
    }
}

/// `complete`成功時の戻り値
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub detection: Detection,
    /// サーバー画像に置き換えられたプレビュー（呼び出し側で破棄する）
    pub released_preview: Option<String>,
}

/// アップロードクライアントの状態
///
/// `F`は選択ファイルの表現（Webでは`web_sys::File`、CLIではパス情報）。
#[derive(Debug, Clone)]
pub struct UploadClient<F> {
    endpoint: Endpoint,
    selected: Option<F>,
    displayed: Option<DisplayedImage>,
    result_text: String,
    state: RequestState,
}

impl<F: Clone> UploadClient<F> {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            selected: None,
            displayed: None,
            result_text: String::new(),
            state: RequestState::Idle,
        }
    }

    /// ファイルを選択し、プレビューを表示画像にする
    ///
    /// 置き換えられたプレビューを返す。サーバー画像は破棄対象にならない。
    pub fn select(&mut self, file: F, preview: impl Into<String>) -> Option<String> {
        self.selected = Some(file);
        match self.displayed.replace(DisplayedImage::Preview(preview.into())) {
            Some(DisplayedImage::Preview(old)) => Some(old),
            _ => None,
        }
    }

    /// 送信開始。送信するファイルを返す
    pub fn begin_submit(&mut self) -> Result<F, UploadError> {
        if self.state == RequestState::Submitting {
            return Err(UploadError::InFlight);
        }
        let file = self.selected.clone().ok_or(UploadError::NoFileSelected)?;
        self.state = RequestState::Submitting;
        Ok(file)
    }

    /// 送信結果を反映する。結果にかかわらず`Idle`に戻る
    pub fn complete(
        &mut self,
        outcome: Result<ServerReply, TransportFailure>,
    ) -> Result<Completion, UploadError> {
        self.state = RequestState::Idle;

        let detection = Detection::interpret(outcome, &self.endpoint)?;
        self.result_text = detection.result_text.clone();

        let released_preview = match &detection.image_url {
            Some(url) => match self.displayed.replace(DisplayedImage::Remote(url.clone())) {
                Some(DisplayedImage::Preview(old)) => Some(old),
                _ => None,
            },
            None => None,
        };

        Ok(Completion { detection, released_preview })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn selected(&self) -> Option<&F> {
        self.selected.as_ref()
    }

    pub fn state(&self) -> RequestState {
        self.state
    }

    /// 送信ボタンの有効状態
    pub fn is_submit_enabled(&self) -> bool {
        self.state == RequestState::Idle
    }

    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    pub fn displayed_image(&self) -> Option<&DisplayedImage> {
        self.displayed.as_ref()
    }

    pub fn displayed_image_url(&self) -> Option<&str> {
        self.displayed.as_ref().map(DisplayedImage::url)
    }
}

impl<F: Clone> Default for UploadClient<F> {
    fn default() -> Self {
        Self::new(Endpoint::default())
    }
}
