//! 検出サービス連携（fetch + FormData）

use accident_detect_common::{Endpoint, ServerReply, ServiceBody, TransportFailure};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

/// multipartのフィールド名
const FILE_FIELD: &str = "file";

/// ビルド時の`ACCIDENT_DETECT_URL`、なければ既定のベースアドレス
pub fn endpoint() -> Endpoint {
    option_env!("ACCIDENT_DETECT_URL")
        .and_then(|url| Endpoint::new(url).ok())
        .unwrap_or_default()
}

/// 画像を1回送信する
///
/// fetchのrejectは送信後の無応答、リクエスト構築の失敗は送信前エラーとして返す。
pub async fn upload(endpoint: &Endpoint, file: &File) -> Result<ServerReply, TransportFailure> {
    let request = build_request(endpoint, file)
        .map_err(|e| TransportFailure::PreSend(describe_js_error(&e)))?;

    let window = web_sys::window()
        .ok_or_else(|| TransportFailure::PreSend("window is not available".into()))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| {
            gloo::console::error!("fetch rejected:", describe_js_error(&e));
            TransportFailure::NoResponse
        })?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| TransportFailure::PreSend(describe_js_error(&e)))?;

    let body = read_body(&resp).await;
    Ok(ServerReply::new(resp.status(), resp.status_text(), body))
}

fn build_request(endpoint: &Endpoint, file: &File) -> Result<Request, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(FILE_FIELD, file, &file.name())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    Request::new_with_str_and_init(&endpoint.upload_url(), &opts)
}

/// JSONオブジェクトとして読めなければNone
async fn read_body(resp: &Response) -> Option<ServiceBody> {
    let promise = resp.json().ok()?;
    let json = JsFuture::from(promise).await.ok()?;
    serde_wasm_bindgen::from_value(json).ok()
}

/// JSの例外値を表示用の文字列にする
pub fn describe_js_error(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_describe_js_error_object() {
        let error = js_sys::Error::new("Failed to construct 'Request': Invalid URL");
        assert_eq!(
            describe_js_error(&error.into()),
            "Failed to construct 'Request': Invalid URL"
        );
    }

    #[wasm_bindgen_test]
    fn test_describe_js_error_string() {
        assert_eq!(describe_js_error(&JsValue::from_str("boom")), "boom");
    }

    #[wasm_bindgen_test]
    fn test_body_from_js_object() {
        let value = js_sys::JSON::parse(r#"{"result": "Accident detected", "image": "a.png"}"#)
            .expect("JSONが不正");
        let body: ServiceBody = serde_wasm_bindgen::from_value(value).expect("変換失敗");
        assert_eq!(body.result(), Some("Accident detected"));
        assert_eq!(body.image(), Some("a.png"));
    }

    #[wasm_bindgen_test]
    fn test_body_from_js_string_rejected() {
        let value = JsValue::from_str("Internal Server Error");
        assert!(serde_wasm_bindgen::from_value::<ServiceBody>(value).is_err());
    }

    #[wasm_bindgen_test]
    fn test_default_endpoint() {
        assert!(endpoint().upload_url().ends_with("/upload"));
    }
}
