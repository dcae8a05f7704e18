//! 選択画像のローカルプレビュー（Object URL）

use web_sys::{File, Url};

use crate::api::detect::describe_js_error;

pub fn create(file: &File) -> Result<String, String> {
    Url::create_object_url_with_blob(file).map_err(|e| describe_js_error(&e))
}

/// 置き換えられたプレビューを破棄
pub fn revoke(url: &str) {
    if let Err(e) = Url::revoke_object_url(url) {
        gloo::console::warn!("revokeObjectURL failed:", describe_js_error(&e));
    }
}
