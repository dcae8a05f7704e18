//! ユーザーへの通知（同期的なalert）

use crate::api::detect::describe_js_error;

pub fn show(message: &str) {
    let Some(window) = web_sys::window() else {
        gloo::console::warn!("alert skipped (no window):", message.to_string());
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        gloo::console::warn!("alert failed:", describe_js_error(&e));
    }
}
