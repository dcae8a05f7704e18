//! 描画中の致命的エラーの受け皿
//!
//! panicが起きたらページ全体をフォールバック表示に差し替え、再読み込みだけを提示する。
//! panic後はWASMが使えないため、ボタンはインラインのJSで再読み込みする。

use std::panic;

pub fn install() {
    panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);

        let message = if let Some(s) = info.payload().downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown error".to_string()
        };
        let location = info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_default();

        render_fallback(&fallback_html(&message, &location));
    }));
}

fn render_fallback(html: &str) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        body.set_inner_html(html);
    }
}

fn fallback_html(message: &str, details: &str) -> String {
    format!(
        r#"<div class="error-fallback">
  <h2>Something went wrong</h2>
  <p class="error-message">{}</p>
  <details class="error-details">
    <summary>Error Details</summary>
    <pre>{}</pre>
  </details>
  <button class="retry-button" onclick="window.location.reload()">Refresh Page</button>
</div>"#,
        escape_html(message),
        escape_html(details)
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
