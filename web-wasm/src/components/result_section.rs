//! 検出結果コンポーネント

use leptos::prelude::*;

#[component]
pub fn ResultSection(
    result_text: Signal<String>,
    image_url: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="result-section">
            <h2>"Result"</h2>
            <div class="image-container">
                {move || image_url.get().map(|url| view! {
                    <div class="image-box">
                        <h3>"Uploaded Image"</h3>
                        <img src=url alt="Uploaded Image" class="uploaded-image" />
                    </div>
                })}
            </div>
            <Show when=move || !result_text.get().is_empty()>
                <div class="result-text">
                    <h3>"Detection Result"</h3>
                    <p>{move || result_text.get()}</p>
                </div>
            </Show>
        </div>
    }
}
