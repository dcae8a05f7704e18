//! メインアプリケーションコンポーネント

use accident_detect_common::{UploadClient, UploadError};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::api::detect;
use crate::components::{
    header::Header,
    result_section::ResultSection,
    upload_form::UploadForm,
};
use crate::{notice, preview};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アップロード状態（web_sys::FileはSendでないためローカル保持）
    let client = RwSignal::new_local(UploadClient::<File>::new(detect::endpoint()));

    let is_submitting = Signal::derive(move || client.with(|c| !c.is_submit_enabled()));
    let result_text = Signal::derive(move || client.with(|c| c.result_text().to_string()));
    let image_url = Signal::derive(move || {
        client.with(|c| c.displayed_image_url().map(str::to_string))
    });

    // 画像選択ハンドラ
    let on_select = move |file: File| match preview::create(&file) {
        Ok(url) => {
            if let Some(released) = client.try_update(|c| c.select(file, url)).flatten() {
                preview::revoke(&released);
            }
        }
        Err(e) => {
            gloo::console::error!("createObjectURL failed:", e.clone());
            notice::show(&e);
        }
    };

    // 送信ハンドラ
    let on_submit = move |_: ()| {
        let file = match client.try_update(|c| c.begin_submit()) {
            Some(Ok(file)) => file,
            Some(Err(UploadError::InFlight)) | None => return,
            Some(Err(e)) => {
                notice::show(&e.notice());
                return;
            }
        };
        let endpoint = client.with_untracked(|c| c.endpoint().clone());

        spawn_local(async move {
            let outcome = detect::upload(&endpoint, &file).await;
            match client.try_update(|c| c.complete(outcome)) {
                Some(Ok(completion)) => {
                    if let Some(released) = completion.released_preview {
                        preview::revoke(&released);
                    }
                }
                Some(Err(e)) => {
                    gloo::console::error!("Error uploading file:", e.to_string());
                    notice::show(&e.notice());
                }
                None => {}
            }
        });
    };

    view! {
        <div class="app-container">
            <Header />

            <main class="main-content">
                <UploadForm
                    is_submitting=is_submitting
                    on_select=on_select
                    on_submit=on_submit
                />

                <ResultSection result_text=result_text image_url=image_url />
            </main>
        </div>
    }
}
