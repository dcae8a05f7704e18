//! アップロードフォームコンポーネント

use leptos::prelude::*;
use web_sys::{File, HtmlInputElement};

#[component]
pub fn UploadForm<FS, FU>(
    is_submitting: Signal<bool>,
    on_select: FS,
    on_submit: FU,
) -> impl IntoView
where
    FS: Fn(File) + 'static + Clone,
    FU: Fn(()) + 'static + Clone,
{
    view! {
        <form
            class="upload-form"
            on:submit={
                let on_submit = on_submit.clone();
                move |ev| {
                    ev.prevent_default();
                    on_submit(());
                }
            }
        >
            <div class="file-upload-container">
                <div class="file-upload-wrapper">
                    <label for="file-upload" class="custom-file-upload">
                        "Choose File"
                    </label>
                    <input
                        id="file-upload"
                        type="file"
                        accept="image/*"
                        on:change={
                            let on_select = on_select.clone();
                            move |ev| {
                                let input = event_target::<HtmlInputElement>(&ev);
                                if let Some(file) = input.files().and_then(|files| files.get(0)) {
                                    on_select(file);
                                }
                            }
                        }
                    />
                </div>
            </div>

            <button
                type="submit"
                class="submit-button"
                disabled=move || is_submitting.get()
            >
                {move || if is_submitting.get() { "Processing..." } else { "Detect Accident" }}
            </button>
        </form>
    }
}
