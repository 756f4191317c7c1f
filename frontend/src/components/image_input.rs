//! Image field for admin forms: paste a URL or upload a file as a data URL.

use leptos::*;

use crate::services::files::{read_data_url, selected_file};

#[component]
pub fn ImageInput(
    #[prop(into)] label: String,
    /// Current image URL or data URL
    value: RwSignal<String>,
) -> impl IntoView {
    let (error, set_error) = create_signal(None::<String>);

    let on_file_change = move |ev: web_sys::Event| {
        let Some(file) = selected_file(&ev) else {
            return;
        };
        set_error.set(None);
        spawn_local(async move {
            match read_data_url(file).await {
                Ok(url) => value.set(url),
                Err(e) => {
                    log::warn!("Image upload failed: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="field image-field">
            <label>{label}</label>
            <div class="image-input">
                <input
                    type="text"
                    placeholder="https://..."
                    prop:value=move || {
                        let current = value.get();
                        if current.starts_with("data:") { "(uploaded image)".to_string() } else { current }
                    }
                    on:change=move |ev| value.set(event_target_value(&ev))
                />
                <label class="btn btn-secondary btn-small upload-button">
                    "Upload"
                    <input type="file" accept="image/*" style="display:none" on:change=on_file_change/>
                </label>
            </div>
            <Show when=move || !value.with(String::is_empty) fallback=|| ()>
                <img class="image-preview" src=move || value.get() alt="preview"/>
            </Show>
            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}
        </div>
    }
}
