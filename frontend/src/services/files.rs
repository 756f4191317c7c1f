//! File helpers: image uploads as data URLs and CSV downloads via Blob links.

use js_sys::{Array, Promise};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, File, FileReader, HtmlAnchorElement, Url};

use crate::types::{AppError, AppResult};
use crate::MAX_IMAGE_SIZE;

fn browser_err(context: &str, err: JsValue) -> AppError {
    AppError::Browser(format!("{}: {:?}", context, err))
}

/// Read an image file into a `data:` URL.
pub async fn read_data_url(file: File) -> AppResult<String> {
    if !file.type_().starts_with("image/") {
        return Err(AppError::Validation(format!("{} is not an image", file.name())));
    }
    if file.size() > MAX_IMAGE_SIZE {
        return Err(AppError::Validation(format!(
            "{} is larger than {} MB",
            file.name(),
            MAX_IMAGE_SIZE / (1024.0 * 1024.0)
        )));
    }

    let reader = FileReader::new().map_err(|e| browser_err("Failed to create FileReader", e))?;
    let promise = Promise::new(&mut |resolve, reject| {
        let on_load = Closure::once(move |event: web_sys::Event| {
            let result = event
                .target()
                .and_then(|t| t.dyn_into::<FileReader>().ok())
                .and_then(|r| r.result().ok())
                .unwrap_or(JsValue::NULL);
            let _ = resolve.call1(&JsValue::NULL, &result);
        });
        let on_error = Closure::once(move |event: web_sys::Event| {
            let _ = reject.call1(&JsValue::NULL, &event);
        });
        reader.set_onload(Some(on_load.as_ref().unchecked_ref()));
        reader.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        // The reader owns the callbacks for its single read
        on_load.forget();
        on_error.forget();
    });

    reader
        .read_as_data_url(&file)
        .map_err(|e| browser_err("Failed to read file", e))?;
    let result = JsFuture::from(promise)
        .await
        .map_err(|e| browser_err("Failed to read file", e))?;

    result
        .as_string()
        .ok_or_else(|| AppError::Browser("File reader returned no data".to_string()))
}

/// First file selected in an `<input type="file">` change event.
pub fn selected_file(ev: &web_sys::Event) -> Option<File> {
    let input: web_sys::HtmlInputElement = leptos::event_target(ev);
    input.files()?.get(0)
}

/// Offer `content` as a file download through a temporary object URL.
pub fn download_text(file_name: &str, content: &str, mime: &str) -> AppResult<()> {
    let parts = Array::of1(&JsValue::from_str(content));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| browser_err("Failed to create Blob", e))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| browser_err("Failed to create object URL", e))?;

    let document = gloo_utils::document();
    let link: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| browser_err("Failed to create link", e))?
        .unchecked_into();
    link.set_href(&url);
    link.set_download(file_name);
    link.style().set_property("visibility", "hidden").ok();

    let body = gloo_utils::body();
    body.append_child(&link)
        .map_err(|e| browser_err("Failed to attach link", e))?;
    link.click();
    body.remove_child(&link).ok();
    Url::revoke_object_url(&url).ok();
    Ok(())
}
