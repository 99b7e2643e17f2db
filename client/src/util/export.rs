//! Export the week selection as a downloaded JSON file.
//!
//! SYSTEM CONTEXT
//! ==============
//! The download is a one-shot browser side effect: build a `Blob`, point a
//! temporary `<a download>` at an object URL, click it, then remove the link
//! and revoke the URL. Server renders have no download target and no-op.
//!
//! TRADE-OFFS
//! ==========
//! The trigger has no error path for callers. Serialization or browser
//! failures are logged and dropped, matching a plain download button.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use crate::state::selection::WeekSelection;

pub const EXPORT_FILE_NAME: &str = "my-file.json";
pub const EXPORT_MIME_TYPE: &str = "application/json";

/// Failures while producing or saving the export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to serialize selection: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("browser refused download: {0}")]
    Browser(String),
}

/// Pretty-printed JSON for `selection` (two-space indent).
///
/// # Errors
///
/// Returns `ExportError::Serialize` if serialization fails.
pub fn selection_json(selection: &WeekSelection) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(selection)?)
}

/// Serialize the selection as it stands now and start exactly one download.
pub fn download_selection(selection: &WeekSelection) {
    let result = selection_json(selection).and_then(|json| save_file(EXPORT_FILE_NAME, &json));
    match result {
        Ok(()) => log::debug!("exported {} checked slots to {EXPORT_FILE_NAME}", selection.checked_count()),
        Err(e) => log::warn!("selection export failed: {e}"),
    }
}

fn save_file(name: &str, contents: &str) -> Result<(), ExportError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::{JsCast, JsValue};

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ExportError::Browser("no document".to_owned()))?;
        let body = document
            .body()
            .ok_or_else(|| ExportError::Browser("no document body".to_owned()))?;

        let parts = js_sys::Array::of1(&JsValue::from_str(contents));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(EXPORT_MIME_TYPE);
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_error)?;
        let href = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

        let link = document
            .create_element("a")
            .map_err(js_error)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| ExportError::Browser("anchor element unavailable".to_owned()))?;
        link.set_href(&href);
        link.set_download(name);

        let appended = body.append_child(&link).map_err(js_error);
        if appended.is_ok() {
            link.click();
            let _ = body.remove_child(&link);
        }
        let _ = web_sys::Url::revoke_object_url(&href);
        appended.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, contents);
        Ok(())
    }
}

#[cfg(feature = "hydrate")]
fn js_error(value: wasm_bindgen::JsValue) -> ExportError {
    ExportError::Browser(format!("{value:?}"))
}
