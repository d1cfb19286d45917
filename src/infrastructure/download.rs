use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::{
    application::csv_export::{CsvArtifact, DownloadSink},
    domain::{errors::AppError, logging::LogComponent},
    log_debug,
};

/// Saves artifacts through a hidden `<a download>` link
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDownload;

fn browser_error(context: &str, error: JsValue) -> AppError {
    AppError::BrowserApiError(format!("{context}: {error:?}"))
}

impl DownloadSink for BrowserDownload {
    fn download(&self, artifact: &CsvArtifact) -> Result<(), AppError> {
        let window = web_sys::window()
            .ok_or_else(|| AppError::BrowserApiError("Window not available".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| AppError::BrowserApiError("Document not available".to_string()))?;
        let body = document
            .body()
            .ok_or_else(|| AppError::BrowserApiError("Document has no body".to_string()))?;

        let parts = js_sys::Array::of1(&JsValue::from_str(&artifact.content));
        let options = BlobPropertyBag::new();
        options.set_type(artifact.mime_type);
        let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
            .map_err(|e| browser_error("Failed to create blob", e))?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|e| browser_error("Failed to create object URL", e))?;

        let link: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|e| browser_error("Failed to create link", e))?
            .dyn_into()
            .map_err(|_| AppError::BrowserApiError("Created element is not an anchor".to_string()))?;
        link.set_href(&url);
        link.set_download(artifact.file_name);
        link.style()
            .set_property("visibility", "hidden")
            .map_err(|e| browser_error("Failed to hide link", e))?;

        body.append_child(&link)
            .map_err(|e| browser_error("Failed to attach link", e))?;
        link.click();
        body.remove_child(&link)
            .map_err(|e| browser_error("Failed to detach link", e))?;
        Url::revoke_object_url(&url).map_err(|e| browser_error("Failed to revoke object URL", e))?;

        log_debug!(
            LogComponent::Infrastructure("Download"),
            "⬇️ Download of {} triggered ({} bytes)",
            artifact.file_name,
            artifact.content.len()
        );
        Ok(())
    }
}
