//! Clipboard Commands

use wasm_bindgen_futures::JsFuture;

/// Write text to the system clipboard
pub async fn copy_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window")?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("Clipboard write failed: {:?}", e))
}
