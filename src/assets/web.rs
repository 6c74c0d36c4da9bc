//! Browser asset loading with `fetch`.
//!
//! Each stream runs as a future on the page's event loop, so completions
//! interleave with animation frames and input events on the one thread.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::{complete, streams, AssetSender, AssetSource};
use crate::error::PlanetsError;
use crate::options::AssetOptions;

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Fetch the bytes of `source`. Local paths are fetched relative to the
/// page.
///
/// # Errors
///
/// Returns [`PlanetsError::AssetLoad`] on network failure or a non-2xx
/// status.
pub async fn fetch_bytes(source: &AssetSource) -> Result<Vec<u8>, PlanetsError> {
    let url = source.as_str();
    let fail = |reason: String| PlanetsError::asset_load(url, reason);

    let window = web_sys::window().ok_or_else(|| fail("no window".into()))?;
    let response: web_sys::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| fail(js_error(&e)))?
        .dyn_into()
        .map_err(|e| fail(js_error(&e)))?;
    if !response.ok() {
        return Err(fail(format!("HTTP {}", response.status())));
    }
    let buffer = JsFuture::from(response.array_buffer().map_err(|e| fail(js_error(&e)))?)
        .await
        .map_err(|e| fail(js_error(&e)))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Start every configured load stream as a local future.
pub fn spawn_loads(options: &AssetOptions, max_dimension: u32, sender: &AssetSender) {
    for stream in streams(options) {
        if stream.requests.is_empty() {
            continue;
        }
        let tx = sender.clone();
        let requests = stream.requests;
        wasm_bindgen_futures::spawn_local(async move {
            for request in requests {
                let bytes = fetch_bytes(&request.source).await;
                if tx.send(complete(request, bytes, max_dimension)).is_err() {
                    return;
                }
            }
        });
    }
}
