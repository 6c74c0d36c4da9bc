//! Native asset loading on background threads.
//!
//! Each stream gets its own named thread so a slow download (the remote
//! HDR map) never delays the local textures. Threads are detached: a load
//! cannot be cancelled, and a thread exits quietly once the receiving
//! engine is gone.

use super::{complete, streams, AssetEvent, AssetRequest, AssetSender, AssetSource};
use crate::error::PlanetsError;
use crate::options::AssetOptions;

/// Upper bound on a downloaded asset.
const MAX_DOWNLOAD_BYTES: u64 = 256 * 1024 * 1024;

/// Read the bytes of `source` from disk or over HTTP.
///
/// # Errors
///
/// Returns [`PlanetsError::AssetLoad`] naming the source on any I/O or HTTP
/// failure.
pub fn fetch_bytes(source: &AssetSource) -> Result<Vec<u8>, PlanetsError> {
    match source {
        AssetSource::Local(path) => {
            std::fs::read(path).map_err(|e| PlanetsError::asset_load(path.as_str(), e))
        }
        AssetSource::Remote(url) => {
            log::info!("downloading {url}");
            let response = ureq::get(url.as_str())
                .call()
                .map_err(|e| PlanetsError::asset_load(url.as_str(), e))?;
            let mut body = response.into_body();
            body.with_config()
                .limit(MAX_DOWNLOAD_BYTES)
                .read_to_vec()
                .map_err(|e| PlanetsError::asset_load(url.as_str(), e))
        }
    }
}

/// Start every configured load stream on its own thread.
///
/// Completions are posted to `sender` in per-stream order; streams are
/// unordered relative to each other.
///
/// # Errors
///
/// Returns [`PlanetsError::ThreadSpawn`] if a loader thread cannot be
/// started. Streams spawned before the failure keep running.
pub fn spawn_loads(
    options: &AssetOptions,
    max_dimension: u32,
    sender: &AssetSender,
) -> Result<(), PlanetsError> {
    for stream in streams(options) {
        if stream.requests.is_empty() {
            continue;
        }
        let tx = sender.clone();
        let requests = stream.requests;
        let _handle = std::thread::Builder::new()
            .name(stream.name.into())
            .spawn(move || {
                for request in requests {
                    if tx.send(load(request, max_dimension)).is_err() {
                        return;
                    }
                }
            })
            .map_err(PlanetsError::ThreadSpawn)?;
    }
    Ok(())
}

fn load(request: AssetRequest, max_dimension: u32) -> AssetEvent {
    let bytes = fetch_bytes(&request.source);
    complete(request, bytes, max_dimension)
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::assets::{AssetSlot, DecodedImage};

    #[test]
    fn missing_file_names_the_path() {
        let err = fetch_bytes(&AssetSource::Local("definitely/not/here.png".into())).unwrap_err();
        assert!(err.to_string().contains("definitely/not/here.png"));
    }

    #[test]
    fn every_stream_reports_even_on_failure() {
        let dir = std::env::temp_dir().join(format!("planets-assets-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let star_path = dir.join("stars.png");
        image::RgbaImage::from_pixel(2, 2, image::Rgba([9, 9, 9, 255]))
            .save(&star_path)
            .unwrap();

        let options = AssetOptions {
            root: dir.to_string_lossy().into_owned(),
            star_texture: "stars.png".into(),
            environment: "missing.hdr".into(),
            ..AssetOptions::default()
        };

        let (tx, rx) = mpsc::channel();
        spawn_loads(&options, 4096, &tx).unwrap();
        drop(tx);

        let events: Vec<_> = rx.iter().collect();
        assert_eq!(events.len(), 4 + 1 + 1);

        let backdrop = events.iter().find(|e| e.slot == AssetSlot::Backdrop).unwrap();
        assert!(matches!(backdrop.result, Ok(DecodedImage::Color(_))));

        let env = events.iter().find(|e| e.slot == AssetSlot::Environment).unwrap();
        assert!(env.result.is_err());

        let bodies = events
            .iter()
            .filter(|e| matches!(e.slot, AssetSlot::Body(_)))
            .count();
        assert_eq!(bodies, 4);

        let _ = std::fs::remove_dir_all(dir);
    }
}
