use crate::core::{fit_within, RgbaImage};
use image::imageops::{self, FilterType};
use js_sys::Uint8Array;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("fetch {url} failed: {reason}")]
    Fetch { url: String, reason: String },
    #[error("fetch {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("{url} decoded to an empty image")]
    Empty { url: String },
    #[error("decode {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: image::ImageError,
    },
}

async fn fetch_bytes(url: &str) -> Result<Vec<u8>, AssetError> {
    let fetch_err = |e: wasm_bindgen::JsValue| AssetError::Fetch {
        url: url.to_string(),
        reason: format!("{:?}", e),
    };
    let window = web::window().ok_or_else(|| AssetError::Fetch {
        url: url.to_string(),
        reason: "no window".into(),
    })?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(fetch_err)?;
    let resp: web::Response = resp_value.dyn_into().map_err(fetch_err)?;
    if !resp.ok() {
        return Err(AssetError::Status {
            url: url.to_string(),
            status: resp.status(),
        });
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(fetch_err)?)
        .await
        .map_err(fetch_err)?;
    Ok(Uint8Array::new(&buf).to_vec())
}

/// Fetch and decode an image into tightly packed RGBA8, downscaled so
/// neither edge exceeds `max_dim`.
pub async fn load_image(url: &str, max_dim: u32) -> Result<RgbaImage, AssetError> {
    let bytes = fetch_bytes(url).await?;
    let mut img = image::load_from_memory(&bytes)
        .map_err(|source| AssetError::Decode {
            url: url.to_string(),
            source,
        })?
        .into_rgba8();
    let (src_w, src_h) = img.dimensions();
    if let Some((w, h)) = fit_within(src_w, src_h, max_dim) {
        log::warn!(
            "[assets] {} is {}x{}; downscaling to {}x{} for the GPU",
            url,
            src_w,
            src_h,
            w,
            h
        );
        img = imageops::resize(&img, w, h, FilterType::Triangle);
    }
    let (width, height) = img.dimensions();
    log::info!("[assets] loaded {} ({}x{})", url, width, height);
    RgbaImage::from_rgba(img.into_raw(), width, height).ok_or_else(|| AssetError::Empty {
        url: url.to_string(),
    })
}

/// Load `url`, or log why not and use the procedural stand-in instead.
pub async fn load_or(
    url: &str,
    max_dim: u32,
    fallback: impl FnOnce() -> RgbaImage,
) -> RgbaImage {
    match load_image(url, max_dim).await {
        Ok(img) => img,
        Err(e) => {
            log::warn!("[assets] {}; using procedural fallback", e);
            fallback()
        }
    }
}
