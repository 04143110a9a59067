// SPDX-License-Identifier: MPL-2.0
//! Image fetching and decoding.
//!
//! References starting with `http://` or `https://` are downloaded; anything
//! else is read as a local path. Raster formats go through `image`, SVG is
//! rasterized with `resvg`. Decoding runs on the blocking pool.

use super::ImageData;
use crate::error::{Error, Result};
use image_rs::GenericImageView;
use resvg::usvg;
use std::sync::OnceLock;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

fn client() -> Result<&'static reqwest::Client> {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    if let Some(client) = CLIENT.get() {
        return Ok(client);
    }
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("IcedFolio/", env!("CARGO_PKG_VERSION")))
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    Ok(CLIENT.get_or_init(|| client))
}

fn is_remote(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

/// Raw bytes behind `reference`.
pub async fn fetch_bytes(reference: &str) -> Result<Vec<u8>> {
    if is_remote(reference) {
        let response = client()?.get(reference).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http(format!("HTTP status: {status}")));
        }
        Ok(response.bytes().await?.to_vec())
    } else {
        Ok(tokio::fs::read(reference).await?)
    }
}

fn looks_like_svg(reference: &str, bytes: &[u8]) -> bool {
    let path = reference.split(['?', '#']).next().unwrap_or(reference);
    if path.to_ascii_lowercase().ends_with(".svg") {
        return true;
    }
    let head = &bytes[..bytes.len().min(256)];
    let text = String::from_utf8_lossy(head);
    let text = text.trim_start();
    text.starts_with("<svg") || (text.starts_with("<?xml") && text.contains("<svg"))
}

/// Decodes `bytes` into an RGBA image.
pub fn decode(reference: &str, bytes: &[u8]) -> Result<ImageData> {
    if looks_like_svg(reference, bytes) {
        return rasterize_svg(bytes);
    }
    let image = image_rs::load_from_memory(bytes)?;
    let (width, height) = image.dimensions();
    Ok(ImageData::from_rgba(width, height, image.to_rgba8().into_vec()))
}

fn rasterize_svg(bytes: &[u8]) -> Result<ImageData> {
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
        .map_err(|e| Error::Decode(e.to_string()))?;
    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    if width == 0 || height == 0 {
        return Err(Error::Decode("SVG has empty dimensions".into()));
    }
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Decode("failed to allocate SVG pixmap".into()))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    Ok(ImageData::from_rgba(width, height, pixmap.take()))
}

/// Fetches and decodes `reference`.
pub async fn load(reference: String) -> Result<ImageData> {
    let bytes = fetch_bytes(&reference).await?;
    let decoded = tokio::task::spawn_blocking(move || decode(&reference, &bytes))
        .await
        .map_err(|e| Error::Decode(e.to_string()))?;
    match &decoded {
        Ok(image) => tracing::debug!(width = image.width, height = image.height, "image decoded"),
        Err(err) => tracing::warn!(%err, "image load failed"),
    }
    decoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn png_bytes() -> Vec<u8> {
        let image = image_rs::RgbaImage::from_pixel(3, 2, image_rs::Rgba([200, 10, 10, 255]));
        let mut out = std::io::Cursor::new(Vec::new());
        image_rs::DynamicImage::ImageRgba8(image)
            .write_to(&mut out, image_rs::ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn decodes_png() {
        let image = decode("a.png", &png_bytes()).unwrap();
        assert_eq!((image.width, image.height), (3, 2));
        assert_eq!(image.size_bytes(), 24);
    }

    #[test]
    fn rasterizes_svg() {
        let svg = br#"<svg xmlns="http://www.w3.org/2000/svg" width="8" height="4"><rect width="8" height="4"/></svg>"#;
        let image = decode("inline", svg).unwrap();
        assert_eq!((image.width, image.height), (8, 4));
    }

    #[test]
    fn garbage_is_decode_error() {
        let err = decode("a.jpg", b"not an image").unwrap_err();
        assert_eq!(err.i18n_key(), "error-image-decode");
    }

    #[tokio::test]
    async fn loads_local_file() {
        let mut file = NamedTempFile::with_suffix(".png").unwrap();
        file.write_all(&png_bytes()).unwrap();
        let image = load(file.path().to_string_lossy().into_owned()).await.unwrap();
        assert_eq!(image.width, 3);
    }

    #[tokio::test]
    async fn missing_local_file_is_io_error() {
        let err = fetch_bytes("/no/such/image.png").await.unwrap_err();
        assert_eq!(err.i18n_key(), "error-io");
    }
}
