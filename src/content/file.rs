// SPDX-License-Identifier: MPL-2.0
//! TOML catalog file.
//!
//! ```toml
//! [[artwork]]
//! id = "1"
//! title = "Echoes in Ochre"
//! year = 2024
//! medium = "Oil on canvas"
//! dimensions = "48x36 in"
//! image = "https://images.example/echoes.jpg"
//! price = 4500
//! currency = "USD"
//! availability = "available"
//! display_order = 1
//! ```
//!
//! Relative image paths are resolved against the file's directory.

use super::record::{into_catalog, ImageRef, RawArtwork};
use crate::domain::Catalog;
use crate::error::{ContentError, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    artwork: Vec<RawArtwork>,
}

/// Parses catalog text. Paths are resolved against `base_dir`.
pub fn parse(content: &str, base_dir: Option<&Path>) -> Result<Catalog> {
    let file: CatalogFile =
        toml::from_str(content).map_err(|e| ContentError::Malformed(e.to_string()))?;
    let records = file
        .artwork
        .into_iter()
        .map(|mut raw| {
            if let Some(dir) = base_dir {
                raw.image = raw.image.map(|r| anchor(r, dir));
                raw.thumbnail = raw.thumbnail.map(|r| anchor(r, dir));
            }
            raw
        })
        .collect();
    Ok(into_catalog(records, None))
}

/// Reads and parses a catalog file.
pub async fn load(path: &Path) -> Result<Catalog> {
    let content = tokio::fs::read_to_string(path).await?;
    let catalog = parse(&content, path.parent())?;
    tracing::info!(path = %path.display(), artworks = catalog.len(), "loaded catalog file");
    Ok(catalog)
}

fn anchor(reference: ImageRef, dir: &Path) -> ImageRef {
    match reference {
        ImageRef::Url(value) if !value.contains("://") && Path::new(&value).is_relative() => {
            ImageRef::Url(dir.join(value).to_string_lossy().into_owned())
        }
        other => other,
    }
}
