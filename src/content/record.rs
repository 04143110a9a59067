// SPDX-License-Identifier: MPL-2.0
//! Raw content records and their validation into [`Artwork`]s.
//!
//! The remote backend and the TOML file both deserialize into [`RawArtwork`].
//! Every field is optional at this stage; [`RawArtwork::into_artwork`] decides
//! what is required. Invalid records are skipped, never fatal.

use super::image_url;
use crate::domain::{Artwork, Availability, Catalog, Currency, Price, Year};
use crate::error::ContentError;
use serde::Deserialize;

/// An image as the backend describes it: a plain URL, or an asset object.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ImageRef {
    Url(String),
    Asset { asset: AssetRef },
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AssetRef {
    #[serde(rename = "_ref")]
    pub reference: Option<String>,
    pub url: Option<String>,
}

impl ImageRef {
    /// Resolves to a fetchable reference. Asset ids need `asset_base`.
    #[must_use]
    pub fn resolve(&self, asset_base: Option<&str>) -> Option<String> {
        match self {
            ImageRef::Url(url) => Some(url.trim().to_string()).filter(|u| !u.is_empty()),
            ImageRef::Asset { asset } => asset.url.clone().or_else(|| {
                let reference = asset.reference.as_deref()?;
                image_url::asset_url(reference, asset_base?)
            }),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawArtwork {
    #[serde(alias = "_id")]
    pub id: Option<String>,
    pub title: Option<String>,
    pub year: Option<i64>,
    pub medium: Option<String>,
    pub dimensions: Option<String>,
    #[serde(alias = "mainImage")]
    pub image: Option<ImageRef>,
    pub thumbnail: Option<ImageRef>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub availability: Option<String>,
    #[serde(alias = "inquire_for_price")]
    pub inquire_for_price: Option<bool>,
    #[serde(alias = "display_order")]
    pub display_order: Option<f64>,
}

impl RawArtwork {
    /// Validates the record. `fallback_id` is used when the record has none.
    pub fn into_artwork(
        self,
        fallback_id: &str,
        asset_base: Option<&str>,
    ) -> Result<Artwork, ContentError> {
        let id = self
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| fallback_id.to_string());
        let invalid = |reason: &str| ContentError::InvalidRecord {
            id: id.clone(),
            reason: reason.to_string(),
        };

        let title = self
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| invalid("missing title"))?;
        let year = self
            .year
            .and_then(|y| i32::try_from(y).ok())
            .and_then(Year::new)
            .ok_or_else(|| invalid("missing or out-of-range year"))?;
        let image = self
            .image
            .as_ref()
            .and_then(|i| i.resolve(asset_base))
            .ok_or_else(|| invalid("missing image"))?;
        let thumbnail = self.thumbnail.as_ref().and_then(|t| t.resolve(asset_base));

        let currency = match self.currency.as_deref() {
            None => Currency::default(),
            Some(code) => Currency::from_code(code).ok_or_else(|| invalid("unknown currency"))?,
        };
        let availability = match self.availability.as_deref() {
            None => Availability::default(),
            Some(code) => {
                Availability::from_code(code).ok_or_else(|| invalid("unknown availability"))?
            }
        };

        Ok(Artwork::builder(id.clone(), title, year, image)
            .medium(self.medium.unwrap_or_default().trim())
            .dimensions(self.dimensions.unwrap_or_default().trim())
            .thumbnail(thumbnail)
            .price(self.price.and_then(Price::new))
            .currency(currency)
            .availability(availability)
            .inquire_for_price(self.inquire_for_price.unwrap_or(false))
            .build())
    }
}

/// Orders records by display order (missing last, ties keep source order),
/// drops invalid ones, and builds the catalog.
#[must_use]
pub fn into_catalog(mut records: Vec<RawArtwork>, asset_base: Option<&str>) -> Catalog {
    records.sort_by(|a, b| match (a.display_order, b.display_order) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    let artworks = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, raw)| {
            let fallback = format!("record-{}", index + 1);
            match raw.into_artwork(&fallback, asset_base) {
                Ok(artwork) => Some(artwork),
                Err(err) => {
                    tracing::warn!(%err, "skipping content record");
                    None
                }
            }
        })
        .collect();
    Catalog::new(artworks)
}
