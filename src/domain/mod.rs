// SPDX-License-Identifier: MPL-2.0
//! Domain layer - artwork records and the catalog, with no dependencies
//! outside `std`.
//!
//! # Modules
//!
//! - [`artwork`]: [`Artwork`](artwork::Artwork) and its value objects
//!   ([`Year`](artwork::Year), [`Price`](artwork::Price),
//!   [`Availability`](artwork::Availability))
//! - [`catalog`]: the ordered [`Catalog`](catalog::Catalog)

pub mod artwork;
pub mod catalog;

pub use artwork::{Artwork, ArtworkId, Availability, Currency, Price, PriceStatus, Year};
pub use catalog::Catalog;
