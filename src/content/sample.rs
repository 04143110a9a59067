// SPDX-License-Identifier: MPL-2.0
//! Built-in sample catalog, used when no other source is configured or when
//! the configured one fails.

use crate::domain::{Artwork, Availability, Catalog, Currency, Price, Year};

struct Entry {
    id: &'static str,
    title: &'static str,
    year: i32,
    medium: &'static str,
    dimensions: &'static str,
    photo: &'static str,
    price: Option<f64>,
    availability: Availability,
    inquire_for_price: bool,
}

const ENTRIES: [Entry; 6] = [
    Entry {
        id: "1",
        title: "Echoes in Ochre",
        year: 2024,
        medium: "Oil on canvas",
        dimensions: "48x36 in",
        photo: "photo-1578301978018-3005759f48f7",
        price: Some(4500.0),
        availability: Availability::Available,
        inquire_for_price: false,
    },
    Entry {
        id: "2",
        title: "Cobalt Transference",
        year: 2024,
        medium: "Acrylic on wood panel",
        dimensions: "24x24 in",
        photo: "photo-1557672172-298e090bd0f1",
        price: Some(2800.0),
        availability: Availability::Available,
        inquire_for_price: false,
    },
    Entry {
        id: "3",
        title: "Vestige",
        year: 2023,
        medium: "Mixed media on paper",
        dimensions: "18x24 in",
        photo: "photo-1533158326339-7f3cf2404354",
        price: None,
        availability: Availability::Sold,
        inquire_for_price: false,
    },
    Entry {
        id: "4",
        title: "Temporal Shift",
        year: 2023,
        medium: "Oil and cold wax",
        dimensions: "30x30 in",
        photo: "photo-1556139943-4bdca53adf1e",
        price: None,
        availability: Availability::PrivateCollection,
        inquire_for_price: false,
    },
    Entry {
        id: "5",
        title: "First Light",
        year: 2022,
        medium: "Acrylic on canvas",
        dimensions: "60x48 in",
        photo: "photo-1561998338-13ad7883b20f",
        price: None,
        availability: Availability::OnLoan,
        inquire_for_price: true,
    },
    Entry {
        id: "6",
        title: "Subterranean",
        year: 2022,
        medium: "Ink and gesso on board",
        dimensions: "20x20 in",
        photo: "photo-1564399579883-451a5d44ec08",
        price: Some(1200.0),
        availability: Availability::Available,
        inquire_for_price: false,
    },
];

const PHOTO_HOST: &str = "https://images.unsplash.com";

/// The six built-in artworks, in display order.
#[must_use]
pub fn catalog() -> Catalog {
    let artworks = ENTRIES
        .iter()
        .filter_map(|entry| {
            let year = Year::new(entry.year)?;
            Some(
                Artwork::builder(
                    entry.id,
                    entry.title,
                    year,
                    format!("{PHOTO_HOST}/{}?w=1200&q=80", entry.photo),
                )
                .medium(entry.medium)
                .dimensions(entry.dimensions)
                .thumbnail(Some(format!(
                    "{PHOTO_HOST}/{}?crop=entropy&fit=crop&w=200&h=200&q=70",
                    entry.photo
                )))
                .price(entry.price.and_then(Price::new))
                .currency(Currency::Usd)
                .availability(entry.availability)
                .inquire_for_price(entry.inquire_for_price)
                .build(),
            )
        })
        .collect();
    Catalog::new(artworks)
}
