// SPDX-License-Identifier: MPL-2.0
//! Ordered, read-only artwork list shared by every gallery surface.

use super::artwork::{Artwork, ArtworkId};
use std::collections::HashMap;
use std::sync::Arc;

/// The artwork list in display order.
///
/// Cloning is cheap: the records sit behind an `Arc` so the catalog can be
/// handed to views and async tasks without copying.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    artworks: Arc<Vec<Artwork>>,
    index: Arc<HashMap<ArtworkId, usize>>,
}

impl Catalog {
    /// Builds a catalog, keeping the first record when ids repeat.
    #[must_use]
    pub fn new(artworks: Vec<Artwork>) -> Self {
        let mut index = HashMap::with_capacity(artworks.len());
        let mut unique = Vec::with_capacity(artworks.len());
        for artwork in artworks {
            if index.contains_key(artwork.id()) {
                continue;
            }
            index.insert(artwork.id().clone(), unique.len());
            unique.push(artwork);
        }
        Self {
            artworks: Arc::new(unique),
            index: Arc::new(index),
        }
    }

    #[must_use]
    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Artwork> {
        self.artworks.first()
    }

    #[must_use]
    pub fn get(&self, id: &ArtworkId) -> Option<&Artwork> {
        self.index.get(id).map(|&i| &self.artworks[i])
    }

    #[must_use]
    pub fn contains(&self, id: &ArtworkId) -> bool {
        self.index.contains_key(id)
    }

    #[must_use]
    pub fn position(&self, id: &ArtworkId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Ids in display order.
    pub fn ids(&self) -> impl Iterator<Item = &ArtworkId> {
        self.artworks.iter().map(Artwork::id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::artwork::Year;

    fn artwork(id: &str, year: i32) -> Artwork {
        Artwork::builder(id, format!("Artwork {id}"), Year::new(year).unwrap(), "img").build()
    }

    #[test]
    fn keeps_source_order() {
        let catalog = Catalog::new(vec![artwork("b", 2023), artwork("a", 2024)]);
        let ids: Vec<_> = catalog.ids().map(ArtworkId::as_str).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(catalog.position(&"a".into()), Some(1));
    }

    #[test]
    fn duplicate_ids_keep_first_record() {
        let catalog = Catalog::new(vec![artwork("a", 2024), artwork("a", 2022)]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(&"a".into()).unwrap().year().value(), 2024);
    }

    #[test]
    fn unknown_id_is_absent() {
        let catalog = Catalog::new(vec![artwork("a", 2024)]);
        assert!(!catalog.contains(&"zzz".into()));
        assert!(catalog.get(&"zzz".into()).is_none());
    }
}
