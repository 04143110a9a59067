// SPDX-License-Identifier: MPL-2.0
//! Year grouping and the year filter.
//!
//! Both are pure views over the catalog: grouping never reorders the source
//! list, it only buckets it. Years are presented newest first and each bucket
//! keeps the source order of its artworks.

use crate::domain::{Artwork, ArtworkId, Catalog, Year};
use std::collections::BTreeMap;

/// Active year filter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum YearFilter {
    #[default]
    All,
    Year(Year),
}

impl YearFilter {
    /// Whether `artwork` belongs to the filtered view.
    #[must_use]
    pub fn matches(self, artwork: &Artwork) -> bool {
        match self {
            YearFilter::All => true,
            YearFilter::Year(year) => artwork.year() == year,
        }
    }
}

/// One heading of a grouped list.
#[derive(Debug, Clone, PartialEq)]
pub struct YearGroup<'a> {
    pub year: Year,
    pub artworks: Vec<&'a Artwork>,
}

/// Buckets the catalog by year, newest year first, source order inside.
#[must_use]
pub fn group_by_year(artworks: &[Artwork]) -> Vec<YearGroup<'_>> {
    let mut buckets: BTreeMap<Year, Vec<&Artwork>> = BTreeMap::new();
    for artwork in artworks {
        buckets.entry(artwork.year()).or_default().push(artwork);
    }
    buckets
        .into_iter()
        .rev()
        .map(|(year, artworks)| YearGroup { year, artworks })
        .collect()
}

/// Distinct years, newest first.
#[must_use]
pub fn years_descending(artworks: &[Artwork]) -> Vec<Year> {
    group_by_year(artworks).into_iter().map(|g| g.year).collect()
}

/// Buttons of the filter bar: `All` followed by every year, newest first.
#[must_use]
pub fn filter_options(artworks: &[Artwork]) -> Vec<YearFilter> {
    std::iter::once(YearFilter::All)
        .chain(years_descending(artworks).into_iter().map(YearFilter::Year))
        .collect()
}

/// Number of artworks the filter would show.
#[must_use]
pub fn count_for(artworks: &[Artwork], filter: YearFilter) -> usize {
    artworks.iter().filter(|a| filter.matches(a)).count()
}

/// Ids of the filtered view, in source order.
#[must_use]
pub fn visible_ids(catalog: &Catalog, filter: YearFilter) -> Vec<ArtworkId> {
    catalog
        .artworks()
        .iter()
        .filter(|a| filter.matches(a))
        .map(|a| a.id().clone())
        .collect()
}

/// First artwork of the filtered view; the target of a filter change.
#[must_use]
pub fn first_visible(catalog: &Catalog, filter: YearFilter) -> Option<&Artwork> {
    catalog.artworks().iter().find(|a| filter.matches(a))
}
