// SPDX-License-Identifier: MPL-2.0
//! Artwork value objects.
//!
//! An [`Artwork`] is immutable once built: the gallery never edits records, it
//! only reorders its *view* of them. Construction goes through
//! [`ArtworkBuilder`] so the thumbnail fallback and the price rules are applied
//! in one place.

use std::fmt;

// =============================================================================
// Year bounds
// =============================================================================

/// Creation year bounds accepted by the content schema.
pub mod year_bounds {
    /// Earliest accepted creation year.
    pub const MIN: i32 = 1900;
    /// Latest accepted creation year.
    pub const MAX: i32 = 2100;
}

// =============================================================================
// ArtworkId
// =============================================================================

/// Stable identifier of an artwork for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtworkId(String);

impl ArtworkId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArtworkId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// Year
// =============================================================================

/// Creation year, guaranteed to be within [`year_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Year(i32);

impl Year {
    /// Returns `None` when the year falls outside the accepted range.
    #[must_use]
    pub fn new(year: i32) -> Option<Self> {
        (year_bounds::MIN..=year_bounds::MAX)
            .contains(&year)
            .then_some(Self(year))
    }

    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Price
// =============================================================================

/// Asking price in whole currency units. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(u64);

impl Price {
    /// Returns `None` for zero, negative or non-finite amounts.
    #[must_use]
    pub fn new(amount: f64) -> Option<Self> {
        if amount.is_finite() && amount >= 1.0 {
            // Fractional cents are not part of the catalog's vocabulary.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Some(Self(amount.round() as u64))
        } else {
            None
        }
    }

    #[must_use]
    pub fn amount(self) -> u64 {
        self.0
    }

    /// Formats the amount with comma thousands separators (`4500` → `4,500`).
    #[must_use]
    pub fn grouped(self) -> String {
        let digits = self.0.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }
}

// =============================================================================
// Currency / Availability
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Currency {
    #[default]
    Usd,
    Eur,
}

impl Currency {
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }

    /// Parses the content backend's currency code (`USD`, `EUR`).
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "USD" => Some(Currency::Usd),
            "EUR" => Some(Currency::Eur),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Availability {
    #[default]
    Available,
    Sold,
    OnLoan,
    PrivateCollection,
}

impl Availability {
    /// Parses the content backend's kebab-case availability value.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "available" => Some(Availability::Available),
            "sold" => Some(Availability::Sold),
            "on-loan" => Some(Availability::OnLoan),
            "private-collection" => Some(Availability::PrivateCollection),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_available(self) -> bool {
        self == Availability::Available
    }
}

/// What the sidebar shows under an artwork's details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceStatus {
    AvailableInquire,
    AvailableAt { symbol: &'static str, amount: String },
    Available,
    Sold,
    OnLoan,
    PrivateCollection,
}

impl PriceStatus {
    /// i18n key for the status line. `AvailableAt` takes a `price` argument.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            PriceStatus::AvailableInquire => "status-available-inquire",
            PriceStatus::AvailableAt { .. } => "status-available-price",
            PriceStatus::Available => "status-available",
            PriceStatus::Sold => "status-sold",
            PriceStatus::OnLoan => "status-on-loan",
            PriceStatus::PrivateCollection => "status-private-collection",
        }
    }

    /// Whether the line uses the "available" emphasis.
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(
            self,
            PriceStatus::AvailableInquire | PriceStatus::AvailableAt { .. } | PriceStatus::Available
        )
    }
}

// =============================================================================
// Artwork
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Artwork {
    id: ArtworkId,
    title: String,
    year: Year,
    medium: String,
    dimensions: String,
    image: String,
    thumbnail: String,
    price: Option<Price>,
    currency: Currency,
    availability: Availability,
    inquire_for_price: bool,
}

impl Artwork {
    /// Starts a builder with the fields every artwork must have.
    #[must_use]
    pub fn builder(
        id: impl Into<String>,
        title: impl Into<String>,
        year: Year,
        image: impl Into<String>,
    ) -> ArtworkBuilder {
        ArtworkBuilder {
            id: ArtworkId::new(id),
            title: title.into(),
            year,
            medium: String::new(),
            dimensions: String::new(),
            image: image.into(),
            thumbnail: None,
            price: None,
            currency: Currency::default(),
            availability: Availability::default(),
            inquire_for_price: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ArtworkId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn year(&self) -> Year {
        self.year
    }

    #[must_use]
    pub fn medium(&self) -> &str {
        &self.medium
    }

    #[must_use]
    pub fn dimensions(&self) -> &str {
        &self.dimensions
    }

    /// Primary image reference (opaque to the gallery).
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Thumbnail reference; equals [`Artwork::image`] when none was supplied.
    #[must_use]
    pub fn thumbnail(&self) -> &str {
        &self.thumbnail
    }

    #[must_use]
    pub fn price(&self) -> Option<Price> {
        self.price
    }

    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    #[must_use]
    pub fn availability(&self) -> Availability {
        self.availability
    }

    #[must_use]
    pub fn inquire_for_price(&self) -> bool {
        self.inquire_for_price
    }

    /// "medium, dimensions", skipping whichever part is empty.
    #[must_use]
    pub fn caption(&self) -> String {
        match (self.medium.is_empty(), self.dimensions.is_empty()) {
            (false, false) => format!("{}, {}", self.medium, self.dimensions),
            (false, true) => self.medium.clone(),
            (true, false) => self.dimensions.clone(),
            (true, true) => String::new(),
        }
    }

    /// Resolves the price/availability line. The inquire flag hides the price.
    #[must_use]
    pub fn price_status(&self) -> PriceStatus {
        match self.availability {
            Availability::Available if self.inquire_for_price => PriceStatus::AvailableInquire,
            Availability::Available => match self.price {
                Some(price) => PriceStatus::AvailableAt {
                    symbol: self.currency.symbol(),
                    amount: price.grouped(),
                },
                None => PriceStatus::Available,
            },
            Availability::Sold => PriceStatus::Sold,
            Availability::OnLoan => PriceStatus::OnLoan,
            Availability::PrivateCollection => PriceStatus::PrivateCollection,
        }
    }
}

/// Builder for [`Artwork`]; optional fields default to empty/absent.
#[derive(Debug, Clone)]
pub struct ArtworkBuilder {
    id: ArtworkId,
    title: String,
    year: Year,
    medium: String,
    dimensions: String,
    image: String,
    thumbnail: Option<String>,
    price: Option<Price>,
    currency: Currency,
    availability: Availability,
    inquire_for_price: bool,
}

impl ArtworkBuilder {
    #[must_use]
    pub fn medium(mut self, medium: impl Into<String>) -> Self {
        self.medium = medium.into();
        self
    }

    #[must_use]
    pub fn dimensions(mut self, dimensions: impl Into<String>) -> Self {
        self.dimensions = dimensions.into();
        self
    }

    /// Blank references are treated as absent.
    #[must_use]
    pub fn thumbnail(mut self, thumbnail: Option<String>) -> Self {
        self.thumbnail = thumbnail.filter(|t| !t.trim().is_empty());
        self
    }

    #[must_use]
    pub fn price(mut self, price: Option<Price>) -> Self {
        self.price = price;
        self
    }

    #[must_use]
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    #[must_use]
    pub fn availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    #[must_use]
    pub fn inquire_for_price(mut self, inquire: bool) -> Self {
        self.inquire_for_price = inquire;
        self
    }

    #[must_use]
    pub fn build(self) -> Artwork {
        let thumbnail = self.thumbnail.unwrap_or_else(|| self.image.clone());
        Artwork {
            id: self.id,
            title: self.title,
            year: self.year,
            medium: self.medium,
            dimensions: self.dimensions,
            image: self.image,
            thumbnail,
            price: self.price,
            currency: self.currency,
            availability: self.availability,
            inquire_for_price: self.inquire_for_price,
        }
    }
}
