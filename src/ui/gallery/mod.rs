// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: stage, sidebar or drawer, year filter bar and filmstrip.
//!
//! [`component`] holds the state and update logic; the other modules are
//! view functions over it.

pub mod component;
mod drawer;
mod empty_state;
mod filmstrip;
mod sidebar;
mod stage;
mod year_filter;

pub use component::{Effect, Message, Settings, State, ViewEnv};

use crate::domain::{Artwork, PriceStatus};
use crate::i18n::fluent::I18n;
use crate::ui::theming::ColorScheme;
use iced::Color;

/// Localized price/availability line of `artwork`.
pub fn status_label(i18n: &I18n, artwork: &Artwork) -> String {
    let status = artwork.price_status();
    match &status {
        PriceStatus::AvailableAt { symbol, amount } => {
            let price = format!("{symbol}{amount}");
            i18n.tr_with_args(status.i18n_key(), &[("price", price.as_str())])
        }
        _ => i18n.tr(status.i18n_key()),
    }
}

/// "3 of 6" style position of the current artwork in the visible list.
pub fn position_label(i18n: &I18n, state: &State) -> Option<String> {
    let (index, total) = state.position()?;
    let (index, total) = (index.to_string(), total.to_string());
    Some(i18n.tr_with_args(
        "gallery-position",
        &[("index", index.as_str()), ("total", total.as_str())],
    ))
}

/// Available works are highlighted, everything else is muted.
pub fn status_color(colors: &ColorScheme, artwork: &Artwork) -> Color {
    if artwork.price_status().is_available() {
        colors.success
    } else {
        colors.text_muted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;
    use crate::content::sample;

    #[test]
    fn status_label_formats_price() {
        let i18n = I18n::new(Some("en-US".into()), None, &Config::default());
        let catalog = sample::catalog();
        let first = catalog.first().unwrap();
        assert_eq!(status_label(&i18n, first), "Available - $4,500");
    }

    #[test]
    fn position_label_reads_index_of_total() {
        let i18n = I18n::new(Some("en-US".into()), None, &Config::default());
        let (state, _) = State::new(
            sample::catalog(),
            Settings::default(),
            1280.0,
            std::time::Instant::now(),
        );
        assert_eq!(position_label(&i18n, &state).as_deref(), Some("1 of 6"));
    }

    #[test]
    fn sold_work_is_muted() {
        let colors = ColorScheme::light();
        let catalog = sample::catalog();
        let sold = catalog
            .artworks()
            .iter()
            .find(|a| a.price_status() == PriceStatus::Sold)
            .unwrap();
        assert_eq!(status_color(&colors, sold), colors.text_muted);
    }
}
