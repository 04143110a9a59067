// SPDX-License-Identifier: MPL-2.0
//! Year filter bar: "All" plus one chip per year, newest first.

use super::component::{Message, State, ViewEnv};
use crate::gallery::grouping::{self, YearFilter};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, Container, Row, Scrollable, Text};
use iced::{alignment, Element, Length};

pub fn view<'a>(state: &'a State, env: ViewEnv<'a>) -> Element<'a, Message> {
    let artworks = state.catalog().artworks();
    let selected = state.filter();

    let chips = grouping::filter_options(artworks).into_iter().map(|option| {
        let count = grouping::count_for(artworks, option);
        let label = match option {
            YearFilter::All => env.i18n.tr("filter-all"),
            YearFilter::Year(year) => year.to_string(),
        };
        let chip = button(Text::new(label).size(typography::BODY_SM))
            .padding([spacing::XXS, spacing::MD])
            .style(styles::button::chip(env.colors, option == selected))
            .on_press(Message::FilterChanged(option));
        styles::tooltip::styled(
            chip,
            tooltip_text(env.i18n, option, count),
            styles::tooltip::Position::Top,
            env.colors,
        )
        .into()
    });

    let row = Row::with_children(chips)
        .spacing(spacing::XS)
        .padding([0.0, spacing::SM])
        .align_y(alignment::Vertical::Center)
        .height(Length::Fill);

    Container::new(
        Scrollable::new(row)
            .direction(Direction::Horizontal(Scrollbar::hidden()))
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::FILTER_BAR_HEIGHT))
    .style(styles::container::panel(env.colors))
    .into()
}

/// Accessible description of a chip.
fn tooltip_text(i18n: &I18n, option: YearFilter, count: usize) -> String {
    let count = count.to_string();
    match option {
        YearFilter::All => i18n.tr_with_args("filter-all-tooltip", &[("count", count.as_str())]),
        YearFilter::Year(year) => {
            let year = year.to_string();
            i18n.tr_with_args(
                "filter-year-tooltip",
                &[("year", year.as_str()), ("count", count.as_str())],
            )
        }
    }
}
