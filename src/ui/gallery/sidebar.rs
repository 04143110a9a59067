// SPDX-License-Identifier: MPL-2.0
//! Wide-layout sidebar: year index, grouped artwork list and the details of
//! the current artwork.
//!
//! Row heights come from [`State::section_metrics`] so the scroll offsets
//! computed by the section tracker line up with what is drawn.

use super::component::{Message, State, ViewEnv, LIST_SCROLLABLE_ID};
use super::{position_label, status_color, status_label};
use crate::gallery::grouping::{self, YearFilter};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{button, Column, Container, Id, Row, Scrollable, Space, Text};
use iced::{alignment, Element, Length, Padding};

pub fn view<'a>(state: &'a State, env: ViewEnv<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .push(year_index(state, env))
        .push(divider(env))
        .push(list(state, env))
        .push(divider(env))
        .push(details(state, env))
        .height(Length::Fill);

    Container::new(content)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(styles::container::panel(env.colors))
        .into()
}

fn divider<'a>(env: ViewEnv<'a>) -> Element<'a, Message> {
    Container::new(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(1.0))
        .style(styles::container::divider(env.colors))
        .into()
}

/// Chips that scroll the list to a year heading. Shared with the drawer.
pub(super) fn year_index<'a>(state: &'a State, env: ViewEnv<'a>) -> Element<'a, Message> {
    let active = state.tracker().active();
    let chips = grouping::filter_options(state.catalog().artworks())
        .into_iter()
        .map(|option| {
            let label = match option {
                YearFilter::All => env.i18n.tr("index-top"),
                YearFilter::Year(year) => year.to_string(),
            };
            button(Text::new(label).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::chip(env.colors, option == active))
                .on_press(Message::JumpToYear(option))
                .into()
        });

    Container::new(
        Row::with_children(chips)
            .spacing(spacing::XS)
            .wrap(),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .into()
}

fn list<'a>(state: &'a State, env: ViewEnv<'a>) -> Element<'a, Message> {
    let metrics = state.section_metrics();
    let current = state.sequencer().current();

    let mut column = Column::new().padding(Padding {
        top: metrics.top_padding,
        right: spacing::SM,
        bottom: 0.0,
        left: spacing::SM,
    });

    for group in grouping::group_by_year(state.catalog().artworks()) {
        column = column.push(
            Container::new(
                Text::new(group.year.to_string())
                    .size(typography::TITLE_SM)
                    .color(env.colors.text_primary),
            )
            .height(Length::Fixed(metrics.heading_height))
            .align_y(alignment::Vertical::Center),
        );
        for artwork in group.artworks {
            let active = current == Some(artwork.id());
            column = column.push(
                button(
                    Text::new(artwork.title())
                        .size(typography::BODY)
                        .wrapping(iced::widget::text::Wrapping::None),
                )
                .width(Length::Fill)
                .height(Length::Fixed(metrics.row_height))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::list_row(env.colors, active))
                .on_press(Message::Select(artwork.id().clone())),
            );
        }
        column = column.push(Space::new().height(Length::Fixed(metrics.group_spacing)));
    }

    Scrollable::new(column)
        .id(Id::new(LIST_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Vertical(Scrollbar::new()))
        .on_scroll(|viewport: Viewport| Message::ListScrolled {
            offset: viewport.absolute_offset().y,
            height: viewport.bounds().height,
        })
        .into()
}

fn details<'a>(state: &'a State, env: ViewEnv<'a>) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XS).padding(spacing::MD);

    if let Some(artwork) = state.current_artwork() {
        column = column
            .push(
                Text::new(artwork.title())
                    .size(typography::TITLE_MD)
                    .color(env.colors.text_primary),
            )
            .push(
                Text::new(artwork.year().to_string())
                    .size(typography::BODY_SM)
                    .color(env.colors.text_muted),
            );
        let caption = artwork.caption();
        if !caption.is_empty() {
            column = column.push(
                Text::new(caption)
                    .size(typography::BODY)
                    .color(env.colors.text_secondary),
            );
        }
        column = column.push(
            Text::new(status_label(env.i18n, artwork))
                .size(typography::BODY)
                .color(status_color(env.colors, artwork)),
        );
        if artwork.price_status().is_available() {
            column = column.push(
                button(Text::new(env.i18n.tr("sidebar-inquire")))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::primary(env.colors))
                    .on_press(Message::Inquire),
            );
        }
    }

    let many = state.visible_artworks().nth(1).is_some();
    let nav_button = |label: String, message: Message| {
        button(
            Text::new(label)
                .size(typography::BODY_SM)
                .align_x(alignment::Horizontal::Center),
        )
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::secondary(env.colors))
        .on_press_maybe(many.then_some(message))
    };
    let position = position_label(env.i18n, state).unwrap_or_default();
    column = column.push(
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(nav_button(env.i18n.tr("sidebar-previous"), Message::Previous))
            .push(
                Text::new(position)
                    .size(typography::CAPTION)
                    .color(env.colors.text_muted)
                    .width(Length::Shrink),
            )
            .push(nav_button(env.i18n.tr("sidebar-next"), Message::Next)),
    );

    let auto_key = if state.sequencer().auto_advance_enabled() {
        if state.sequencer().is_paused(state.now()) {
            "auto-advance-paused"
        } else {
            "auto-advance-on"
        }
    } else {
        "auto-advance-off"
    };
    column = column.push(
        button(
            Text::new(env.i18n.tr(auto_key))
                .size(typography::CAPTION)
                .color(env.colors.text_muted),
        )
        .padding(0)
        .style(styles::button::link(env.colors, false))
        .on_press(Message::ToggleAutoAdvance),
    );

    column.into()
}
