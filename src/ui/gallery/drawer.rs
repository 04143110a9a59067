// SPDX-License-Identifier: MPL-2.0
//! Compact-layout drawer listing every artwork by year, with the same year
//! index and scroll-synchronized indicator as the wide sidebar.

use super::component::{Message, State, ViewEnv, LIST_SCROLLABLE_ID};
use super::sidebar;
use crate::gallery::grouping;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{
    button, mouse_area, opaque, Column, Container, Id, Row, Scrollable, Space, Text,
};
use iced::{alignment, Element, Length, Padding};

pub fn view<'a>(state: &'a State, env: ViewEnv<'a>) -> Element<'a, Message> {
    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .padding([spacing::SM, spacing::MD])
        .push(
            Text::new(env.i18n.tr("drawer-title"))
                .size(typography::TITLE_SM)
                .width(Length::Fill),
        )
        .push(styles::tooltip::styled(
            button(Text::new("\u{00d7}").size(typography::TITLE_SM))
                .padding([0.0, spacing::XS])
                .style(styles::button::link(env.colors, false))
                .on_press(Message::CloseDrawer),
            env.i18n.tr("drawer-close"),
            styles::tooltip::Position::Left,
            env.colors,
        ));

    let metrics = state.section_metrics();
    let current = state.sequencer().current();
    let mut list = Column::new().padding(Padding {
        top: metrics.top_padding,
        right: spacing::SM,
        bottom: 0.0,
        left: spacing::SM,
    });
    for group in grouping::group_by_year(state.catalog().artworks()) {
        list = list.push(
            Container::new(
                Text::new(group.year.to_string())
                    .size(typography::BODY_LG)
                    .color(env.colors.text_muted),
            )
            .height(Length::Fixed(metrics.heading_height))
            .padding([0.0, spacing::XS])
            .align_y(alignment::Vertical::Center),
        );
        for artwork in group.artworks {
            let active = current == Some(artwork.id());
            let row = Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(artwork.title()).size(typography::BODY))
                .push(
                    Text::new(artwork.medium())
                        .size(typography::CAPTION)
                        .color(env.colors.text_muted),
                );
            list = list.push(
                button(row)
                    .width(Length::Fill)
                    .height(Length::Fixed(metrics.row_height))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::button::list_row(env.colors, active))
                    .on_press(Message::Select(artwork.id().clone())),
            );
        }
        list = list.push(Space::new().height(Length::Fixed(metrics.group_spacing)));
    }

    let panel = Container::new(
        Column::new()
            .push(header)
            .push(sidebar::year_index(state, env))
            .push(
                Scrollable::new(list)
                    .id(Id::new(LIST_SCROLLABLE_ID))
                    .direction(Direction::Vertical(Scrollbar::new()))
                    .height(Length::Fill)
                    .on_scroll(|viewport: Viewport| Message::ListScrolled {
                        offset: viewport.absolute_offset().y,
                        height: viewport.bounds().height,
                    }),
            ),
    )
    .width(Length::Fixed(sizing::DRAWER_WIDTH))
    .height(Length::Fill)
    .style(styles::container::drawer(env.colors));

    // Tapping beside the panel closes the drawer.
    let scrim = mouse_area(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::scrim(env.colors)),
    )
    .on_press(Message::CloseDrawer);

    Row::new()
        .push(opaque(panel))
        .push(scrim)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
