// SPDX-License-Identifier: MPL-2.0
//! Top bar: artist name, screen links and, in the compact layout, the
//! button that opens the artwork drawer.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::Vertical;
use iced::widget::{button, Container, Row, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub artist_name: &'a str,
    pub screen: Screen,
    /// Shows the drawer button (compact gallery only).
    pub show_menu: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Screen),
    ToggleDrawer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Screen),
    ToggleDrawer,
}

#[must_use]
pub fn update(message: &Message, current: Screen) -> Event {
    match message {
        Message::Navigate(screen) if *screen == current => Event::None,
        Message::Navigate(screen) => Event::Navigate(*screen),
        Message::ToggleDrawer => Event::ToggleDrawer,
    }
}

#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .padding([0.0, spacing::MD]);

    if ctx.show_menu {
        row = row.push(
            styles::tooltip::styled(
                button(Text::new("\u{2630}").size(typography::TITLE_SM))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::button::link(ctx.colors, false))
                    .on_press(Message::ToggleDrawer),
                ctx.i18n.tr("header-menu"),
                styles::tooltip::Position::Bottom,
                ctx.colors,
            ),
        );
    }

    row = row.push(
        button(
            Text::new(ctx.artist_name)
                .size(typography::TITLE_SM)
                .color(ctx.colors.text_primary),
        )
        .padding(0)
        .style(styles::button::link(ctx.colors, false))
        .on_press(Message::Navigate(Screen::Gallery)),
    );
    row = row.push(Container::new(Text::new("")).width(Length::Fill));

    for screen in Screen::ALL {
        row = row.push(
            button(Text::new(ctx.i18n.tr(screen.nav_key())).size(typography::BODY))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::link(ctx.colors, screen == ctx.screen))
                .on_press(Message::Navigate(screen)),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .align_y(Vertical::Center)
        .style(styles::container::panel(ctx.colors))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigating_to_current_screen_is_a_no_op() {
        assert_eq!(update(&Message::Navigate(Screen::About), Screen::About), Event::None);
        assert_eq!(
            update(&Message::Navigate(Screen::Contact), Screen::Gallery),
            Event::Navigate(Screen::Contact)
        );
    }

    #[test]
    fn drawer_toggle_bubbles_up() {
        assert_eq!(update(&Message::ToggleDrawer, Screen::Gallery), Event::ToggleDrawer);
    }
}
