// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::app::config::SiteConfig;
use crate::i18n::fluent::I18n;
use crate::ui::about::{self, ViewContext as AboutViewContext};
use crate::ui::contact::{self, ViewContext as ContactViewContext};
use crate::ui::design_tokens::typography;
use crate::ui::gallery;
use crate::ui::header::{self, ViewContext as HeaderViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use iced::{
    alignment,
    widget::{Column, Container, Stack, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: &'a AppTheme,
    pub site: &'a SiteConfig,
    pub screen: Screen,
    pub gallery: Option<&'a gallery::State>,
    pub content_loading: bool,
    pub notifications: &'a notifications::Manager,
    pub fullscreen: bool,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let colors = &ctx.theme.colors;

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Gallery => view_gallery(&ctx),
        Screen::About => about::view(AboutViewContext {
            i18n: ctx.i18n,
            colors,
            site: ctx.site,
        })
        .map(Message::About),
        Screen::Contact => contact::view(ContactViewContext {
            i18n: ctx.i18n,
            colors,
            site: ctx.site,
        })
        .map(Message::Contact),
    };

    let mut column = Column::new();
    // In fullscreen mode, don't show the header
    if !ctx.fullscreen {
        let show_menu = ctx.screen == Screen::Gallery
            && ctx.gallery.is_some_and(gallery::State::is_compact);
        column = column.push(
            header::view(HeaderViewContext {
                i18n: ctx.i18n,
                colors,
                artist_name: ctx.site.artist_name(),
                screen: ctx.screen,
                show_menu,
            })
            .map(Message::Header),
        );
    }
    column = column.push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let base = Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::stage(colors));

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n, colors).map(Message::Notification);

    Stack::new()
        .push(base)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_gallery<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match ctx.gallery {
        Some(gallery) => gallery
            .view(gallery::ViewEnv {
                i18n: ctx.i18n,
                colors: &ctx.theme.colors,
            })
            .map(Message::Gallery),
        None => {
            let key = if ctx.content_loading {
                "content-loading"
            } else {
                "empty-title"
            };
            Container::new(
                Text::new(ctx.i18n.tr(key))
                    .size(typography::BODY_LG)
                    .color(ctx.theme.colors.text_muted),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into()
        }
    }
}
