// SPDX-License-Identifier: MPL-2.0
//! The artwork stage: two crossfading layers, loading and retry states,
//! navigation arrows and (compact layout) the caption overlay.

use super::component::{Message, State, ViewEnv};
use super::{position_label, status_color, status_label};
use crate::gallery::crossfade::Layer;
use crate::gallery::image_load::Phase;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::Image;
use iced::widget::{button, mouse_area, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

pub fn view<'a>(state: &'a State, env: ViewEnv<'a>) -> Element<'a, Message> {
    let now = state.now();
    let crossfade = state.sequencer().crossfade();
    let load = state.image_load();

    let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);
    for layer in [Layer::One, Layer::Two] {
        let Some(id) = crossfade.artwork(layer) else {
            continue;
        };
        let Some(image) = state.display_image(id) else {
            continue;
        };
        let mut alpha = crossfade.opacity(layer, now);
        if load.artwork() == Some(id) {
            alpha *= load.opacity(now);
        }
        if alpha <= opacity::TRANSPARENT {
            continue;
        }
        layers = layers.push(
            Image::new(image.handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill)
                .opacity(alpha),
        );
    }

    if load.show_skeleton() {
        layers = layers.push(skeleton(env));
    }
    if let Phase::Errored { message_key } = load.phase() {
        layers = layers.push(retry(message_key, env));
    }
    if state.visible_artworks().nth(1).is_some() {
        layers = layers.push(arrows(env));
    }
    if state.is_compact() {
        layers = layers.push(caption_overlay(state, env));
    }

    let framed = Container::new(layers)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::stage(env.colors));

    mouse_area(framed).on_press(Message::StageClicked).into()
}

fn skeleton<'a>(env: ViewEnv<'a>) -> Element<'a, Message> {
    let block = Container::new(Text::new(env.i18n.tr("stage-loading")).size(typography::BODY_SM))
        .width(Length::FillPortion(2))
        .height(Length::FillPortion(2))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::skeleton(env.colors));

    Container::new(block)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XXL)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn retry<'a>(message_key: &'static str, env: ViewEnv<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(env.i18n.tr(message_key))
                .size(typography::BODY)
                .color(env.colors.error),
        )
        .push(
            button(Text::new(env.i18n.tr("stage-retry")))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary(env.colors))
                .on_press(Message::Retry),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn arrows<'a>(env: ViewEnv<'a>) -> Element<'a, Message> {
    let arrow = |glyph: &'static str, label: String, message: Message| {
        styles::tooltip::styled(
            button(
                Text::new(glyph)
                    .size(typography::TITLE_MD)
                    .align_x(alignment::Horizontal::Center),
            )
            .width(Length::Fixed(sizing::NAV_BUTTON))
            .height(Length::Fixed(sizing::NAV_BUTTON))
            .style(styles::button::overlay(
                opacity::OVERLAY_MEDIUM,
                opacity::OVERLAY_HOVER,
            ))
            .on_press(message),
            label,
            styles::tooltip::Position::Bottom,
            env.colors,
        )
    };

    Row::new()
        .push(arrow("\u{2039}", env.i18n.tr("stage-previous"), Message::Previous))
        .push(Space::new().width(Length::Fill))
        .push(arrow("\u{203a}", env.i18n.tr("stage-next"), Message::Next))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Title (and, when expanded, details) laid over the bottom of the stage.
fn caption_overlay<'a>(state: &'a State, env: ViewEnv<'a>) -> Element<'a, Message> {
    let Some(artwork) = state.current_artwork() else {
        return Space::new().into();
    };

    let mut title = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(artwork.title())
                .size(typography::BODY_LG)
                .color(env.colors.overlay_text),
        );
    if let Some(position) = position_label(env.i18n, state) {
        title = title.push(Text::new(position).size(typography::CAPTION));
    }
    let mut details = Column::new().spacing(spacing::XXS).push(title);
    if state.is_info_visible() {
        details = details
            .push(Text::new(artwork.year().to_string()).size(typography::CAPTION))
            .push(Text::new(artwork.caption()).size(typography::BODY_SM))
            .push(
                Text::new(status_label(env.i18n, artwork))
                    .size(typography::BODY_SM)
                    .color(status_color(env.colors, artwork)),
            );
        if artwork.price_status().is_available() {
            details = details.push(
                button(Text::new(env.i18n.tr("sidebar-inquire")).size(typography::BODY_SM))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::button::primary(env.colors))
                    .on_press(Message::Inquire),
            );
        }
    }

    let toggle_label = if state.is_info_visible() {
        env.i18n.tr("stage-hide-info")
    } else {
        env.i18n.tr("stage-show-info")
    };
    let toggle = button(Text::new("i").size(typography::BODY))
        .width(Length::Fixed(sizing::NAV_BUTTON))
        .height(Length::Fixed(sizing::NAV_BUTTON))
        .style(styles::button::overlay(
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press(Message::ToggleInfo);

    let bar = Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(details).width(Length::Fill))
            .push(styles::tooltip::styled(
                toggle,
                toggle_label,
                styles::tooltip::Position::Top,
                env.colors,
            )),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(styles::container::caption_bar(env.colors));

    Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Bottom)
        .into()
}
