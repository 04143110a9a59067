// SPDX-License-Identifier: MPL-2.0
//! Horizontal thumbnail strip of the visible artworks.

use super::component::{Message, State, ViewEnv, FILMSTRIP_SCROLLABLE_ID};
use crate::gallery::filmstrip::StripMetrics;
use crate::ui::design_tokens::{sizing, typography};
use crate::ui::styles;
use iced::widget::image::Image;
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{button, Container, Id, Row, Scrollable, Text};
use iced::{alignment, ContentFit, Element, Length};

pub fn view<'a>(state: &'a State, env: ViewEnv<'a>) -> Element<'a, Message> {
    let metrics = StripMetrics::default();
    let current = state.sequencer().current();

    let thumbnails = state.visible_artworks().map(|artwork| {
        let face: Element<'a, Message> = match state.thumbnail_image(artwork) {
            Some(image) => Image::new(image.handle.clone())
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => Container::new(
                Text::new(initials(artwork.title())).size(typography::CAPTION),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into(),
        };
        let active = current == Some(artwork.id());
        button(face)
            .width(Length::Fixed(metrics.thumbnail_width))
            .height(Length::Fixed(metrics.thumbnail_width))
            .padding(2)
            .style(styles::button::thumbnail(env.colors, active))
            .on_press(Message::Select(artwork.id().clone()))
            .into()
    });

    let row = Row::with_children(thumbnails)
        .spacing(metrics.spacing)
        .padding([0.0, metrics.padding])
        .align_y(alignment::Vertical::Center)
        .height(Length::Fill);

    let strip = Scrollable::new(row)
        .id(Id::new(FILMSTRIP_SCROLLABLE_ID))
        .direction(Direction::Horizontal(Scrollbar::new().width(4).scroller_width(4)))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::FilmstripScrolled {
            offset: viewport.absolute_offset().x,
            width: viewport.bounds().width,
        });

    Container::new(strip)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::FILMSTRIP_HEIGHT))
        .style(styles::container::panel(env.colors))
        .into()
}

/// Placeholder text until the thumbnail arrives.
fn initials(title: &str) -> String {
    title
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}
