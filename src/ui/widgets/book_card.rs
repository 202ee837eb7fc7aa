//! Book card widget
//!
//! Displays one search result: cover, title, authors and a short blurb,
//! with an optional external link at the bottom.
//!
//! # Design
//!
//! This is a reusable widget that uses generic Message types.
//! It does not depend on application-specific types.

use iced::widget::{Space, button, column, container, image, row, svg, text};
use iced::{Alignment, Element, Fill, Length};

use crate::ui::icons;
use crate::ui::theme::{self, BOLD_WEIGHT};

/// Card size configuration
pub const CARD_WIDTH: f32 = 260.0;
const CARD_HEIGHT: f32 = 380.0;
const COVER_HEIGHT: f32 = 180.0;
const COVER_WIDTH: f32 = 120.0;

/// Texts shown on a card, already localized and truncated
pub struct CardLabels<'a> {
    pub title: String,
    pub authors: String,
    pub blurb: String,
    pub link_label: &'a str,
}

/// Create a book card element
///
/// # Arguments
/// * `labels` - Card texts
/// * `cover` - Cover image handle, a placeholder is drawn without one
/// * `on_select` - Message sent when the card is clicked
/// * `on_link` - Message sent by the link button; no button when `None`
pub fn view<'a, Message: Clone + 'a>(
    labels: CardLabels<'a>,
    cover: Option<&'a image::Handle>,
    on_select: Message,
    on_link: Option<Message>,
) -> Element<'a, Message> {
    let cover: Element<'a, Message> = match cover {
        Some(handle) => image(handle.clone())
            .width(COVER_WIDTH)
            .height(COVER_HEIGHT)
            .content_fit(iced::ContentFit::Contain)
            .border_radius(6.0)
            .into(),
        None => cover_placeholder(COVER_WIDTH, COVER_HEIGHT),
    };

    let title = text(labels.title)
        .size(16)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    let authors = text(labels.authors).size(13).style(|theme| text::Style {
        color: Some(theme::text_secondary(theme)),
    });

    let blurb = text(labels.blurb).size(12).style(|theme| text::Style {
        color: Some(theme::text_muted(theme)),
    });

    let link: Element<'a, Message> = match on_link {
        Some(msg) => button(
            row![
                text(labels.link_label).size(13),
                Space::new().width(6),
                svg(svg::Handle::from_memory(icons::EXTERNAL_LINK.as_bytes()))
                    .width(14)
                    .height(14)
                    .style(|theme, _status| svg::Style {
                        color: Some(theme::primary(theme)),
                    }),
            ]
            .align_y(Alignment::Center),
        )
        .padding(0)
        .style(theme::link_button)
        .on_press(msg)
        .into(),
        None => Space::new().height(0).into(),
    };

    let body = column![
        container(cover).width(Fill).center_x(Fill),
        Space::new().height(12),
        title,
        Space::new().height(4),
        authors,
        Space::new().height(8),
        blurb,
        Space::new().height(Fill),
        link,
    ]
    .width(Fill)
    .height(Fill);

    button(body)
        .width(CARD_WIDTH)
        .height(Length::Fixed(CARD_HEIGHT))
        .padding(16)
        .style(theme::card_button)
        .on_press(on_select)
        .into()
}

/// Book icon on a tinted box, used when no cover is available
pub fn cover_placeholder<'a, Message: 'a>(width: f32, height: f32) -> Element<'a, Message> {
    container(
        svg(svg::Handle::from_memory(icons::BOOK.as_bytes()))
            .width(40)
            .height(40)
            .style(|theme, _status| svg::Style {
                color: Some(theme::text_muted(theme)),
            }),
    )
    .width(width)
    .height(height)
    .center_x(width)
    .center_y(height)
    .style(theme::cover_placeholder)
    .into()
}
