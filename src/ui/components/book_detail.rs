//! Book detail dialog component
//!
//! Modal panel with the full description and bibliographic facts of the
//! selected volume.

use iced::mouse::Interaction;
use iced::widget::{
    Space, button, column, container, image, mouse_area, opaque, row, scrollable, svg, text,
};
use iced::{Alignment, Element, Fill};

use crate::api::Volume;
use crate::app::Message;
use crate::features::books::DetailText;
use crate::i18n::{Key, Locale};
use crate::ui::icons;
use crate::ui::theme::{self, BOLD_WEIGHT, MEDIUM_WEIGHT};
use crate::ui::widgets;

const DIALOG_WIDTH: f32 = 640.0;
const DIALOG_MAX_HEIGHT: f32 = 720.0;

fn icon_label<'a>(source: &'static str, label: &'a str) -> Element<'a, Message> {
    row![
        svg(svg::Handle::from_memory(source.as_bytes()))
            .width(16)
            .height(16)
            .style(|theme, _status| svg::Style {
                color: Some(theme::primary(theme)),
            }),
        Space::new().width(6),
        text(label).size(14),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Build the detail dialog for `volume`
pub fn view<'a>(
    volume: &'a Volume,
    cover: Option<&'a image::Handle>,
    locale: Locale,
) -> Element<'a, Message> {
    let detail = DetailText::new(volume, &locale);

    let cover: Element<'a, Message> = match cover {
        Some(handle) => image(handle.clone())
            .width(128)
            .height(192)
            .content_fit(iced::ContentFit::Contain)
            .border_radius(6.0)
            .into(),
        None => widgets::cover_placeholder(128.0, 192.0),
    };

    let close_btn = button(
        svg(svg::Handle::from_memory(icons::CLOSE.as_bytes()))
            .width(18)
            .height(18)
            .style(|theme, _status| svg::Style {
                color: Some(theme::text_secondary(theme)),
            }),
    )
    .padding(6)
    .style(theme::icon_button)
    .on_press(Message::CloseDetail);

    let heading = column![
        text(detail.title)
            .size(22)
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            })
            .style(|theme| text::Style {
                color: Some(theme::text_primary(theme)),
            }),
        Space::new().height(6),
        text(detail.authors).size(15).style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        }),
    ]
    .width(Fill);

    // Label / value rows for the facts this volume has
    let facts = column(detail.facts.into_iter().map(|(key, value)| -> Element<'a, Message> {
        row![
            text(locale.get(key))
                .size(13)
                .width(120)
                .font(iced::Font {
                    weight: MEDIUM_WEIGHT,
                    ..Default::default()
                })
                .style(|theme| text::Style {
                    color: Some(theme::text_muted(theme)),
                }),
            text(value).size(13).style(|theme| text::Style {
                color: Some(theme::text_primary(theme)),
            }),
        ]
        .into()
    }))
    .spacing(6);

    let top = row![
        cover,
        Space::new().width(20),
        column![heading, Space::new().height(16), facts].width(Fill),
        close_btn,
    ];

    let description = column![
        text(locale.get(Key::DetailDescription))
            .size(15)
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            }),
        Space::new().height(8),
        text(detail.description)
            .size(14)
            .line_height(1.5)
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
    ];

    let actions: Element<'a, Message> = match detail.link {
        Some(link) => row![
            button(icon_label(icons::COPY, locale.get(Key::DetailCopyLink)))
                .padding([10, 16])
                .style(theme::secondary_button)
                .on_press(Message::CopyLink(link.clone())),
            Space::new().width(12),
            button(icon_label(icons::EXTERNAL_LINK, locale.get(Key::BookViewOnGoogle)))
                .padding([10, 16])
                .style(theme::secondary_button)
                .on_press(Message::OpenLink(link)),
            Space::new().width(Fill),
            button(text(locale.get(Key::DetailClose)).size(14))
                .padding([10, 16])
                .style(theme::primary_button)
                .on_press(Message::CloseDetail),
        ]
        .align_y(Alignment::Center)
        .into(),
        None => row![
            Space::new().width(Fill),
            button(text(locale.get(Key::DetailClose)).size(14))
                .padding([10, 16])
                .style(theme::primary_button)
                .on_press(Message::CloseDetail),
        ]
        .into(),
    };

    let dialog_content = column![
        top,
        Space::new().height(20),
        scrollable(description)
            .height(iced::Length::Shrink)
            .style(theme::scrollable_style),
        Space::new().height(20),
        actions,
    ]
    .padding(24);

    let dialog_box = container(dialog_content)
        .width(DIALOG_WIDTH)
        .max_height(DIALOG_MAX_HEIGHT)
        .style(|theme| iced::widget::container::Style {
            shadow: iced::Shadow {
                color: theme::shadow_color(theme),
                offset: iced::Vector::new(0.0, 12.0),
                blur_radius: 32.0,
            },
            ..theme::card(theme)
        });

    // Backdrop with event interception; the dialog itself swallows its clicks
    let backdrop_content = container(opaque(dialog_box))
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .padding(24)
        .style(|theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(theme::overlay_backdrop(theme, 1.0))),
            ..Default::default()
        });

    // Clicking the backdrop closes the dialog
    let event_blocker = mouse_area(backdrop_content)
        .interaction(Interaction::Idle)
        .on_press(Message::CloseDetail);

    // opaque keeps clicks from reaching the page underneath
    opaque(event_blocker).into()
}
