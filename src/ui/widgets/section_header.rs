//! Section header widget
//!
//! Displays a section title with an optional muted caption on the right,
//! such as a result count.

use iced::widget::{Space, row, text};
use iced::{Alignment, Element, Fill};

use crate::ui::theme::{self, BOLD_WEIGHT};

/// Create a section header element
///
/// # Arguments
/// * `title` - The section title text
/// * `caption` - Optional text shown at the right edge
pub fn view<'a, Message: 'a>(title: String, caption: Option<String>) -> Element<'a, Message> {
    let title_text = text(title)
        .size(22)
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        })
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        });

    let caption: Element<'a, Message> = match caption {
        Some(caption) => text(caption)
            .size(14)
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            })
            .into(),
        None => Space::new().width(0).into(),
    };

    row![title_text, Space::new().width(Fill), caption]
        .align_y(Alignment::Center)
        .into()
}
