//! Result grid component for the search page
//!
//! Displays book cards in a responsive grid layout.

use std::collections::HashMap;

use iced::widget::{Space, column, image, row};
use iced::{Element, Fill};

use crate::api::Volume;
use crate::app::Message;
use crate::features::books::CardText;
use crate::i18n::{Key, Locale};
use crate::ui::widgets::{self, CARD_WIDTH, CardLabels};

/// Grid configuration
const CARD_SPACING: f32 = 20.0;
const ROW_SPACING: f32 = 20.0;

/// Calculate number of columns based on container width
fn calculate_columns(container_width: f32) -> usize {
    let columns = ((container_width + CARD_SPACING) / (CARD_WIDTH + CARD_SPACING)).floor() as usize;
    columns.max(1)
}

/// Create the result grid element
pub fn view<'a>(
    volumes: &'a [Volume],
    covers: &'a HashMap<String, image::Handle>,
    container_width: f32,
    locale: Locale,
) -> Element<'a, Message> {
    if volumes.is_empty() {
        return Space::new().width(Fill).height(100).into();
    }

    let columns = calculate_columns(container_width);
    let link_label = locale.get(Key::BookViewOnGoogle);

    let rows = volumes
        .chunks(columns)
        .map(|chunk| -> Element<'a, Message> {
            let mut items: Vec<Element<'a, Message>> = chunk
                .iter()
                .map(|volume| {
                    let card = CardText::new(volume, &locale);
                    widgets::book_card::view(
                        CardLabels {
                            title: card.title,
                            authors: card.authors,
                            blurb: card.blurb,
                            link_label,
                        },
                        covers.get(&volume.id),
                        Message::SelectBook(volume.id.clone()),
                        card.link.map(Message::OpenLink),
                    )
                })
                .collect();

            // Pad incomplete rows so cards keep their column alignment
            for _ in chunk.len()..columns {
                items.push(Space::new().width(CARD_WIDTH).into());
            }

            row(items).spacing(CARD_SPACING).into()
        })
        .collect::<Vec<Element<'a, Message>>>();

    column(rows).spacing(ROW_SPACING).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_follow_width() {
        assert_eq!(calculate_columns(0.0), 1);
        assert_eq!(calculate_columns(CARD_WIDTH), 1);
        assert_eq!(calculate_columns(CARD_WIDTH * 2.0 + CARD_SPACING), 2);
        assert_eq!(calculate_columns(1200.0), 4);
    }
}
