//! Search bar component
//! Rounded search input with a submit button and the suggestion list

use iced::widget::{Space, button, column, container, row, svg, text, text_input};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::features::search::Suggestion;
use crate::i18n::{Key, Locale};
use crate::ui::icons;
use crate::ui::theme::{self, MEDIUM_WEIGHT};

/// Widest the search row grows
const MAX_WIDTH: f32 = 720.0;

/// Build the search bar component
pub fn view<'a>(
    query: &'a str,
    suggestions: &'a [Suggestion],
    is_loading: bool,
    locale: Locale,
) -> Element<'a, Message> {
    let search_icon = svg(svg::Handle::from_memory(icons::SEARCH.as_bytes()))
        .width(18)
        .height(18)
        .style(|theme, _status| svg::Style {
            color: Some(theme::text_muted(theme)),
        });

    let input = text_input(locale.get(Key::SearchPlaceholder), query)
        .on_input(Message::SearchChanged)
        .on_submit(Message::SearchSubmit)
        .padding(Padding::new(12.0).left(12.0))
        .size(15)
        .style(theme::search_input);

    let submit = button(
        text(locale.get(Key::SearchButton))
            .size(14)
            .font(iced::Font {
                weight: MEDIUM_WEIGHT,
                ..Default::default()
            }),
    )
    .padding([12, 20])
    .style(theme::primary_button)
    // Disabled while blank or while a search is in flight
    .on_press_maybe((!query.trim().is_empty() && !is_loading).then_some(Message::SearchSubmit));

    let search_row = row![search_icon, Space::new().width(12), input, Space::new().width(12), submit]
        .align_y(Alignment::Center);

    let mut content = column![search_row].max_width(MAX_WIDTH);

    if !suggestions.is_empty() {
        content = content
            .push(Space::new().height(6))
            .push(suggestion_list(suggestions, locale));
    }

    container(content).width(Fill).center_x(Fill).into()
}

fn suggestion_list<'a>(suggestions: &'a [Suggestion], locale: Locale) -> Element<'a, Message> {
    let untitled = locale.get(Key::BookUnknownTitle);

    let items = suggestions.iter().map(|suggestion| -> Element<'a, Message> {
        button(text(suggestion.label(untitled)).size(14))
            .width(Fill)
            .padding([8, 12])
            .style(theme::suggestion_item)
            .on_press(Message::SuggestionPicked(suggestion.value.clone()))
            .into()
    });

    container(column(items).spacing(2))
        .width(Fill)
        .padding(6)
        .style(theme::suggestion_panel)
        .into()
}
