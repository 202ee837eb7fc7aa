//! Search page - query input, suggestions and result grid
//!
//! Shows a hint before the first search, a loading line while a request is
//! in flight, an error banner on failure and the result grid otherwise.

use iced::widget::{Space, column, container, scrollable, text};
use iced::{Element, Fill, Padding};

use crate::app::{Message, SearchPageState};
use crate::features::SearchStatus;
use crate::i18n::{Key, Locale};
use crate::ui::components::{book_grid, search_bar};
use crate::ui::theme;
use crate::ui::widgets::section_header;

/// Horizontal padding around the page content
const PAGE_PADDING: f32 = 32.0;

fn message_line<'a>(content: String) -> Element<'a, Message> {
    container(text(content).size(15).style(|theme| text::Style {
        color: Some(theme::text_secondary(theme)),
    }))
    .width(Fill)
    .center_x(Fill)
    .padding(48)
    .into()
}

/// Single-line text for every status except `Results`
///
/// Failures show only the localized message; the underlying error is logged
/// where the response is handled.
fn status_text(status: &SearchStatus<'_>, locale: Locale) -> Option<&'static str> {
    match status {
        SearchStatus::Idle => Some(locale.get(Key::SearchHint)),
        SearchStatus::Loading => Some(locale.get(Key::SearchLoading)),
        SearchStatus::Failed(_) => Some(locale.get(Key::SearchError)),
        SearchStatus::Empty => Some(locale.get(Key::SearchNoResults)),
        SearchStatus::Results => None,
    }
}

/// Build the search page view
pub fn view<'a>(
    page: &'a SearchPageState,
    window_width: f32,
    locale: Locale,
) -> Element<'a, Message> {
    let state = &page.state;

    let bar = search_bar::view(state.query(), state.suggestions(), state.is_loading(), locale);

    let status = state.status();
    let body: Element<'a, Message> = match (&status, status_text(&status, locale)) {
        (SearchStatus::Failed(_), Some(message)) => container(text(message).size(15))
            .width(Fill)
            .padding(16)
            .style(theme::error_banner)
            .into(),
        (_, Some(message)) => message_line(message.to_string()),
        (_, None) => {
            let heading = state
                .last_query()
                .map(|q| format!("\u{201c}{}\u{201d}", q))
                .unwrap_or_default();
            let count = locale.format(Key::SearchResultsCount, state.results().len());
            column![
                section_header::view(heading, Some(count)),
                Space::new().height(16),
                book_grid::view(
                    state.results(),
                    &page.covers,
                    window_width - PAGE_PADDING * 2.0,
                    locale,
                ),
            ]
            .into()
        }
    };

    let content = column![bar, Space::new().height(24), body]
        .width(Fill)
        .padding(Padding::new(PAGE_PADDING).top(24.0));

    scrollable(content)
        .width(Fill)
        .height(Fill)
        .style(theme::scrollable_style)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn test_failure_shows_only_localized_message() {
        let locale = Locale::new(Language::Spanish);
        let status =
            SearchStatus::Failed("error sending request for url (https://www.googleapis.com)");
        let message = status_text(&status, locale).unwrap();

        assert_eq!(message, locale.get(Key::SearchError));
        assert!(!message.contains("error sending request"));
    }

    #[test]
    fn test_results_have_no_status_line() {
        let locale = Locale::new(Language::English);
        assert!(status_text(&SearchStatus::Results, locale).is_none());
        assert_eq!(
            status_text(&SearchStatus::Empty, locale),
            Some(locale.get(Key::SearchNoResults))
        );
    }
}
