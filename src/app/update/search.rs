//! Book search handlers

use std::time::Duration;

use iced::Task;
use iced::widget::image;

use super::navigation::after;
use crate::app::message::{DebounceKey, Message};
use crate::app::state::App;
use crate::features::search::Suggestion;
use crate::i18n::Key;
use crate::ui::widgets::Toast;

impl App {
    /// Run a full search for `text`; blank text does nothing
    fn start_search(&mut self, text: &str) -> Task<Message> {
        let page = &mut self.ui.search;
        page.debouncer.cancel(&DebounceKey::Suggestions);

        let Some(ticket) = page.state.submit(text) else {
            return Task::none();
        };
        page.covers.clear();

        tracing::info!("Searching '{}' (#{})", ticket.query, ticket.seq);
        let client = self.core.client.clone();
        let seq = ticket.seq;
        Task::perform(
            async move {
                client
                    .search(&ticket.query)
                    .await
                    .map_err(|e| format!("{:#}", e))
            },
            move |result| Message::SearchLoaded(seq, result),
        )
    }

    /// Look up suggestions for the current input, if still long enough
    pub(super) fn start_suggestions(&mut self) -> Task<Message> {
        let state = &mut self.ui.search.state;
        let query = state.query().trim().to_string();
        if query.chars().count() < self.core.settings.search.min_query_chars.max(1) {
            return Task::none();
        }

        let ticket = state.begin_suggest(&query);
        let client = self.core.client.clone();
        let seq = ticket.seq;
        Task::perform(
            async move {
                client
                    .suggest(&ticket.query)
                    .await
                    .map(|volumes| {
                        volumes
                            .iter()
                            .map(|v| Suggestion::from_volume(v, &ticket.query))
                            .collect()
                    })
                    .map_err(|e| format!("{:#}", e))
            },
            move |result| Message::SuggestionsLoaded(seq, result),
        )
    }

    /// Download covers for the current results
    fn load_covers(&self, seq: u64) -> Task<Message> {
        let tasks: Vec<_> = self
            .ui
            .search
            .state
            .results()
            .iter()
            .filter_map(|volume| {
                let url = volume.thumbnail.clone()?;
                let id = volume.id.clone();
                let client = self.core.client.clone();
                Some(Task::perform(
                    async move { client.cover(&url).await },
                    move |result| match result {
                        Ok(bytes) => Message::CoverLoaded(seq, id.clone(), bytes),
                        Err(e) => {
                            tracing::debug!("Cover for {} unavailable: {}", id, e);
                            Message::Noop
                        }
                    },
                ))
            })
            .collect();

        tracing::debug!("Loading {} covers for search #{}", tasks.len(), seq);
        Task::batch(tasks)
    }

    /// Handle search-related messages
    pub fn handle_search(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::SearchChanged(text) => {
                let page = &mut self.ui.search;
                if page.state.update_query(text).is_some() {
                    let ticket = page.debouncer.schedule(DebounceKey::Suggestions);
                    let delay = Duration::from_millis(self.core.settings.search.debounce_ms);
                    Some(after(delay, ticket))
                } else {
                    page.debouncer.cancel(&DebounceKey::Suggestions);
                    Some(Task::none())
                }
            }

            Message::SearchSubmit => {
                let text = self.ui.search.state.query().to_string();
                Some(self.start_search(&text))
            }

            Message::SuggestionPicked(value) => Some(self.start_search(value)),

            Message::SuggestionsLoaded(seq, result) => {
                self.ui
                    .search
                    .state
                    .apply_suggestions(*seq, result.clone());
                Some(Task::none())
            }

            Message::SearchLoaded(seq, result) => {
                if !self.ui.search.state.apply_search(*seq, result.clone()) {
                    return Some(Task::none());
                }
                match result {
                    Ok(volumes) => {
                        tracing::info!("Search #{} loaded {} volumes", seq, volumes.len());
                        Some(self.load_covers(*seq))
                    }
                    Err(e) => {
                        tracing::warn!("Search #{} failed: {}", seq, e);
                        Some(Task::none())
                    }
                }
            }

            Message::CoverLoaded(seq, id, bytes) => {
                let page = &mut self.ui.search;
                if *seq != page.state.latest_search_seq() {
                    return Some(Task::none());
                }
                if crate::utils::detect_image_format(bytes).is_some() {
                    page.covers
                        .insert(id.clone(), image::Handle::from_bytes(bytes.clone()));
                } else {
                    tracing::debug!("Cover for {} is not an image", id);
                }
                Some(Task::none())
            }

            Message::SelectBook(id) => {
                if !self.ui.search.state.select(id) {
                    tracing::debug!("Ignoring selection of unknown volume {}", id);
                }
                Some(Task::none())
            }

            Message::CloseDetail => {
                self.ui.search.state.clear_selection();
                Some(Task::none())
            }

            Message::CopyLink(url) => {
                let toast = Toast::success(self.core.locale.get(Key::ToastLinkCopied));
                Some(Task::batch([
                    iced::clipboard::write(url.clone()),
                    self.show_toast(toast),
                ]))
            }

            Message::OpenLink(url) => {
                if let Err(e) = crate::utils::open_url(url) {
                    tracing::warn!("Could not open link: {}", e);
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Volume;
    use crate::app::message::Page;
    use crate::features::SearchStatus;
    use crate::features::Settings;

    fn app() -> App {
        App::with_settings(Settings::default())
    }

    fn volume(id: &str) -> Volume {
        Volume {
            id: id.to_string(),
            title: Some(format!("Book {}", id)),
            ..Default::default()
        }
    }

    #[test]
    fn test_typing_schedules_suggestions_past_threshold() {
        let mut app = app();
        let _ = app.update(Message::SearchChanged("d".to_string()));
        assert!(!app.ui.search.debouncer.is_pending(&DebounceKey::Suggestions));

        let _ = app.update(Message::SearchChanged("du".to_string()));
        assert!(app.ui.search.debouncer.is_pending(&DebounceKey::Suggestions));

        // Deleting back below the threshold cancels the pending lookup
        let _ = app.update(Message::SearchChanged("d".to_string()));
        assert!(!app.ui.search.debouncer.is_pending(&DebounceKey::Suggestions));
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let mut app = app();
        let _ = app.update(Message::SearchChanged("   ".to_string()));
        let _ = app.update(Message::SearchSubmit);
        assert_eq!(app.ui.search.state.status(), SearchStatus::Idle);
        assert_eq!(app.ui.search.state.latest_search_seq(), 0);
    }

    #[test]
    fn test_submit_then_results() {
        let mut app = app();
        let _ = app.update(Message::SearchChanged("dune".to_string()));
        let _ = app.update(Message::SearchSubmit);
        assert_eq!(app.ui.search.state.status(), SearchStatus::Loading);
        // Submitting drops the pending suggestion lookup
        assert!(!app.ui.search.debouncer.is_pending(&DebounceKey::Suggestions));

        let seq = app.ui.search.state.latest_search_seq();
        let _ = app.update(Message::SearchLoaded(seq, Ok(vec![volume("1"), volume("2")])));
        assert_eq!(app.ui.search.state.status(), SearchStatus::Results);
        assert_eq!(app.ui.search.state.results().len(), 2);
    }

    #[test]
    fn test_failed_search_shows_error_state() {
        let mut app = app();
        let _ = app.update(Message::SuggestionPicked("Dune".to_string()));
        let seq = app.ui.search.state.latest_search_seq();
        let _ = app.update(Message::SearchLoaded(seq, Err("timed out".to_string())));

        let state = &app.ui.search.state;
        assert_eq!(state.status(), SearchStatus::Failed("timed out"));
        assert!(state.results().is_empty());
        assert!(!state.is_loading());
        assert_eq!(state.query(), "Dune");
    }

    #[test]
    fn test_covers_from_older_searches_are_dropped() {
        let mut app = app();
        let png = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0];

        let _ = app.update(Message::SuggestionPicked("first".to_string()));
        let old = app.ui.search.state.latest_search_seq();
        let _ = app.update(Message::SuggestionPicked("second".to_string()));
        let new = app.ui.search.state.latest_search_seq();

        let _ = app.update(Message::CoverLoaded(old, "1".to_string(), png.clone()));
        assert!(app.ui.search.covers.is_empty());

        let _ = app.update(Message::CoverLoaded(new, "2".to_string(), png));
        let _ = app.update(Message::CoverLoaded(new, "3".to_string(), b"<html>".to_vec()));
        assert_eq!(app.ui.search.covers.len(), 1);
        assert!(app.ui.search.covers.contains_key("2"));
    }

    #[test]
    fn test_select_and_close_detail() {
        let mut app = app();
        let _ = app.update(Message::SuggestionPicked("dune".to_string()));
        let seq = app.ui.search.state.latest_search_seq();
        let _ = app.update(Message::SearchLoaded(seq, Ok(vec![volume("x")])));

        let _ = app.update(Message::SelectBook("missing".to_string()));
        assert_eq!(app.ui.search.state.selected_id(), None);

        let _ = app.update(Message::SelectBook("x".to_string()));
        assert_eq!(app.ui.search.state.selected_id(), Some("x"));

        let _ = app.update(Message::CloseDetail);
        assert_eq!(app.ui.search.state.selected_id(), None);
        assert_eq!(app.ui.active_page, Page::Search);
    }

    #[test]
    fn test_copy_link_shows_toast() {
        let mut app = app();
        let _ = app.update(Message::CopyLink("https://books.google.com/x".to_string()));
        assert!(app.ui.toast_visible);
        assert_eq!(
            app.ui.toast.as_ref().unwrap().message,
            "Link copied to clipboard"
        );
    }
}
