//! Navigation, debounce and toast handlers

use std::time::Duration;

use iced::Task;

use crate::app::message::{DebounceKey, Message, Page};
use crate::app::state::App;
use crate::features::debounce::Ticket;
use crate::ui::widgets::Toast;

/// How long a toast stays on screen
const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Deliver `ticket` back to the app once `delay` has passed
pub(super) fn after(delay: Duration, ticket: Ticket<DebounceKey>) -> Task<Message> {
    Task::perform(
        async move {
            tokio::time::sleep(delay).await;
        },
        move |_| Message::DebounceElapsed(ticket.clone()),
    )
}

impl App {
    /// Show a toast, replacing any current one, and schedule its dismissal
    pub(super) fn show_toast(&mut self, toast: Toast) -> Task<Message> {
        self.ui.toast = Some(toast);
        self.ui.toast_visible = true;
        let ticket = self.ui.search.debouncer.schedule(DebounceKey::Toast);
        after(TOAST_DURATION, ticket)
    }

    /// Handle navigation-related messages
    pub fn handle_navigation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Noop => Some(Task::none()),

            Message::Navigate(page) => {
                if self.ui.active_page != *page {
                    tracing::debug!("Navigate to {:?}", page);
                    self.ui.active_page = *page;
                }
                if *page == Page::Calendar {
                    // The detail panel belongs to the search page
                    self.ui.search.state.clear_selection();
                }
                Some(Task::none())
            }

            Message::WindowResized(size) => {
                self.ui.window_width = size.width;
                Some(Task::none())
            }

            Message::DebounceElapsed(ticket) => {
                if !self.ui.search.debouncer.fire(ticket) {
                    return Some(Task::none());
                }
                match ticket.key {
                    DebounceKey::Toast => Some(Task::done(Message::HideToast)),
                    DebounceKey::Suggestions => Some(self.start_suggestions()),
                }
            }

            Message::HideToast => {
                self.ui.toast_visible = false;
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Settings;

    #[test]
    fn test_navigate_switches_page_and_closes_detail() {
        let mut app = App::with_settings(Settings::default());
        let ticket = app.ui.search.state.submit("dune").unwrap();
        app.ui.search.state.apply_search(
            ticket.seq,
            Ok(vec![crate::api::Volume {
                id: "a".to_string(),
                ..Default::default()
            }]),
        );
        app.ui.search.state.select("a");

        let _ = app.update(Message::Navigate(Page::Calendar));
        assert_eq!(app.ui.active_page, Page::Calendar);
        assert_eq!(app.ui.search.state.selected_id(), None);
    }

    #[test]
    fn test_only_latest_toast_timer_hides() {
        let mut app = App::with_settings(Settings::default());
        let _ = app.show_toast(Toast::success("first"));
        let first = Ticket {
            key: DebounceKey::Toast,
            generation: 1,
        };
        let _ = app.show_toast(Toast::success("second"));

        // The first toast's timer must not dismiss the second toast
        let _ = app.update(Message::DebounceElapsed(first));
        assert!(app.ui.toast_visible);
        assert_eq!(app.ui.toast.as_ref().unwrap().message, "second");

        let _ = app.update(Message::HideToast);
        assert!(!app.ui.toast_visible);
    }

    #[test]
    fn test_only_latest_suggestion_timer_starts_lookup() {
        let mut app = App::with_settings(Settings::default());
        let _ = app.update(Message::SearchChanged("du".to_string()));
        let superseded = Ticket {
            key: DebounceKey::Suggestions,
            generation: 1,
        };
        let _ = app.update(Message::SearchChanged("dune".to_string()));
        let latest = Ticket {
            key: DebounceKey::Suggestions,
            generation: 2,
        };

        // No lookup began, so no response can be accepted yet
        let _ = app.update(Message::DebounceElapsed(superseded));
        assert!(app.ui.search.debouncer.is_pending(&DebounceKey::Suggestions));
        assert!(!app.ui.search.state.apply_suggestions(1, Ok(Vec::new())));

        let _ = app.update(Message::DebounceElapsed(latest));
        assert!(!app.ui.search.debouncer.is_pending(&DebounceKey::Suggestions));
        assert!(app.ui.search.state.apply_suggestions(1, Ok(Vec::new())));
    }

    #[test]
    fn test_window_resize_recorded() {
        let mut app = App::with_settings(Settings::default());
        let _ = app.update(Message::WindowResized(iced::Size::new(640.0, 480.0)));
        assert_eq!(app.ui.window_width, 640.0);
    }
}
