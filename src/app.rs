//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Subscription, Task, Theme};

use crate::features::Settings;
pub use message::{Message, Page};
pub use state::{App, CalendarPageState, CoreState, SearchPageState, UiState};

/// Initial window size
pub const WINDOW_SIZE: (f32, f32) = (1200.0, 860.0);

/// How often the calendar re-reads the local date
const CLOCK_INTERVAL_SECS: u64 = 60;

/// Local calendar date
pub fn local_today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        tracing::info!(
            "Starting with language '{}', dark mode {}",
            settings.display.language,
            settings.display.dark_mode
        );
        (Self::with_settings(settings), Task::none())
    }

    /// Build the application from already loaded settings
    pub fn with_settings(settings: Settings) -> Self {
        let ui = UiState::new(&settings, local_today());
        let core = CoreState::new(settings);
        Self { core, ui }
    }

    pub fn theme(&self) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title, with the last searched query when there is one
    pub fn title(&self) -> String {
        let app_name = self.core.locale.get(crate::i18n::Key::AppName);
        match (self.ui.active_page, self.ui.search.state.last_query()) {
            (Page::Search, Some(query)) => format!("{} - {}", app_name, query),
            (Page::Calendar, _) => format!(
                "{} - {}",
                app_name,
                self.core.locale.get(crate::i18n::Key::CalendarTitle)
            ),
            _ => app_name.to_string(),
        }
    }

    /// Subscriptions for the clock, keyboard shortcuts and window resizes
    pub fn subscription(&self) -> Subscription<Message> {
        use iced::keyboard;
        use iced::time::Duration;

        let clock_sub = iced::time::every(Duration::from_secs(CLOCK_INTERVAL_SECS))
            .map(|_| Message::ClockTick);

        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        Subscription::batch([clock_sub, keyboard_sub, resize_sub])
    }
}
