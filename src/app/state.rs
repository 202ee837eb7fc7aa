//! Application state definitions

use std::collections::HashMap;

use chrono::NaiveDate;
use iced::widget::image;

use super::message::{DebounceKey, Page};
use crate::api::BooksClient;
use crate::features::calendar::MonthView;
use crate::features::{Debouncer, SearchState, Settings};
use crate::i18n::{Language, Locale};
use crate::ui::widgets::Toast;

/// Main application state
pub struct App {
    /// Core infrastructure (settings, locale, API client)
    pub core: CoreState,
    /// UI state (page selection, page states, toast)
    pub ui: UiState,
}

/// Core infrastructure & services
pub struct CoreState {
    pub settings: Settings,
    pub locale: Locale,
    pub client: BooksClient,
}

impl CoreState {
    /// Initialize core services with loaded settings
    pub fn new(settings: Settings) -> Self {
        let locale = Locale::new(Language::from_code(&settings.display.language));
        let client = BooksClient::with_settings(&settings);
        Self {
            settings,
            locale,
            client,
        }
    }
}

/// Book search page
pub struct SearchPageState {
    pub state: SearchState,
    /// Cover images of the current results, keyed by volume id
    pub covers: HashMap<String, image::Handle>,
    pub debouncer: Debouncer<DebounceKey>,
}

impl SearchPageState {
    pub fn new(min_query_chars: usize) -> Self {
        Self {
            state: SearchState::new(min_query_chars),
            covers: HashMap::new(),
            debouncer: Debouncer::new(),
        }
    }
}

/// Calendar page
pub struct CalendarPageState {
    /// Month on screen
    pub view: MonthView,
    /// Local date used for the "today" highlight
    pub today: NaiveDate,
}

impl CalendarPageState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            view: MonthView::of(today),
            today,
        }
    }
}

/// UI view state
pub struct UiState {
    pub active_page: Page,
    pub search: SearchPageState,
    pub calendar: CalendarPageState,
    pub toast: Option<Toast>,
    pub toast_visible: bool,
    /// Last known window width, drives the result grid's column count
    pub window_width: f32,
}

impl UiState {
    pub fn new(settings: &Settings, today: NaiveDate) -> Self {
        Self {
            active_page: Page::Search,
            search: SearchPageState::new(settings.search.min_query_chars),
            calendar: CalendarPageState::new(today),
            toast: None,
            toast_visible: false,
            window_width: super::WINDOW_SIZE.0,
        }
    }
}
