//! Application messages

use iced::keyboard::{Key, Modifiers};

use crate::api::Volume;
use crate::features::calendar::WeekStart;
use crate::features::debounce::Ticket;
use crate::features::search::Suggestion;

/// Top-level pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Search,
    Calendar,
}

/// Keys for work scheduled through the app's debouncer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebounceKey {
    /// Suggestion lookup after the user stops typing
    Suggestions,
    /// Auto-dismiss of the current toast
    Toast,
}

/// Application messages
#[derive(Clone)]
pub enum Message {
    /// No-op message for event interception (modal backdrop clicks)
    Noop,

    // ============ Navigation ============
    /// Switch page
    Navigate(Page),
    /// Window size changed
    WindowResized(iced::Size),
    /// Key pressed anywhere in the window
    KeyPressed(Key, Modifiers),
    /// A debounced ticket's quiet period elapsed
    DebounceElapsed(Ticket<DebounceKey>),
    HideToast,

    // ============ Search ============
    /// Search input changed
    SearchChanged(String),
    /// Search input submitted (Enter or search button)
    SearchSubmit,
    /// Suggestion chosen from the list; carries the text to search
    SuggestionPicked(String),
    /// Suggestion lookup finished (request seq, result)
    SuggestionsLoaded(u64, Result<Vec<Suggestion>, String>),
    /// Search finished (request seq, result)
    SearchLoaded(u64, Result<Vec<Volume>, String>),
    /// Cover bytes downloaded (search seq, volume id, bytes)
    CoverLoaded(u64, String, Vec<u8>),
    /// Open the detail panel for a volume id
    SelectBook(String),
    CloseDetail,
    /// Copy a link to the clipboard
    CopyLink(String),
    /// Open a link in the browser
    OpenLink(String),

    // ============ Calendar ============
    CalendarPrevMonth,
    CalendarNextMonth,
    CalendarToday,
    /// Periodic clock refresh for today's highlight
    ClockTick,

    // ============ Settings ============
    UpdateDarkMode(bool),
    UpdateAppLanguage(String),
    UpdateWeekStart(WeekStart),
    SaveSettings,
}

// Manual Debug implementation to keep logs short (no result payloads)
impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        macro_rules! simple {
            ($name:literal) => { write!(f, $name) };
            ($name:literal, $($arg:tt)*) => { write!(f, concat!($name, "({})"), format_args!($($arg)*)) };
        }

        match self {
            Self::Noop => simple!("Noop"),
            Self::ClockTick => simple!("ClockTick"),

            // Navigation
            Self::Navigate(page) => simple!("Navigate", "{:?}", page),
            Self::WindowResized(size) => simple!("WindowResized", "{}x{}", size.width, size.height),
            Self::KeyPressed(key, _) => simple!("KeyPressed", "{:?}", key),
            Self::DebounceElapsed(t) => {
                simple!("DebounceElapsed", "{:?} #{}", t.key, t.generation)
            }
            Self::HideToast => simple!("HideToast"),

            // Search
            Self::SearchChanged(q) => simple!("SearchChanged", "{}", q),
            Self::SearchSubmit => simple!("SearchSubmit"),
            Self::SuggestionPicked(v) => simple!("SuggestionPicked", "{}", v),
            Self::SuggestionsLoaded(seq, r) => match r {
                Ok(v) => simple!("SuggestionsLoaded", "#{}, {} items", seq, v.len()),
                Err(e) => simple!("SuggestionsLoaded", "#{}, error: {}", seq, e),
            },
            Self::SearchLoaded(seq, r) => match r {
                Ok(v) => simple!("SearchLoaded", "#{}, {} volumes", seq, v.len()),
                Err(e) => simple!("SearchLoaded", "#{}, error: {}", seq, e),
            },
            Self::CoverLoaded(seq, id, bytes) => {
                simple!("CoverLoaded", "#{}, id={}, {} bytes", seq, id, bytes.len())
            }
            Self::SelectBook(id) => simple!("SelectBook", "{}", id),
            Self::CloseDetail => simple!("CloseDetail"),
            Self::CopyLink(_) => simple!("CopyLink"),
            Self::OpenLink(_) => simple!("OpenLink"),

            // Calendar
            Self::CalendarPrevMonth => simple!("CalendarPrevMonth"),
            Self::CalendarNextMonth => simple!("CalendarNextMonth"),
            Self::CalendarToday => simple!("CalendarToday"),

            // Settings
            Self::UpdateDarkMode(b) => simple!("UpdateDarkMode", "{}", b),
            Self::UpdateAppLanguage(l) => simple!("UpdateAppLanguage", "{}", l),
            Self::UpdateWeekStart(w) => simple!("UpdateWeekStart", "{:?}", w),
            Self::SaveSettings => simple!("SaveSettings"),
        }
    }
}
