//! Internationalization (i18n) support for BookFinder
//!
//! Structure:
//! - i18n.rs: Core types (Language, Key, Locale) and translation lookup
//! - en.rs: English translations
//! - es.rs: Spanish translations

mod en;
mod es;

use std::collections::HashMap;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
}

impl Language {
    /// Get language display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Español",
        }
    }

    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
        }
    }

    /// Parse a stored language code, falling back to English
    pub fn from_code(code: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|lang| lang.code().eq_ignore_ascii_case(code.trim()))
            .unwrap_or_default()
    }

    /// The other language, for the header toggle
    pub fn next(self) -> Self {
        match self {
            Language::English => Language::Spanish,
            Language::Spanish => Language::English,
        }
    }

    /// All available languages
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::Spanish]
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // App
    AppName,
    AppTagline,

    // Navigation
    NavSearch,
    NavCalendar,

    // Header toggles
    ThemeUseDark,
    ThemeUseLight,

    // Search
    SearchPlaceholder,
    SearchButton,
    SearchHint,
    SearchLoading,
    SearchNoResults,
    SearchError,
    SearchResultsCount,

    // Book card
    BookUnknownTitle,
    BookUnknownAuthor,
    BookNoDescription,
    BookViewOnGoogle,

    // Detail panel
    DetailDescription,
    DetailPublisher,
    DetailPublished,
    DetailPages,
    DetailCategories,
    DetailIdentifiers,
    DetailLanguage,
    DetailCopyLink,
    DetailClose,

    // Toasts
    ToastLinkCopied,
    ToastSettingsSaveFailed,

    // Calendar
    CalendarTitle,
    CalendarToday,
    CalendarPrevMonth,
    CalendarNextMonth,
    CalendarStartMonday,
    CalendarStartSunday,

    // Months
    MonthJanuary,
    MonthFebruary,
    MonthMarch,
    MonthApril,
    MonthMay,
    MonthJune,
    MonthJuly,
    MonthAugust,
    MonthSeptember,
    MonthOctober,
    MonthNovember,
    MonthDecember,

    // Weekday column headers
    WeekdayMon,
    WeekdayTue,
    WeekdayWed,
    WeekdayThu,
    WeekdayFri,
    WeekdaySat,
    WeekdaySun,

    // Special days
    HolidayNewYear,
    HolidayChristmas,
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::English => en::translations(),
        Language::Spanish => es::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }

    /// Get translation with `{}` replaced by `arg`
    pub fn format(&self, key: Key, arg: impl std::fmt::Display) -> String {
        self.get(key).replacen("{}", &arg.to_string(), 1)
    }
}
