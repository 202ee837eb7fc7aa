//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "BookFinder");
    m.insert(
        Key::AppTagline,
        "Discover and explore your favourite books among 40+ million titles.",
    );

    // Navigation
    m.insert(Key::NavSearch, "Books");
    m.insert(Key::NavCalendar, "Calendar");

    // Header toggles
    m.insert(Key::ThemeUseDark, "Dark mode");
    m.insert(Key::ThemeUseLight, "Light mode");

    // Search
    m.insert(
        Key::SearchPlaceholder,
        "E.g. The Name of the Wind, Dan Brown, 9780307474278...",
    );
    m.insert(Key::SearchButton, "Search");
    m.insert(Key::SearchHint, "Type in the search bar to start.");
    m.insert(Key::SearchLoading, "Searching...");
    m.insert(Key::SearchNoResults, "No books matched that search 😕");
    m.insert(
        Key::SearchError,
        "We could not reach Google Books. Please try again later.",
    );
    m.insert(Key::SearchResultsCount, "{} results");

    // Book card
    m.insert(Key::BookUnknownTitle, "Unknown title");
    m.insert(Key::BookUnknownAuthor, "Unknown author");
    m.insert(Key::BookNoDescription, "No description available.");
    m.insert(Key::BookViewOnGoogle, "View on Google Books");

    // Detail panel
    m.insert(Key::DetailDescription, "Description");
    m.insert(Key::DetailPublisher, "Publisher");
    m.insert(Key::DetailPublished, "Published");
    m.insert(Key::DetailPages, "Pages");
    m.insert(Key::DetailCategories, "Categories");
    m.insert(Key::DetailIdentifiers, "Identifiers");
    m.insert(Key::DetailLanguage, "Language");
    m.insert(Key::DetailCopyLink, "Copy link");
    m.insert(Key::DetailClose, "Close");

    // Toasts
    m.insert(Key::ToastLinkCopied, "Link copied to clipboard");
    m.insert(Key::ToastSettingsSaveFailed, "Could not save settings");

    // Calendar
    m.insert(Key::CalendarTitle, "Calendar");
    m.insert(Key::CalendarToday, "Today");
    m.insert(Key::CalendarPrevMonth, "Previous month");
    m.insert(Key::CalendarNextMonth, "Next month");
    m.insert(Key::CalendarStartMonday, "Start on Monday");
    m.insert(Key::CalendarStartSunday, "Start on Sunday");

    // Months
    m.insert(Key::MonthJanuary, "January");
    m.insert(Key::MonthFebruary, "February");
    m.insert(Key::MonthMarch, "March");
    m.insert(Key::MonthApril, "April");
    m.insert(Key::MonthMay, "May");
    m.insert(Key::MonthJune, "June");
    m.insert(Key::MonthJuly, "July");
    m.insert(Key::MonthAugust, "August");
    m.insert(Key::MonthSeptember, "September");
    m.insert(Key::MonthOctober, "October");
    m.insert(Key::MonthNovember, "November");
    m.insert(Key::MonthDecember, "December");

    // Weekdays
    m.insert(Key::WeekdayMon, "Mon");
    m.insert(Key::WeekdayTue, "Tue");
    m.insert(Key::WeekdayWed, "Wed");
    m.insert(Key::WeekdayThu, "Thu");
    m.insert(Key::WeekdayFri, "Fri");
    m.insert(Key::WeekdaySat, "Sat");
    m.insert(Key::WeekdaySun, "Sun");

    // Special days
    m.insert(Key::HolidayNewYear, "New Year's Day");
    m.insert(Key::HolidayChristmas, "Christmas");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
