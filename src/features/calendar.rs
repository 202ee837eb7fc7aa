//! Month calendar grid
//!
//! Pure date arithmetic for the calendar page. Months are zero-based
//! (`0` = January) throughout; "today" is always passed in so every function
//! here is deterministic.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::i18n::Key;

/// First column of the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    /// Weekday shown in the first column
    pub fn first_day(self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Sunday => Weekday::Sun,
        }
    }

    /// Column index of `weekday`, `0..7`
    pub fn column_of(self, weekday: Weekday) -> u32 {
        match self {
            WeekStart::Monday => weekday.num_days_from_monday(),
            WeekStart::Sunday => weekday.num_days_from_sunday(),
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            WeekStart::Monday => WeekStart::Sunday,
            WeekStart::Sunday => WeekStart::Monday,
        }
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Number of days in a zero-based month
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    match month0 % 12 {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
        3 | 5 | 8 | 10 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

/// Weekday of the 1st of a zero-based month (Sakamoto's method)
pub fn first_weekday(year: i32, month0: u32) -> Weekday {
    const T: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let month0 = month0 % 12;
    let y = if month0 < 2 { year as i64 - 1 } else { year as i64 };
    // 0 = Sunday
    let from_sunday = (y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
        + T[month0 as usize]
        + 1)
        .rem_euclid(7);

    match from_sunday {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}

/// Empty cells before day 1, always `0..=6`
pub fn leading_blanks(year: i32, month0: u32, week_start: WeekStart) -> u32 {
    week_start.column_of(first_weekday(year, month0))
}

/// One slot of the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell {
    /// Padding before the 1st
    Empty,
    /// Day of month, `1..=days_in_month`
    Day(u32),
}

impl CalendarCell {
    pub fn day(self) -> Option<u32> {
        match self {
            CalendarCell::Empty => None,
            CalendarCell::Day(d) => Some(d),
        }
    }
}

/// Leading blanks followed by every day of the month in order.
///
/// No trailing padding is added; the renderer fills the last row.
pub fn build_grid(year: i32, month0: u32, week_start: WeekStart) -> Vec<CalendarCell> {
    let blanks = leading_blanks(year, month0, week_start);
    let days = days_in_month(year, month0);

    let mut cells = Vec::with_capacity((blanks + days) as usize);
    cells.extend((0..blanks).map(|_| CalendarCell::Empty));
    cells.extend((1..=days).map(CalendarCell::Day));
    cells
}

/// Column headers in the same order the grid uses
pub fn weekday_headers(week_start: WeekStart) -> [Key; 7] {
    let mut day = week_start.first_day();
    std::array::from_fn(|_| {
        let key = weekday_key(day);
        day = day.succ();
        key
    })
}

pub fn weekday_key(day: Weekday) -> Key {
    match day {
        Weekday::Mon => Key::WeekdayMon,
        Weekday::Tue => Key::WeekdayTue,
        Weekday::Wed => Key::WeekdayWed,
        Weekday::Thu => Key::WeekdayThu,
        Weekday::Fri => Key::WeekdayFri,
        Weekday::Sat => Key::WeekdaySat,
        Weekday::Sun => Key::WeekdaySun,
    }
}

pub fn month_key(month0: u32) -> Key {
    const MONTHS: [Key; 12] = [
        Key::MonthJanuary,
        Key::MonthFebruary,
        Key::MonthMarch,
        Key::MonthApril,
        Key::MonthMay,
        Key::MonthJune,
        Key::MonthJuly,
        Key::MonthAugust,
        Key::MonthSeptember,
        Key::MonthOctober,
        Key::MonthNovember,
        Key::MonthDecember,
    ];
    MONTHS[(month0 % 12) as usize]
}

/// A date that recurs every year with a label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialDay {
    pub month0: u32,
    pub day: u32,
    pub label: Key,
}

/// Highlighted dates shown on every year's grid
pub const SPECIAL_DAYS: &[SpecialDay] = &[
    SpecialDay {
        month0: 0,
        day: 1,
        label: Key::HolidayNewYear,
    },
    SpecialDay {
        month0: 11,
        day: 25,
        label: Key::HolidayChristmas,
    },
];

pub fn special_day(specials: &[SpecialDay], month0: u32, day: u32) -> Option<Key> {
    specials
        .iter()
        .find(|s| s.month0 == month0 && s.day == day)
        .map(|s| s.label)
}

/// The month currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    pub year: i32,
    pub month0: u32,
}

impl MonthView {
    /// `month0` past December carries into the following years
    pub fn new(year: i32, month0: u32) -> Self {
        Self {
            year: year + (month0 / 12) as i32,
            month0: month0 % 12,
        }
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
        }
    }

    pub fn next(self) -> Self {
        if self.month0 == 11 {
            Self {
                year: self.year + 1,
                month0: 0,
            }
        } else {
            Self {
                month0: self.month0 + 1,
                ..self
            }
        }
    }

    pub fn prev(self) -> Self {
        if self.month0 == 0 {
            Self {
                year: self.year - 1,
                month0: 11,
            }
        } else {
            Self {
                month0: self.month0 - 1,
                ..self
            }
        }
    }

    /// Whether `date` falls in this month
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month0
    }
}

/// A grid cell ready for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub cell: CalendarCell,
    pub is_today: bool,
    pub special: Option<Key>,
}

/// Build the grid for `view` and mark today and special days
pub fn annotate(
    view: MonthView,
    week_start: WeekStart,
    today: NaiveDate,
    specials: &[SpecialDay],
) -> Vec<DayCell> {
    let today_day = view.contains(today).then(|| today.day());

    build_grid(view.year, view.month0, week_start)
        .into_iter()
        .map(|cell| match cell {
            CalendarCell::Empty => DayCell {
                cell,
                is_today: false,
                special: None,
            },
            CalendarCell::Day(d) => DayCell {
                cell,
                is_today: today_day == Some(d),
                special: special_day(specials, view.month0, d),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2025, 1), 28);
        assert_eq!(days_in_month(1900, 1), 28);
        assert_eq!(days_in_month(2000, 1), 29);
        assert_eq!(days_in_month(2026, 0), 31);
        assert_eq!(days_in_month(2026, 3), 30);
        assert_eq!(days_in_month(2026, 11), 31);
    }

    #[test]
    fn test_first_weekday_agrees_with_chrono() {
        for year in [1600, 1899, 1900, 1999, 2000, 2024, 2025, 2026, 2100] {
            for month0 in 0..12 {
                let expected = date(year, month0 + 1, 1).weekday();
                assert_eq!(first_weekday(year, month0), expected, "{year}-{month0}");
            }
        }
    }

    #[test]
    fn test_grid_shape_for_every_month() {
        for year in 1990..=2040 {
            for month0 in 0..12 {
                for week_start in [WeekStart::Monday, WeekStart::Sunday] {
                    let blanks = leading_blanks(year, month0, week_start);
                    let days = days_in_month(year, month0);
                    let grid = build_grid(year, month0, week_start);

                    assert!(blanks <= 6);
                    assert_eq!(grid.len() as u32, blanks + days);
                    assert!(
                        grid[..blanks as usize]
                            .iter()
                            .all(|c| *c == CalendarCell::Empty)
                    );
                    let numbered: Vec<u32> =
                        grid[blanks as usize..].iter().filter_map(|c| c.day()).collect();
                    assert_eq!(numbered, (1..=days).collect::<Vec<_>>());
                }
            }
        }
    }

    #[test]
    fn test_monday_start_blanks() {
        // 1 February 2026 is a Sunday, 1 June 2026 a Monday
        assert_eq!(leading_blanks(2026, 1, WeekStart::Monday), 6);
        assert_eq!(leading_blanks(2026, 5, WeekStart::Monday), 0);
        assert_eq!(leading_blanks(2026, 1, WeekStart::Sunday), 0);
        assert_eq!(leading_blanks(2026, 5, WeekStart::Sunday), 1);
    }

    #[test]
    fn test_headers_follow_week_start() {
        let monday = weekday_headers(WeekStart::Monday);
        assert_eq!(monday[0], Key::WeekdayMon);
        assert_eq!(monday[6], Key::WeekdaySun);

        let sunday = weekday_headers(WeekStart::Sunday);
        assert_eq!(sunday[0], Key::WeekdaySun);
        assert_eq!(sunday[1], Key::WeekdayMon);
    }

    #[test]
    fn test_today_marked_once_in_current_month_only() {
        let today = date(2026, 3, 14);
        let current = annotate(MonthView::of(today), WeekStart::Monday, today, SPECIAL_DAYS);
        let marked: Vec<_> = current.iter().filter(|c| c.is_today).collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].cell, CalendarCell::Day(14));

        for view in [MonthView::of(today).next(), MonthView::new(2025, 2)] {
            let cells = annotate(view, WeekStart::Monday, today, SPECIAL_DAYS);
            assert!(cells.iter().all(|c| !c.is_today));
        }
    }

    #[test]
    fn test_special_days_recur_every_year() {
        let today = date(2026, 6, 1);
        for year in [2026, 2031] {
            let january = annotate(MonthView::new(year, 0), WeekStart::Monday, today, SPECIAL_DAYS);
            let first = january
                .iter()
                .find(|c| c.cell == CalendarCell::Day(1))
                .unwrap();
            assert_eq!(first.special, Some(Key::HolidayNewYear));

            let december =
                annotate(MonthView::new(year, 11), WeekStart::Monday, today, SPECIAL_DAYS);
            let labelled: Vec<_> = december
                .iter()
                .filter(|c| c.special.is_some())
                .map(|c| c.cell)
                .collect();
            assert_eq!(labelled, vec![CalendarCell::Day(25)]);
        }
    }

    #[test]
    fn test_month_navigation_rolls_over_year() {
        let december = MonthView::new(2026, 11);
        assert_eq!(december.next(), MonthView::new(2027, 0));
        assert_eq!(MonthView::new(2026, 0).prev(), MonthView::new(2025, 11));
        assert_eq!(december.prev().next(), december);
        assert_eq!(MonthView::new(2026, 13), MonthView::new(2027, 1));
        assert!(december.contains(date(2026, 12, 31)));
        assert!(!december.contains(date(2027, 12, 31)));
    }
}
