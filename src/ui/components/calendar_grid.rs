//! Month grid component
//!
//! Weekday header row followed by week rows of day cells. The last row is
//! padded with empty cells.

use iced::widget::{Space, column, container, row, text};
use iced::{Element, Fill, Length};

use crate::app::Message;
use crate::features::calendar::{
    DayCell, MonthView, SPECIAL_DAYS, WeekStart, annotate, weekday_headers,
};
use crate::i18n::Locale;
use crate::ui::theme::{self, BOLD_WEIGHT, MEDIUM_WEIGHT};

const CELL_HEIGHT: f32 = 84.0;
const CELL_SPACING: f32 = 6.0;

fn day_cell<'a>(cell: DayCell, locale: Locale) -> Element<'a, Message> {
    let Some(day) = cell.cell.day() else {
        return Space::new().width(Fill).height(CELL_HEIGHT).into();
    };

    let number = text(day.to_string()).size(16).font(iced::Font {
        weight: if cell.is_today {
            BOLD_WEIGHT
        } else {
            MEDIUM_WEIGHT
        },
        ..Default::default()
    });

    let label: Element<'a, Message> = match cell.special {
        Some(key) => text(locale.get(key)).size(11).into(),
        None => Space::new().height(0).into(),
    };

    let is_today = cell.is_today;
    let is_special = cell.special.is_some();

    container(column![number, Space::new().height(Fill), label])
        .width(Fill)
        .height(CELL_HEIGHT)
        .padding(8)
        .style(move |theme| theme::calendar_cell(theme, is_today, is_special))
        .into()
}

/// Build the grid for `view`, highlighting `today`
pub fn view<'a>(
    month: MonthView,
    week_start: WeekStart,
    today: chrono::NaiveDate,
    locale: Locale,
) -> Element<'a, Message> {
    let headers = row(weekday_headers(week_start).into_iter().map(|key| -> Element<'a, Message> {
        container(text(locale.get(key)).size(13).style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        }))
        .width(Fill)
        .center_x(Fill)
        .into()
    }))
    .spacing(CELL_SPACING);

    let cells = annotate(month, week_start, today, SPECIAL_DAYS);
    let weeks = cells.chunks(7).map(|week| -> Element<'a, Message> {
        let mut items: Vec<Element<'a, Message>> =
            week.iter().map(|&cell| day_cell(cell, locale)).collect();
        for _ in week.len()..7 {
            items.push(Space::new().width(Fill).height(CELL_HEIGHT).into());
        }
        row(items).spacing(CELL_SPACING).into()
    });

    column![
        headers,
        Space::new().height(Length::Fixed(8.0)),
        column(weeks).spacing(CELL_SPACING),
    ]
    .width(Fill)
    .into()
}
