//! Calendar page - month grid with navigation

use iced::widget::{Space, button, column, container, row, svg, text, tooltip};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::{CalendarPageState, Message};
use crate::features::calendar::{WeekStart, month_key};
use crate::i18n::{Key, Locale};
use crate::ui::components::calendar_grid;
use crate::ui::icons;
use crate::ui::theme::{self, BOLD_WEIGHT};

const MAX_WIDTH: f32 = 900.0;

fn chevron<'a>(source: &'static str, hint: &'static str, message: Message) -> Element<'a, Message> {
    let btn = button(
        svg(svg::Handle::from_memory(source.as_bytes()))
            .width(20)
            .height(20)
            .style(|theme, _status| svg::Style {
                color: Some(theme::text_secondary(theme)),
            }),
    )
    .padding(8)
    .style(theme::icon_button)
    .on_press(message);

    tooltip(btn, text(hint).size(12), tooltip::Position::Bottom)
        .padding(6)
        .style(theme::card)
        .into()
}

/// Build the calendar page view
pub fn view<'a>(
    state: &'a CalendarPageState,
    week_start: WeekStart,
    locale: Locale,
) -> Element<'a, Message> {
    let month = state.view;

    let title = text(format!("{} {}", locale.get(month_key(month.month0)), month.year))
        .size(26)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    let today_btn = button(text(locale.get(Key::CalendarToday)).size(14))
        .padding([8, 16])
        .style(theme::secondary_button)
        .on_press(Message::CalendarToday);

    // The toggle names the order a click switches to
    let week_start_label = match week_start.toggle() {
        WeekStart::Monday => Key::CalendarStartMonday,
        WeekStart::Sunday => Key::CalendarStartSunday,
    };
    let week_start_btn = button(text(locale.get(week_start_label)).size(14))
        .padding([8, 16])
        .style(theme::icon_button)
        .on_press(Message::UpdateWeekStart(week_start.toggle()));

    let header = row![
        chevron(
            icons::CHEVRON_LEFT,
            locale.get(Key::CalendarPrevMonth),
            Message::CalendarPrevMonth,
        ),
        Space::new().width(8),
        title,
        Space::new().width(8),
        chevron(
            icons::CHEVRON_RIGHT,
            locale.get(Key::CalendarNextMonth),
            Message::CalendarNextMonth,
        ),
        Space::new().width(Fill),
        week_start_btn,
        Space::new().width(8),
        today_btn,
    ]
    .align_y(Alignment::Center);

    let content = column![
        header,
        Space::new().height(24),
        calendar_grid::view(month, week_start, state.today, locale),
    ]
    .max_width(MAX_WIDTH);

    container(content)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .padding(Padding::new(32.0).top(24.0))
        .into()
}
