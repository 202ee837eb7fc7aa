//! Calendar handlers

use iced::Task;

use crate::app::local_today;
use crate::app::message::Message;
use crate::app::state::App;
use crate::features::calendar::MonthView;

impl App {
    /// Handle calendar-related messages
    pub fn handle_calendar(&mut self, message: &Message) -> Option<Task<Message>> {
        let calendar = &mut self.ui.calendar;
        match message {
            Message::CalendarPrevMonth => {
                calendar.view = calendar.view.prev();
                Some(Task::none())
            }
            Message::CalendarNextMonth => {
                calendar.view = calendar.view.next();
                Some(Task::none())
            }
            Message::CalendarToday => {
                calendar.today = local_today();
                calendar.view = MonthView::of(calendar.today);
                Some(Task::none())
            }
            Message::ClockTick => {
                let today = local_today();
                if today != calendar.today {
                    tracing::debug!("Date changed to {}", today);
                    calendar.today = today;
                }
                Some(Task::none())
            }
            _ => None,
        }
    }
}
