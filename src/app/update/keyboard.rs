//! Keyboard shortcut handlers

use iced::Task;
use iced::keyboard::{Key, key::Named};

use crate::app::message::{Message, Page};
use crate::app::state::App;

impl App {
    /// Handle keyboard-related messages
    pub fn handle_keyboard(&mut self, message: &Message) -> Option<Task<Message>> {
        let Message::KeyPressed(key, modifiers) = message else {
            return None;
        };

        match key {
            // Escape closes the innermost open layer
            Key::Named(Named::Escape) => {
                let search = &mut self.ui.search.state;
                if search.selected_id().is_some() {
                    search.clear_selection();
                } else if !search.suggestions().is_empty() {
                    search.drop_suggestions();
                }
                Some(Task::none())
            }

            Key::Named(Named::ArrowLeft) if self.ui.active_page == Page::Calendar => {
                Some(Task::done(Message::CalendarPrevMonth))
            }
            Key::Named(Named::ArrowRight) if self.ui.active_page == Page::Calendar => {
                Some(Task::done(Message::CalendarNextMonth))
            }

            // Ctrl+1 / Ctrl+2 switch pages
            Key::Character(c) if modifiers.command() => match c.as_str() {
                "1" => Some(Task::done(Message::Navigate(Page::Search))),
                "2" => Some(Task::done(Message::Navigate(Page::Calendar))),
                _ => Some(Task::none()),
            },

            _ => Some(Task::none()),
        }
    }
}
