//! Settings update handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::i18n::{Key, Language, Locale};
use crate::ui::widgets::Toast;

impl App {
    /// Handle settings-related messages
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::UpdateDarkMode(enabled) => {
                self.core.settings.display.dark_mode = *enabled;
                Some(Task::perform(async { Message::SaveSettings }, |m| m))
            }
            Message::UpdateAppLanguage(code) => {
                let language = Language::from_code(code);
                self.core.settings.display.language = language.code().to_string();
                self.core.locale = Locale::new(language);
                tracing::info!("Language changed to {}", language.display_name());
                Some(Task::perform(async { Message::SaveSettings }, |m| m))
            }
            Message::UpdateWeekStart(week_start) => {
                self.core.settings.calendar.week_start = *week_start;
                Some(Task::perform(async { Message::SaveSettings }, |m| m))
            }
            Message::SaveSettings => {
                if let Err(e) = self.core.settings.save() {
                    tracing::error!("Failed to save settings: {}", e);
                    let toast = Toast::error(self.core.locale.get(Key::ToastSettingsSaveFailed));
                    return Some(self.show_toast(toast));
                }
                tracing::info!("Settings saved successfully");
                Some(Task::none())
            }
            _ => None,
        }
    }
}
