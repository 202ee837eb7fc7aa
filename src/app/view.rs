//! Application view rendering

use iced::widget::{Space, column, container, stack};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::{Message, Page};
use crate::ui::{components, pages, theme, widgets};

impl App {
    /// Build the window content
    pub fn view(&self) -> Element<'_, Message> {
        let locale = self.core.locale;
        let settings = &self.core.settings;

        let nav = components::nav_bar::view(self.ui.active_page, settings.display.dark_mode, locale);

        let page: Element<'_, Message> = match self.ui.active_page {
            Page::Search => pages::search::view(&self.ui.search, self.ui.window_width, locale),
            Page::Calendar => {
                pages::calendar::view(&self.ui.calendar, settings.calendar.week_start, locale)
            }
        };

        let main_layout = container(column![nav, page].width(Fill).height(Fill))
            .width(Fill)
            .height(Fill)
            .style(theme::main_content);

        // Detail overlay (empty space when nothing is selected)
        let detail_overlay: Element<'_, Message> = match self.ui.search.state.selected() {
            Some(volume) if self.ui.active_page == Page::Search => components::book_detail::view(
                volume,
                self.ui.search.covers.get(&volume.id),
                locale,
            ),
            _ => Space::new().width(0).height(0).into(),
        };

        // Toast overlay (empty space if not visible)
        let toast_overlay: Element<'_, Message> = match &self.ui.toast {
            Some(toast) if self.ui.toast_visible => container(widgets::view_toast(toast))
                .width(Fill)
                .height(Fill)
                .padding(24)
                .align_x(Alignment::Center)
                .align_y(Alignment::End)
                .into(),
            _ => Space::new().width(0).height(0).into(),
        };

        // Always use consistent stack structure to preserve scroll position
        stack![main_layout, detail_overlay, toast_overlay]
            .width(Fill)
            .height(Fill)
            .into()
    }
}
