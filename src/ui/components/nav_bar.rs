//! Top navigation bar
//! App name, page tabs, and the language and theme toggles

use iced::widget::{Space, button, column, container, row, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::{Message, Page};
use crate::i18n::{Key, Locale};
use crate::ui::icons;
use crate::ui::theme::{self, BOLD_WEIGHT, MEDIUM_WEIGHT};

pub const NAV_BAR_HEIGHT: f32 = 64.0;

/// Navigation tabs in display order
const TABS: [Page; 2] = [Page::Search, Page::Calendar];

fn tab_label(page: Page) -> Key {
    match page {
        Page::Search => Key::NavSearch,
        Page::Calendar => Key::NavCalendar,
    }
}

fn tab_icon(page: Page) -> &'static str {
    match page {
        Page::Search => icons::SEARCH,
        Page::Calendar => icons::CALENDAR,
    }
}

fn icon<'a>(source: &'static str, size: f32) -> iced::widget::Svg<'a> {
    svg(svg::Handle::from_memory(source.as_bytes()))
        .width(size)
        .height(size)
        .style(|theme, _status| svg::Style {
            color: Some(theme::text_secondary(theme)),
        })
}

/// Build the navigation bar
pub fn view(active: Page, dark_mode: bool, locale: Locale) -> Element<'static, Message> {
    let brand = row![
        svg(svg::Handle::from_memory(icons::BOOK.as_bytes()))
            .width(26)
            .height(26)
            .style(|theme, _status| svg::Style {
                color: Some(theme::primary(theme)),
            }),
        Space::new().width(10),
        column![
            text(locale.get(Key::AppName))
                .size(18)
                .font(iced::Font {
                    weight: BOLD_WEIGHT,
                    ..Default::default()
                })
                .style(|theme| text::Style {
                    color: Some(theme::text_primary(theme)),
                }),
            text(locale.get(Key::AppTagline))
                .size(11)
                .style(|theme| text::Style {
                    color: Some(theme::text_muted(theme)),
                }),
        ],
    ]
    .align_y(Alignment::Center);

    let tabs = row(TABS.iter().map(|&page| -> Element<'static, Message> {
        let is_active = page == active;
        button(
            row![
                svg(svg::Handle::from_memory(tab_icon(page).as_bytes()))
                    .width(16)
                    .height(16)
                    .style(move |theme, _status| svg::Style {
                        color: Some(if is_active {
                            theme::primary(theme)
                        } else {
                            theme::text_secondary(theme)
                        }),
                    }),
                Space::new().width(8),
                text(locale.get(tab_label(page))).size(14).font(iced::Font {
                    weight: MEDIUM_WEIGHT,
                    ..Default::default()
                }),
            ]
            .align_y(Alignment::Center),
        )
        .padding([8, 14])
        .style(theme::nav_tab(is_active))
        .on_press(Message::Navigate(page))
        .into()
    }))
    .spacing(4);

    // Shows the language that a click switches to
    let next_language = locale.language.next();
    let language_btn = button(
        row![
            icon(icons::GLOBE, 16.0),
            Space::new().width(6),
            text(next_language.display_name()).size(13),
        ]
        .align_y(Alignment::Center),
    )
    .padding([8, 12])
    .style(theme::icon_button)
    .on_press(Message::UpdateAppLanguage(next_language.code().to_string()));

    let (theme_icon, theme_hint) = if dark_mode {
        (icons::SUN, Key::ThemeUseLight)
    } else {
        (icons::MOON, Key::ThemeUseDark)
    };
    let theme_btn = button(
        row![
            icon(theme_icon, 16.0),
            Space::new().width(6),
            text(locale.get(theme_hint)).size(13),
        ]
        .align_y(Alignment::Center),
    )
    .padding([8, 12])
    .style(theme::icon_button)
    .on_press(Message::UpdateDarkMode(!dark_mode));

    let content = row![
        brand,
        Space::new().width(32),
        tabs,
        Space::new().width(Fill),
        language_btn,
        Space::new().width(8),
        theme_btn,
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(0.0).left(24.0).right(24.0));

    container(content)
        .width(Fill)
        .height(NAV_BAR_HEIGHT)
        .center_y(NAV_BAR_HEIGHT)
        .style(theme::nav_bar)
        .into()
}
