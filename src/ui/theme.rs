//! Theme system for the book finder
//! Light and dark palettes with a blue primary over slate neutrals

use iced::color;
use iced::font::Weight;
use iced::widget::{button, container, scrollable, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Font weights used for headings and labels
pub const BOLD_WEIGHT: Weight = Weight::Bold;
pub const MEDIUM_WEIGHT: Weight = Weight::Medium;

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    theme.extended_palette().is_dark
}

// Dark mode colors
mod dark {
    use super::*;
    pub const PRIMARY: Color = color!(0x60a5fa);
    pub const PRIMARY_HOVER: Color = color!(0x93c5fd);
    pub const SECONDARY: Color = color!(0xf87171);
    pub const BACKGROUND: Color = color!(0x020814);
    pub const PAPER: Color = color!(0x0f172a);
    pub const PAPER_RAISED: Color = color!(0x1e293b);
    pub const DIVIDER: Color = color!(0x1e293b);
    pub const TEXT_PRIMARY: Color = color!(0xf1f5f9);
    pub const TEXT_SECONDARY: Color = color!(0x94a3b8);
    pub const TEXT_MUTED: Color = color!(0x64748b);
}

// Light mode colors
mod light {
    use super::*;
    pub const PRIMARY: Color = color!(0x2563eb);
    pub const PRIMARY_HOVER: Color = color!(0x1d4ed8);
    pub const SECONDARY: Color = color!(0xdc2626);
    pub const BACKGROUND: Color = color!(0xf8fafc);
    pub const PAPER: Color = color!(0xffffff);
    pub const PAPER_RAISED: Color = color!(0xf1f5f9);
    pub const DIVIDER: Color = color!(0xe2e8f0);
    pub const TEXT_PRIMARY: Color = color!(0x0f172a);
    pub const TEXT_SECONDARY: Color = color!(0x475569);
    pub const TEXT_MUTED: Color = color!(0x94a3b8);
}

/// Pick the dark or light variant of a color
fn pick(theme: &Theme, dark: Color, light: Color) -> Color {
    if is_dark(theme) { dark } else { light }
}

pub fn primary(theme: &Theme) -> Color {
    pick(theme, dark::PRIMARY, light::PRIMARY)
}

pub fn primary_hover(theme: &Theme) -> Color {
    pick(theme, dark::PRIMARY_HOVER, light::PRIMARY_HOVER)
}

/// Accent used for special days and errors
pub fn secondary(theme: &Theme) -> Color {
    pick(theme, dark::SECONDARY, light::SECONDARY)
}

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    pick(theme, dark::BACKGROUND, light::BACKGROUND)
}

/// Get surface (paper) color based on theme
pub fn surface(theme: &Theme) -> Color {
    pick(theme, dark::PAPER, light::PAPER)
}

/// Slightly raised surface for hovered cards and toasts
pub fn surface_elevated(theme: &Theme) -> Color {
    pick(theme, dark::PAPER_RAISED, light::PAPER_RAISED)
}

/// Get border color based on theme
pub fn border_color(theme: &Theme) -> Color {
    pick(theme, dark::DIVIDER, light::DIVIDER)
}

pub fn text_muted(theme: &Theme) -> Color {
    pick(theme, dark::TEXT_MUTED, light::TEXT_MUTED)
}

pub fn text_secondary(theme: &Theme) -> Color {
    pick(theme, dark::TEXT_SECONDARY, light::TEXT_SECONDARY)
}

pub fn text_primary(theme: &Theme) -> Color {
    pick(theme, dark::TEXT_PRIMARY, light::TEXT_PRIMARY)
}

pub fn shadow_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(0.0, 0.0, 0.0, 0.5)
    } else {
        Color::from_rgba(0.06, 0.09, 0.16, 0.12)
    }
}

/// Modal backdrop
pub fn overlay_backdrop(theme: &Theme, opacity: f32) -> Color {
    if is_dark(theme) {
        Color::from_rgba(0.0, 0.0, 0.0, 0.6 * opacity)
    } else {
        Color::from_rgba(0.06, 0.09, 0.16, 0.4 * opacity)
    }
}

/// Translucent primary, for the today highlight and selections
pub fn primary_alpha(theme: &Theme, alpha: f32) -> Color {
    Color {
        a: alpha,
        ..primary(theme)
    }
}

pub fn success(_theme: &Theme) -> Color {
    color!(0x22c55e)
}

pub fn danger(theme: &Theme) -> Color {
    secondary(theme)
}


// ============================================================================
// Container Styles
// ============================================================================

/// Main content area
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Top navigation bar
pub fn nav_bar(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        border: Border {
            width: 1.0,
            color: border_color(theme),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Result card and other paper panels
pub fn card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        shadow: Shadow {
            color: shadow_color(theme),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

/// Cover placeholder
pub fn cover_placeholder(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface_elevated(theme))),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Floating suggestion list under the search input
pub fn suggestion_panel(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        shadow: Shadow {
            color: shadow_color(theme),
            offset: Vector::new(0.0, 6.0),
            blur_radius: 16.0,
        },
        ..Default::default()
    }
}

/// Error banner shown when a search fails
pub fn error_banner(theme: &Theme) -> container::Style {
    let accent = secondary(theme);
    container::Style {
        background: Some(Background::Color(Color { a: 0.12, ..accent })),
        text_color: Some(accent),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: Color { a: 0.4, ..accent },
        },
        ..Default::default()
    }
}

/// Calendar day cell
pub fn calendar_cell(theme: &Theme, is_today: bool, is_special: bool) -> container::Style {
    let (background, border) = if is_today {
        (Some(Background::Color(primary(theme))), primary(theme))
    } else if is_special {
        (
            Some(Background::Color(Color {
                a: 0.12,
                ..secondary(theme)
            })),
            secondary(theme),
        )
    } else {
        (
            Some(Background::Color(surface(theme))),
            border_color(theme),
        )
    };

    let text_color = if is_today {
        surface(theme)
    } else if is_special {
        secondary(theme)
    } else {
        text_primary(theme)
    };

    container::Style {
        background,
        text_color: Some(text_color),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: border,
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Primary filled button
pub fn primary_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(primary(theme))),
        text_color: surface(theme),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(primary_hover(theme))),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(primary_alpha(theme, 0.4))),
            ..base
        },
        _ => base,
    }
}

/// Outlined secondary button
pub fn secondary_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: primary(theme),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(primary_alpha(theme, 0.08))),
            border: Border {
                color: primary(theme),
                ..base.border
            },
            ..base
        },
        _ => base,
    }
}

/// Icon button (transparent, highlight on hover)
pub fn icon_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_secondary(theme),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(surface_elevated(theme))),
            text_color: text_primary(theme),
            ..base
        },
        _ => base,
    }
}

/// Navigation tab; active tabs are tinted with the primary color
pub fn nav_tab(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
        let background = if active {
            primary_alpha(theme, 0.12)
        } else if hovered {
            surface_elevated(theme)
        } else {
            Color::TRANSPARENT
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: if active {
                primary(theme)
            } else {
                text_secondary(theme)
            },
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Text link (no background, underline-free)
pub fn link_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: None,
        text_color: primary(theme),
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            text_color: primary_hover(theme),
            ..base
        },
        _ => base,
    }
}

/// Suggestion row inside the suggestion list
pub fn suggestion_item(theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => surface_elevated(theme),
        _ => Color::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: text_primary(theme),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Clickable result card
pub fn card_button(theme: &Theme, status: button::Status) -> button::Style {
    let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
    let card = card(theme);

    button::Style {
        background: Some(Background::Color(if hovered {
            surface_elevated(theme)
        } else {
            surface(theme)
        })),
        text_color: text_primary(theme),
        border: Border {
            color: if hovered {
                primary(theme)
            } else {
                border_color(theme)
            },
            ..card.border
        },
        shadow: card.shadow,
        ..Default::default()
    }
}

// ============================================================================
// Text Input Styles
// ============================================================================

/// Search field
pub fn search_input(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border = match status {
        text_input::Status::Focused { .. } => primary(theme),
        text_input::Status::Hovered => text_muted(theme),
        _ => border_color(theme),
    };

    text_input::Style {
        background: Background::Color(surface(theme)),
        border: Border {
            radius: 10.0.into(),
            width: 1.0,
            color: border,
        },
        icon: text_muted(theme),
        placeholder: text_muted(theme),
        value: text_primary(theme),
        selection: primary_alpha(theme, 0.3),
    }
}

// ============================================================================
// Scrollable Styles
// ============================================================================

/// Thin scrollbar matching the palette
pub fn scrollable_style(theme: &Theme, status: scrollable::Status) -> scrollable::Style {
    let scroller_color = match status {
        scrollable::Status::Hovered { .. } | scrollable::Status::Dragged { .. } => {
            text_muted(theme)
        }
        _ => border_color(theme),
    };

    let rail = scrollable::Rail {
        background: None,
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(scroller_color),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: rail.clone(),
        horizontal_rail: rail,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(surface(theme)),
            border: Border::default(),
            shadow: Shadow::default(),
            icon: text_primary(theme),
        },
    }
}
