// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the sign-in screen components.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Primary action button (sign in, agree, enable camera).
pub fn button_primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::DISABLED,
                ..palette::PRIMARY_500
            })),
            text_color: Color {
                a: opacity::DISABLED,
                ..palette::WHITE
            },
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
    }
}

/// Secondary button (cancel, sign out, collapsible headers).
pub fn button_secondary(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();
    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(extended.background.strong.color.into()),
            text_color: extended.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        _ => button::Style {
            background: Some(extended.background.weak.color.into()),
            text_color: extended.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
    }
}

/// Style for the active tab control.
pub fn tab_active(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::PRIMARY_500)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style for an inactive tab control.
pub fn tab_inactive(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();
    let background = match status {
        button::Status::Hovered => Some(extended.background.strong.color.into()),
        _ => None,
    };
    button::Style {
        background,
        text_color: extended.background.base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Card container for the auth panel and the modal.
pub fn card(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    container::Style {
        background: Some(extended.background.weak.color.into()),
        border: Border {
            radius: radius::MD.into(),
            width: 1.0,
            color: extended.background.strong.color,
        },
        ..Default::default()
    }
}

/// Dimmed backdrop behind the agreement modal.
pub fn modal_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::MODAL_BACKDROP,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Dark viewfinder well, bordered while the camera is active.
pub fn viewfinder(active: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        border: Border {
            radius: radius::MD.into(),
            width: if active { 2.0 } else { 1.0 },
            color: if active {
                palette::SUCCESS_500
            } else {
                palette::GRAY_700
            },
        },
        text_color: Some(palette::GRAY_200),
        ..Default::default()
    }
}

/// Highlighted panel asking the user to grant camera access.
pub fn permission_panel(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    container::Style {
        background: Some(extended.background.weak.color.into()),
        border: Border {
            radius: radius::MD.into(),
            width: 1.0,
            color: palette::ERROR_500,
        },
        ..Default::default()
    }
}
