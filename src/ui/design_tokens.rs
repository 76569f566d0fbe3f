// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens for the sign-in screen.
//!
//! - **Palette**: base colors
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Radius**: border radii

use iced::Color;

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

pub mod opacity {
    /// Backdrop behind the agreement modal.
    pub const MODAL_BACKDROP: f32 = 0.6;
    /// Disabled control foreground.
    pub const DISABLED: f32 = 0.4;
}

pub mod spacing {
    pub const XXS: f32 = 2.0;
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    /// Width of the auth card holding tabs, form, and scanner.
    pub const AUTH_CARD_WIDTH: f32 = 420.0;
    /// Side of the square scanner viewfinder.
    pub const VIEWFINDER_SIDE: f32 = 240.0;
    /// Width of the agreement modal card.
    pub const MODAL_WIDTH: f32 = 480.0;
    /// Height of the scrollable terms text inside the modal.
    pub const MODAL_BODY_HEIGHT: f32 = 220.0;
}

pub mod typography {
    pub const CAPTION: f32 = 12.0;
    pub const BODY: f32 = 15.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const TITLE_LG: f32 = 26.0;
    /// Camera glyph in the middle of the viewfinder.
    pub const VIEWFINDER_ICON: f32 = 48.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}
