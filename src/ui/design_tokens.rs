// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every screen.
//!
//! - **Palette**: base colors
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Typography**: font size scale
//! - **Radius**: border radii
//! - **Shadow**: shadow definitions
//!
//! Tokens are designed to stay consistent across components; prefer adding a
//! new token over hard-coding a value in a view.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.45, 0.45);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.9, 0.9, 0.9);

    // Brand (indigo)
    pub const PRIMARY_400: Color = Color::from_rgb(0.45, 0.47, 0.9);
    pub const PRIMARY_500: Color = Color::from_rgb(0.35, 0.37, 0.84);
    pub const PRIMARY_600: Color = Color::from_rgb(0.28, 0.3, 0.72);

    // Semantic
    pub const ERROR_500: Color = Color::from_rgb(0.85, 0.25, 0.25);
    pub const WARNING_500: Color = Color::from_rgb(0.92, 0.6, 0.12);
    pub const SUCCESS_500: Color = Color::from_rgb(0.2, 0.65, 0.35);
    pub const INFO_500: Color = Color::from_rgb(0.2, 0.5, 0.85);
}

// ============================================================================
// Opacity
// ============================================================================

pub mod opacity {
    /// Surface panels layered over the window background.
    pub const SURFACE: f32 = 0.6;
    /// Muted/disabled foreground content.
    pub const MUTED: f32 = 0.5;
}

// ============================================================================
// Spacing (8px grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const CAPTION: f32 = 12.0;
    pub const BODY_SM: f32 = 13.0;
    pub const BODY: f32 = 14.0;
    pub const TITLE_SM: f32 = 16.0;
    pub const TITLE: f32 = 20.0;
    pub const TITLE_LG: f32 = 26.0;
    pub const STAT: f32 = 30.0;
}

// ============================================================================
// Radius
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::new(0.0, 0.0),
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.15,
            ..Color::BLACK
        },
        offset: Vector::new(0.0, 1.0),
        blur_radius: 2.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.2,
            ..Color::BLACK
        },
        offset: Vector::new(0.0, 2.0),
        blur_radius: 6.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_keeps_grid_ratios() {
        assert_eq!(spacing::SM, spacing::XS * 2.0);
        assert_eq!(spacing::MD, spacing::SM * 2.0);
        assert_eq!(spacing::XL, spacing::MD * 2.0);
    }

    #[test]
    fn palette_colors_are_opaque() {
        for color in [
            palette::PRIMARY_500,
            palette::ERROR_500,
            palette::SUCCESS_500,
        ] {
            assert_eq!(color.a, 1.0);
        }
    }
}
