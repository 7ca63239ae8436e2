// SPDX-License-Identifier: MPL-2.0
//! Visual constants shared by the finder, the cards and the toasts.
//!
//! Views never hard-code a color or a pixel value; they pick one of these.
//!
//! ```
//! use movie_finder::ui::design_tokens::{palette, sizing, spacing};
//!
//! let gutter = spacing::MD;
//! let poster = (sizing::POSTER_WIDTH, sizing::POSTER_HEIGHT);
//! assert!(poster.1 > poster.0 && gutter > 0.0);
//! let _accent = palette::PRIMARY_500;
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    /// Marquee amber, lightest to darkest.
    pub const PRIMARY_400: Color = Color::from_rgb(1.0, 0.76, 0.3);
    pub const PRIMARY_500: Color = Color::from_rgb(0.96, 0.65, 0.14);
    pub const PRIMARY_600: Color = Color::from_rgb(0.85, 0.53, 0.05);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

/// Alpha values for layered surfaces.
pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    /// Cards and toasts.
    pub const SURFACE: f32 = 0.95;
}

/// Gaps and padding, on a 4px step.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    pub const INPUT_HEIGHT: f32 = 40.0;
    /// Spinner inside the search button.
    pub const SPINNER: f32 = 18.0;

    /// One-sheet proportions, 2:3.
    pub const POSTER_WIDTH: f32 = 120.0;
    pub const POSTER_HEIGHT: f32 = 180.0;

    pub const CONTENT_MAX_WIDTH: f32 = 720.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const LANGUAGE_PICKER_WIDTH: f32 = 140.0;
}

/// Font sizes, largest first.
pub mod typography {
    /// Window heading.
    pub const TITLE_LG: f32 = 30.0;
    /// Section headings such as the list count.
    pub const TITLE_MD: f32 = 20.0;
    /// Movie title on a card.
    pub const TITLE_SM: f32 = 18.0;
    /// Search input.
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    /// IMDb links and hints.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    /// Toast accent edge.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

pub mod shadow {
    use super::Color;
    use iced::{Shadow, Vector};

    const INK: Color = Color {
        a: 0.35,
        ..Color::BLACK
    };

    /// Cards.
    pub const SM: Shadow = Shadow {
        color: INK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    /// Toasts, which float over the cards.
    pub const MD: Shadow = Shadow {
        color: INK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::XXS < spacing::XS);
    assert!(spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD);
    assert!(spacing::MD < spacing::LG);

    assert!(opacity::SURFACE > opacity::OVERLAY_STRONG && opacity::SURFACE < 1.0);
    assert!(sizing::SPINNER < sizing::INPUT_HEIGHT);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poster_keeps_two_by_three_ratio() {
        let ratio = sizing::POSTER_HEIGHT / sizing::POSTER_WIDTH;
        assert!((ratio - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn toast_fits_inside_the_content_column() {
        assert!(sizing::TOAST_WIDTH + 2.0 * spacing::LG < sizing::CONTENT_MAX_WIDTH);
    }

    #[test]
    fn toast_shadow_sits_lower_than_card_shadow() {
        assert!(shadow::MD.offset.y > shadow::SM.offset.y);
        assert!(shadow::MD.color.a < 1.0);
    }
}
