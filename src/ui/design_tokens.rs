// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the comic newspaper look.
//!
//! Every colour, spacing and size used by the front page comes from here so
//! the day and night editions stay consistent.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::design_tokens::{palette, spacing};
//!
//! container(content)
//!     .padding(spacing::MD)
//!     .style(|_| container::Style {
//!         background: Some(palette::PAPER.into()),
//!         ..Default::default()
//!     })
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use iced::Color;

    pub const BLACK: Color = Color::BLACK;

    /// Newsprint background.
    pub const PAPER: Color = Color::from_rgb(0.949, 0.941, 0.902); // #f2f0e6

    /// Card stock, slightly brighter than the page.
    pub const CARD: Color = Color::from_rgb(0.988, 0.984, 0.965); // #fcfbf6

    /// Printing ink for text and borders.
    pub const INK: Color = Color::from_rgb(0.102, 0.102, 0.102); // #1a1a1a

    // Night edition
    pub const NIGHT_PAPER: Color = Color::from_rgb(0.118, 0.114, 0.106);
    pub const NIGHT_CARD: Color = Color::from_rgb(0.173, 0.169, 0.157);
    pub const NIGHT_INK: Color = Color::from_rgb(0.925, 0.914, 0.871);

    // Section washes
    pub const WASH_RED: Color = Color::from_rgb(0.851, 0.325, 0.310); // #d9534f
    pub const WASH_BLUE: Color = Color::from_rgb(0.659, 0.820, 0.906); // #a8d1e7
    pub const WASH_YELLOW: Color = Color::from_rgb(0.941, 0.678, 0.306); // #f0ad4e
    pub const WASH_PURPLE: Color = Color::from_rgb(0.690, 0.569, 0.839); // #b091d6

    // Grays
    pub const GRAY_400: Color = Color::from_rgb(0.6, 0.6, 0.6);
    pub const GRAY_700: Color = Color::from_rgb(0.35, 0.35, 0.35);

    // Semantic colors
    pub const ERROR_500: Color = WASH_RED;
    pub const WARNING_500: Color = WASH_YELLOW;
    pub const SUCCESS_500: Color = Color::from_rgb(0.361, 0.722, 0.361); // #5cb85c
    pub const INFO_500: Color = Color::from_rgb(0.357, 0.753, 0.871); // #5bc0de
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;

    /// Halftone placeholder dots.
    pub const HALFTONE: f32 = 0.15;

    /// Modal backdrop.
    pub const OVERLAY_MEDIUM: f32 = 0.6;

    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    /// Gap between a label and its value.
    pub const XXS: f32 = 4.0;

    pub const XS: f32 = 8.0;

    pub const SM: f32 = 12.0;

    /// Default card padding.
    pub const MD: f32 = 16.0;

    /// Gap between sections.
    pub const LG: f32 = 24.0;

    pub const XL: f32 = 32.0;

    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Spinner diameter on the loading page.
    pub const SPINNER: f32 = 56.0;

    /// Hero illustration height.
    pub const HERO_IMAGE_HEIGHT: f32 = 280.0;

    /// Standard card illustration height.
    pub const CARD_IMAGE_HEIGHT: f32 = 140.0;

    /// Modal illustration height.
    pub const MODAL_IMAGE_HEIGHT: f32 = 240.0;

    /// Maximum width of the page content.
    pub const PAGE_MAX_WIDTH: f32 = 1200.0;

    /// Maximum width of the article modal.
    pub const MODAL_MAX_WIDTH: f32 = 720.0;

    pub const MODAL_MAX_HEIGHT: f32 = 680.0;

    /// Maximum width of the error panel.
    pub const ERROR_PANEL_MAX_WIDTH: f32 = 560.0;

    /// Toast width.
    pub const TOAST_WIDTH: f32 = 320.0;

    /// Height of the breaking-news ticker band.
    pub const TICKER_HEIGHT: f32 = 36.0;
}

// ============================================================================
// Layout
// ============================================================================

pub mod layout {
    /// Windows at least this wide get the two-column layout.
    pub const WIDE_BREAKPOINT: f32 = 1024.0;

    /// Columns in the daily strip; it shares the row with the sidebar.
    pub const STRIP_COLUMNS: usize = 2;

    /// Columns in the archive grid on wide windows.
    pub const ARCHIVE_COLUMNS_WIDE: usize = 4;

    /// Columns in the archive grid on narrow windows.
    pub const ARCHIVE_COLUMNS_NARROW: usize = 2;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Comic headline sizes and weights.

    use iced::{font, Font};

    /// Heavy face for headlines and the masthead.
    pub const HEADLINE_FONT: Font = Font {
        weight: font::Weight::Black,
        ..Font::DEFAULT
    };

    pub const BOLD_FONT: Font = Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    };

    /// Masthead title.
    pub const MASTHEAD: f32 = 48.0;

    /// Hero story headline.
    pub const HEADLINE_XL: f32 = 32.0;

    /// Section headers and error panel title.
    pub const HEADLINE_LG: f32 = 24.0;

    /// Card headlines.
    pub const HEADLINE_MD: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    /// Datelines and bylines.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Dividers.
    pub const WIDTH_SM: f32 = 1.0;

    /// Buttons and inputs.
    pub const WIDTH_MD: f32 = 2.0;

    /// Card outlines.
    pub const WIDTH_LG: f32 = 3.0;

    /// Masthead rule and error panel.
    pub const WIDTH_XL: f32 = 4.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 2.0;
    pub const MD: f32 = 6.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    //! Hard, unblurred offsets like a misregistered print.

    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::INK,
        offset: Vector { x: 3.0, y: 3.0 },
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::INK,
        offset: Vector { x: 6.0, y: 6.0 },
        blur_radius: 0.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::INK,
        offset: Vector { x: 10.0, y: 10.0 },
        blur_radius: 0.0,
    };
}

/// Returns `color` with its alpha replaced.
#[must_use]
pub const fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    assert!(typography::MASTHEAD > typography::HEADLINE_XL);
    assert!(typography::HEADLINE_XL > typography::HEADLINE_LG);
    assert!(typography::HEADLINE_LG > typography::HEADLINE_MD);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_XL > border::WIDTH_LG);
    assert!(sizing::HERO_IMAGE_HEIGHT > sizing::CARD_IMAGE_HEIGHT);
    assert!(layout::ARCHIVE_COLUMNS_WIDE >= layout::ARCHIVE_COLUMNS_NARROW);
};
