// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

All visual constants of the gallery in one place.

## Organization

- **Palette**: Base colors (warm neutrals, one accent)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes (sidebar, filmstrip, header)
- **Typography**: Font size scale
- **Border**, **Radius**, **Shadow**

## Examples

```
use iced_folio::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let scrim = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::INK_900
};
let padding = spacing::MD; // 16px
```

Sizes that the list and filmstrip geometry depend on (row heights,
thumbnail width) live with that geometry in `gallery::section_tracker` and
`gallery::filmstrip`; views read them from there.
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Warm neutrals (paper to ink)
    pub const PAPER_50: Color = Color::from_rgb(0.98, 0.97, 0.95);
    pub const PAPER_100: Color = Color::from_rgb(0.95, 0.93, 0.90);
    pub const PAPER_200: Color = Color::from_rgb(0.89, 0.87, 0.83);
    pub const STONE_400: Color = Color::from_rgb(0.58, 0.55, 0.51);
    pub const STONE_600: Color = Color::from_rgb(0.40, 0.38, 0.35);
    pub const INK_700: Color = Color::from_rgb(0.20, 0.19, 0.18);
    pub const INK_800: Color = Color::from_rgb(0.14, 0.13, 0.12);
    pub const INK_900: Color = Color::from_rgb(0.09, 0.09, 0.08);

    // Accent (ochre)
    pub const OCHRE_300: Color = Color::from_rgb(0.89, 0.74, 0.47);
    pub const OCHRE_500: Color = Color::from_rgb(0.76, 0.56, 0.24);
    pub const OCHRE_700: Color = Color::from_rgb(0.56, 0.39, 0.14);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.80, 0.26, 0.22);
    pub const WARNING_500: Color = Color::from_rgb(0.91, 0.62, 0.16);
    pub const SUCCESS_500: Color = Color::from_rgb(0.30, 0.62, 0.40);
    pub const INFO_500: Color = Color::from_rgb(0.36, 0.53, 0.78);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Skeleton placeholder while an image loads.
    pub const SKELETON: f32 = 0.35;

    /// Semi-transparent panels (drawer, caption bar).
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const HEADER_HEIGHT: f32 = 56.0;
    pub const SIDEBAR_WIDTH: f32 = 300.0;
    pub const DRAWER_WIDTH: f32 = 280.0;
    pub const FILMSTRIP_HEIGHT: f32 = 96.0;
    pub const FILTER_BAR_HEIGHT: f32 = 44.0;
    pub const TOAST_WIDTH: f32 = 320.0;

    /// Stage navigation arrows. 44x44 keeps the touch target comfortable.
    pub const NAV_BUTTON: f32 = 44.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const CONTENT_MAX_WIDTH: f32 = 720.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Artist name and page titles.
    pub const TITLE_LG: f32 = 30.0;

    /// Artwork title in the sidebar.
    pub const TITLE_MD: f32 = 22.0;

    /// Year headings.
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;

    /// Badges, counters, medium under a list row.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SKELETON > 0.0 && opacity::SKELETON < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // The drawer must leave part of a compact window uncovered.
    assert!(sizing::DRAWER_WIDTH < 768.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn neutrals_darken_towards_ink() {
        assert!(palette::PAPER_50.r > palette::PAPER_200.r);
        assert!(palette::STONE_400.r > palette::INK_700.r);
        assert!(palette::INK_700.r > palette::INK_900.r);
    }
}
