//! Presentation lookup table for the range slider.
//!
//! Components never query the platform for theming. Hosts pass a
//! [`RangeSliderStyle`] built for their color scheme, and the slider only
//! looks colors and sizes up from it while building a frame.

use derive_setters::Setters;
use ranger_ui::{Color, Dp};

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

/// Colors and sizes used when building a slider frame.
#[derive(Debug, Clone, Copy, PartialEq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeSliderStyle {
    /// Scheme the scheme-dependent colors below were picked for.
    pub scheme: ColorScheme,
    /// Full track behind the selection.
    pub track_color: Color,
    /// Highlight between the two handles.
    pub selected_color: Color,
    /// Handle fill while enabled.
    pub handle_color: Color,
    /// Handle fill while disabled.
    pub disabled_handle_color: Color,
    /// Label text at rest.
    pub value_color: Color,
    /// Label text of the handle being dragged.
    pub dragging_color: Color,
    /// Label text when both bounds coincide.
    pub match_color: Color,
    /// Label text while disabled.
    pub disabled_color: Color,
    pub track_height: Dp,
    pub handle_width: Dp,
    pub handle_height: Dp,
    pub value_font_size: Dp,
}

const MEDIUM_GRAY: Color = Color::gray(0.72);
const DARK_GRAY: Color = Color::gray(0.33);
const HANDLE_GRAY: Color = Color::gray(0.8);

impl RangeSliderStyle {
    pub fn light() -> Self {
        Self {
            scheme: ColorScheme::Light,
            track_color: MEDIUM_GRAY,
            selected_color: Color::BLUE,
            handle_color: Color::WHITE,
            disabled_handle_color: Color::GRAY,
            value_color: Color::BLACK,
            dragging_color: Color::GREEN,
            match_color: Color::GREEN,
            disabled_color: Color::GRAY,
            track_height: Dp(3.0),
            handle_width: Dp(22.0),
            handle_height: Dp(16.0),
            value_font_size: Dp(14.0),
        }
    }

    pub fn dark() -> Self {
        Self {
            scheme: ColorScheme::Dark,
            track_color: DARK_GRAY,
            handle_color: HANDLE_GRAY,
            value_color: Color::WHITE,
            ..Self::light()
        }
    }

    /// Style for the given scheme with default colors and sizes.
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark => Self::dark(),
        }
    }
}

impl Default for RangeSliderStyle {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_overrides_scheme_colors_only() {
        let light = RangeSliderStyle::light();
        let dark = RangeSliderStyle::for_scheme(ColorScheme::Dark);

        assert_eq!(dark.scheme, ColorScheme::Dark);
        assert_ne!(dark.track_color, light.track_color);
        assert_ne!(dark.handle_color, light.handle_color);
        assert_eq!(dark.selected_color, light.selected_color);
        assert_eq!(dark.handle_width, light.handle_width);
    }

    #[test]
    fn setters_chain() {
        let style = RangeSliderStyle::default()
            .handle_width(Dp(15.0))
            .match_color(Color::BLUE);
        assert_eq!(style.handle_width, Dp(15.0));
        assert_eq!(style.match_color, Color::BLUE);
    }
}
