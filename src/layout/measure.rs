//! The measurement contract between text elements and the layout engine.

use glam::{Vec2, vec2};

use crate::{
    text::{TextSettings, TextShaper},
    widgets::ElementBase,
};

/// How a layout query constrains one axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum MeasureMode {
    /// The size is fixed to the supplied value.
    Exactly,
    /// The supplied value is an upper bound.
    AtMost,
    /// Content size.
    #[default]
    Unconstrained,
}

impl MeasureMode {
    fn bound(self, natural: f32, limit: f32) -> f32 {
        match self {
            Self::AtMost => natural.min(limit),
            _ => natural,
        }
    }
}

/// Measures `text` with the font, style and scaling of `element`.
///
/// Returns NaN on both axes when there is no text or no font; the layout
/// engine treats that as "use the default size". Natural extents are rounded
/// up so that an engine rounding down never causes spurious wrapping. Height
/// is laid out against the width resolved first.
pub fn measure_text_size(
    element: &ElementBase,
    shaper: &dyn TextShaper,
    text: Option<&str>,
    width: f32,
    width_mode: MeasureMode,
    height: f32,
    height_mode: MeasureMode,
) -> Vec2 {
    let style = element.style();
    let (Some(text), Some(font)) = (text, style.font.as_ref()) else {
        return Vec2::NAN;
    };
    let scaling = element.text_scaling();

    let measured_width = match width_mode {
        MeasureMode::Exactly => width,
        mode => {
            let settings = TextSettings {
                word_wrap: false,
                word_wrap_width: 0.0,
                ..TextSettings::from_style(text, font, style, scaling)
            };
            mode.bound(shaper.compute_text_width(&settings).ceil(), width)
        }
    };

    let measured_height = match height_mode {
        MeasureMode::Exactly => height,
        mode => {
            let settings = TextSettings {
                word_wrap_width: measured_width,
                ..TextSettings::from_style(text, font, style, scaling)
            };
            mode.bound(shaper.compute_text_height(&settings).ceil(), height)
        }
    };

    vec2(measured_width, measured_height)
}
