//! Text-shaping backends.
//!
//! Measurement never touches glyphs directly. It hands a [`TextSettings`]
//! bundle to a [`TextShaper`] and gets logical-unit extents back. Backends
//! shape at `font_size * scaling` so metrics match what ends up on screen, then
//! report results divided by the scaling factor.

pub mod cosmic;
pub mod heuristic;
pub mod rich;

use std::sync::Arc;

use crate::style::Style;

pub use cosmic::CosmicShaper;
pub use heuristic::HeuristicShaper;

/// A resolved font assignment, identified by family name.
///
/// The generic names `serif`, `sans-serif` and `monospace` map to the
/// backend's generic families; anything else is looked up by name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Font {
    family: Arc<str>,
}

impl Font {
    pub fn new(family: impl Into<Arc<str>>) -> Self {
        Self {
            family: family.into(),
        }
    }

    pub fn sans_serif() -> Self {
        Self::new("sans-serif")
    }

    pub fn monospace() -> Self {
        Self::new("monospace")
    }

    pub fn family(&self) -> &str {
        &self.family
    }
}

/// Everything a backend needs for one width or height computation.
#[derive(Clone, Debug, PartialEq)]
pub struct TextSettings<'a> {
    pub text: &'a str,
    pub font: &'a Font,
    pub font_size: f32,
    /// Multiplier applied to `font_size`.
    pub line_height: f32,
    pub word_wrap: bool,
    /// Wrap boundary in logical units. Zero means no boundary.
    pub word_wrap_width: f32,
    pub rich_text: bool,
    pub scaling: f32,
}

impl<'a> TextSettings<'a> {
    /// Settings derived from the element style, rich text on, no wrap boundary.
    pub fn from_style(text: &'a str, font: &'a Font, style: &Style, scaling: f32) -> Self {
        Self {
            text,
            font,
            font_size: style.font_size,
            line_height: style.line_height,
            word_wrap: style.white_space.wraps(),
            word_wrap_width: 0.0,
            rich_text: true,
            scaling,
        }
    }

    /// The wrap boundary, if wrapping is both enabled and bounded.
    pub fn wrap_width(&self) -> Option<f32> {
        (self.word_wrap && self.word_wrap_width > 0.0).then_some(self.word_wrap_width)
    }

    /// Scaling factor usable as a divisor; degenerate values fall back to 1.
    pub fn effective_scaling(&self) -> f32 {
        if self.scaling.is_finite() && self.scaling > 0.0 {
            self.scaling
        } else {
            1.0
        }
    }
}

/// The contract measurement relies on.
///
/// Both methods are pure from the caller's point of view; backends that keep
/// caches use interior mutability. Results are raw floats in logical units and
/// callers apply their own rounding.
pub trait TextShaper {
    /// Natural width of the text.
    fn compute_text_width(&self, settings: &TextSettings<'_>) -> f32;

    /// Height of the text laid out against `settings.word_wrap_width`.
    fn compute_text_height(&self, settings: &TextSettings<'_>) -> f32;
}
