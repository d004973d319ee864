use glam::Vec4;

use super::tokens::{Colour, Typography};
use crate::text::Font;

/// How the text treats its wrap boundary when measuring height.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum WhiteSpace {
    #[default]
    Normal,
    NoWrap,
}

impl WhiteSpace {
    pub fn wraps(self) -> bool {
        self == Self::Normal
    }
}

/// Resolved style of a text element.
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    /// `None` until the cascade assigns a font; text cannot be measured without one.
    pub font: Option<Font>,
    pub font_size: f32,
    pub line_height: f32,
    pub white_space: WhiteSpace,
    pub color: Vec4,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            font: None,
            font_size: Typography::BODY,
            line_height: Typography::LINE_HEIGHT,
            white_space: WhiteSpace::Normal,
            color: Vec4::from(Colour::TEXT),
        }
    }
}
