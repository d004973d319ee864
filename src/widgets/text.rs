use glam::{Vec2, Vec4};

use crate::{
    layout::{MeasureMode, Rect, measure_text_size},
    renderer::Renderer,
    style::{Style, WhiteSpace},
    text::{Font, TextShaper},
    view_data::{TextViewData, ViewDataStore},
};

use super::base::{ElementBase, HasText, Widget};

/// A leaf element that displays a single string.
///
/// [`HasText::set_text`] is the only way to change the string. Every accepted
/// change invalidates layout and repaint and, when the element has a view data
/// key, schedules the new value for saving.
#[derive(Debug)]
pub struct TextElement {
    base: ElementBase,
    text: String,
}

impl Default for TextElement {
    fn default() -> Self {
        Self::new()
    }
}

impl TextElement {
    pub const CLASS_NAME: &'static str = "luna-text-element";

    pub fn new() -> Self {
        let mut base = ElementBase::new();
        base.set_requires_measure(true);
        base.add_class(Self::CLASS_NAME);
        Self {
            base,
            text: String::new(),
        }
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let mut element = Self::new();
        element.set_text(text);
        element
    }

    fn restyle(mut self, f: impl FnOnce(&mut Style)) -> Self {
        let mut style = self.base.style().clone();
        f(&mut style);
        self.base.set_style(style);
        self
    }

    pub fn font(self, font: Font) -> Self {
        self.restyle(|style| style.font = Some(font))
    }

    pub fn font_size(self, size: f32) -> Self {
        self.restyle(|style| style.font_size = size)
    }

    pub fn line_height(self, line_height: f32) -> Self {
        self.restyle(|style| style.line_height = line_height)
    }

    pub fn white_space(self, white_space: WhiteSpace) -> Self {
        self.restyle(|style| style.white_space = white_space)
    }

    pub fn color(self, color: impl Into<Vec4>) -> Self {
        let color = color.into();
        self.restyle(|style| style.color = color)
    }

    pub fn view_data_key(mut self, key: impl Into<String>) -> Self {
        self.base.set_view_data_key(Some(key.into()));
        self
    }

    /// Measures arbitrary text as if it were this element's content.
    pub fn measure_text_size(
        &self,
        shaper: &dyn TextShaper,
        text: Option<&str>,
        width: f32,
        width_mode: MeasureMode,
        height: f32,
        height_mode: MeasureMode,
    ) -> Vec2 {
        measure_text_size(
            &self.base,
            shaper,
            text,
            width,
            width_mode,
            height,
            height_mode,
        )
    }

    /// Applies the value saved under this element's key, if any.
    ///
    /// The value goes through [`HasText::set_text`], so a restore that changes
    /// the text also schedules a save of the restored value.
    pub fn restore_view_data(&mut self, store: &ViewDataStore) {
        let Some(key) = self.base.view_data_key() else {
            return;
        };
        if let Some(data) = store.get(key) {
            let text = data.text.clone();
            self.set_text(text);
        }
    }
}

impl HasText for TextElement {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, value: impl Into<String>) {
        let value = value.into();
        if self.text == value {
            return;
        }

        self.text = value;
        log::trace!("text changed to {:?}", self.text);
        self.base.mark_layout_dirty();
        self.base.mark_repaint_dirty();
        self.base.save_view_data(TextViewData {
            text: self.text.clone(),
        });
    }
}

impl Widget for TextElement {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn measure(
        &self,
        shaper: &dyn TextShaper,
        width: f32,
        width_mode: MeasureMode,
        height: f32,
        height_mode: MeasureMode,
    ) -> Vec2 {
        self.measure_text_size(
            shaper,
            Some(&self.text),
            width,
            width_mode,
            height,
            height_mode,
        )
    }

    fn paint(&self, layout: Rect, ren: &mut Renderer) {
        if self.text.is_empty() {
            return;
        }
        let style = self.base.style();
        ren.draw_text(&self.text, layout.origin, style.color, style.font_size);
    }
}
