use glam::{Vec2, vec2};

use crate::{
    layout::{MeasureMode, Rect},
    renderer::Renderer,
    text::TextShaper,
    widgets::Widget,
};

/// Hosts one element in a layout pass.
///
/// Measures only when the element is layout-dirty or the width limit changed,
/// and paints only when it is repaint-dirty. A NaN measurement falls back to `fallback_size` on that axis.
pub struct Node<W: Widget> {
    widget: W,

    layout_rect: Rect, // absolute rect in parent space
    cached_size: Vec2, // result of last `measure`
    cached_max_width: Option<f32>,
    fallback_size: Vec2,
}

impl<W: Widget> Node<W> {
    pub fn new(widget: W, origin: Vec2) -> Self {
        Self {
            widget,
            layout_rect: Rect::new(origin, Vec2::ZERO),
            cached_size: Vec2::ZERO,
            cached_max_width: None,
            fallback_size: Vec2::ZERO,
        }
    }

    pub fn with_fallback_size(mut self, size: Vec2) -> Self {
        self.fallback_size = size;
        self
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    pub fn layout_rect(&self) -> Rect {
        self.layout_rect
    }

    pub fn cached_size(&self) -> Vec2 {
        self.cached_size
    }

    /// Sizes the element within `max_width`; an infinite width leaves it unconstrained.
    pub fn layout(&mut self, shaper: &dyn TextShaper, max_width: f32) -> Vec2 {
        let dirty = self.widget.base_mut().dirty_mut().take_layout();
        if !dirty && self.cached_max_width == Some(max_width) {
            return self.cached_size;
        }

        let measured = if self.widget.base().requires_measure() {
            let width_mode = if max_width.is_finite() {
                MeasureMode::AtMost
            } else {
                MeasureMode::Unconstrained
            };
            self.widget
                .measure(shaper, max_width, width_mode, 0.0, MeasureMode::Unconstrained)
        } else {
            Vec2::NAN
        };

        let size = vec2(
            if measured.x.is_nan() { self.fallback_size.x } else { measured.x },
            if measured.y.is_nan() { self.fallback_size.y } else { measured.y },
        );
        if measured.is_nan() {
            log::trace!("no intrinsic size, using fallback {size}");
        }

        if size != self.cached_size {
            self.widget.base_mut().mark_repaint_dirty();
        }
        self.cached_size = size;
        self.cached_max_width = Some(max_width);
        self.layout_rect.size = size;
        size
    }

    /// Paints into `ren` if needed. Returns whether anything was painted.
    pub fn collect(&mut self, ren: &mut Renderer) -> bool {
        if !self.widget.base_mut().dirty_mut().take_repaint() {
            return false;
        }
        self.widget.paint(self.layout_rect, ren);
        true
    }
}
