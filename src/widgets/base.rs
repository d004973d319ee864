use glam::Vec2;

use crate::{
    layout::{Dirty, MeasureMode, Rect},
    panel::{DEFAULT_PIXELS_PER_POINT, Panel},
    renderer::Renderer,
    style::Style,
    text::TextShaper,
    view_data::TextViewData,
};

/// State every element shares, whatever it displays.
///
/// Changes that can affect measurement (style, scale, panel) invalidate both
/// layout and repaint.
#[derive(Debug)]
pub struct ElementBase {
    style: Style,
    dirty: Dirty,
    global_scale: Vec2,
    panel: Option<Panel>,
    view_data_key: Option<String>,
    classes: Vec<String>,
    requires_measure: bool,
}

impl Default for ElementBase {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementBase {
    pub fn new() -> Self {
        Self {
            style: Style::default(),
            dirty: Dirty::pending(),
            global_scale: Vec2::ONE,
            panel: None,
            view_data_key: None,
            classes: Vec::new(),
            requires_measure: false,
        }
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn set_style(&mut self, style: Style) {
        if self.style == style {
            return;
        }
        self.style = style;
        self.invalidate();
    }

    pub fn dirty(&self) -> Dirty {
        self.dirty
    }

    pub(crate) fn dirty_mut(&mut self) -> &mut Dirty {
        &mut self.dirty
    }

    /// The intrinsic size may have changed; remeasure before the next paint.
    pub fn mark_layout_dirty(&mut self) {
        self.dirty.mark_layout();
    }

    /// Visible content changed.
    pub fn mark_repaint_dirty(&mut self) {
        self.dirty.mark_repaint();
    }

    fn invalidate(&mut self) {
        self.mark_layout_dirty();
        self.mark_repaint_dirty();
    }

    /// Accumulated scale of this element and all its ancestors.
    pub fn global_scale(&self) -> Vec2 {
        self.global_scale
    }

    pub fn set_global_scale(&mut self, scale: Vec2) {
        if self.global_scale == scale {
            return;
        }
        self.global_scale = scale;
        self.invalidate();
    }

    pub fn panel(&self) -> Option<&Panel> {
        self.panel.as_ref()
    }

    pub fn attach(&mut self, panel: Panel) {
        self.panel = Some(panel);
        self.invalidate();
    }

    pub fn detach(&mut self) -> Option<Panel> {
        let panel = self.panel.take();
        if panel.is_some() {
            self.invalidate();
        }
        panel
    }

    pub fn pixels_per_point(&self) -> f32 {
        self.panel
            .as_ref()
            .map_or(DEFAULT_PIXELS_PER_POINT, Panel::pixels_per_point)
    }

    /// Single scalar handed to text backends: mean axis scale times pixel density.
    pub fn text_scaling(&self) -> f32 {
        (self.global_scale.x + self.global_scale.y) * 0.5 * self.pixels_per_point()
    }

    pub fn view_data_key(&self) -> Option<&str> {
        self.view_data_key.as_deref()
    }

    pub fn set_view_data_key(&mut self, key: Option<String>) {
        self.view_data_key = key;
    }

    /// Schedules `data` under the view data key. Does nothing without a
    /// non-empty key.
    pub fn save_view_data(&self, data: TextViewData) {
        let Some(key) = self.view_data_key().filter(|key| !key.is_empty()) else {
            return;
        };
        match self.panel.as_ref().and_then(Panel::view_data) {
            Some(sender) => {
                log::debug!("scheduling view data save for {key:?}");
                sender.schedule_save(key, data);
            }
            None => log::trace!("{key:?} has no view data store, save skipped"),
        }
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Whether the layout host must call [`Widget::measure`] for this element.
    pub fn requires_measure(&self) -> bool {
        self.requires_measure
    }

    pub fn set_requires_measure(&mut self, requires: bool) {
        self.requires_measure = requires;
    }
}

pub trait Widget {
    fn base(&self) -> &ElementBase;

    fn base_mut(&mut self) -> &mut ElementBase;

    /// Intrinsic size under the given constraints. NaN in an axis means the
    /// element has no opinion and the host should use its default.
    fn measure(
        &self,
        _shaper: &dyn TextShaper,
        _width: f32,
        _width_mode: MeasureMode,
        _height: f32,
        _height_mode: MeasureMode,
    ) -> Vec2 {
        Vec2::NAN
    }

    fn paint(&self, layout: Rect, ren: &mut Renderer);
}

/// Elements whose content is a single string.
pub trait HasText {
    fn text(&self) -> &str;

    fn set_text(&mut self, value: impl Into<String>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_data::ViewDataStore;

    #[test]
    fn scaling_averages_axes_and_applies_density() {
        let mut base = ElementBase::new();
        assert_eq!(base.text_scaling(), 1.0);

        base.set_global_scale(Vec2::new(1.0, 2.0));
        assert_eq!(base.text_scaling(), 1.5);

        base.attach(Panel::new(2.0));
        assert_eq!(base.text_scaling(), 3.0);

        base.detach();
        assert_eq!(base.text_scaling(), 1.5);
    }

    #[test]
    fn unchanged_scale_does_not_invalidate() {
        let mut base = ElementBase::new();
        let before = base.dirty();
        base.set_global_scale(Vec2::ONE);
        assert_eq!(base.dirty(), before);

        base.set_global_scale(Vec2::splat(2.0));
        assert_eq!(base.dirty().layout_version, before.layout_version + 1);
        assert_eq!(base.dirty().repaint_version, before.repaint_version + 1);
    }

    #[test]
    fn empty_key_never_saves() {
        let mut store = ViewDataStore::new();
        let mut base = ElementBase::new();
        base.attach(Panel::default().with_view_data(store.sender()));
        base.set_view_data_key(Some(String::new()));

        base.save_view_data(TextViewData {
            text: "x".to_owned(),
        });
        assert_eq!(store.pump(), 0);
    }

    #[test]
    fn classes_are_unique() {
        let mut base = ElementBase::new();
        base.add_class("a");
        base.add_class("a");
        assert_eq!(base.classes(), ["a".to_owned()]);
        assert!(!base.has_class("b"));
    }
}
