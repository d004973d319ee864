use crate::view_data::ViewDataSender;

/// Pixel density used for elements that are not attached to a panel.
pub const DEFAULT_PIXELS_PER_POINT: f32 = 1.0;

/// The surface a tree of elements is shown on.
#[derive(Clone, Debug)]
pub struct Panel {
    pixels_per_point: f32,
    view_data: Option<ViewDataSender>,
}

impl Default for Panel {
    fn default() -> Self {
        Self::new(DEFAULT_PIXELS_PER_POINT)
    }
}

impl Panel {
    pub fn new(pixels_per_point: f32) -> Self {
        Self {
            pixels_per_point,
            view_data: None,
        }
    }

    pub fn with_view_data(mut self, sender: ViewDataSender) -> Self {
        self.view_data = Some(sender);
        self
    }

    pub fn pixels_per_point(&self) -> f32 {
        self.pixels_per_point
    }

    pub fn view_data(&self) -> Option<&ViewDataSender> {
        self.view_data.as_ref()
    }
}
