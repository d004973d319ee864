/// Invalidation state owned by every element.
///
/// The flags are consumed by the layout and paint passes. The version
/// counters only ever grow and let observers tell how many invalidations
/// happened between two points in time.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Dirty {
    pub layout: bool,  // needs a new measurement (size)
    pub repaint: bool, // visual representation changed
    pub layout_version: u64,
    pub repaint_version: u64,
}

impl Dirty {
    /// State of a freshly built element: nothing measured or painted yet.
    pub fn pending() -> Self {
        Self {
            layout: true,
            repaint: true,
            ..Self::default()
        }
    }

    pub fn mark_layout(&mut self) {
        self.layout = true;
        self.layout_version = self.layout_version.wrapping_add(1);
    }

    pub fn mark_repaint(&mut self) {
        self.repaint = true;
        self.repaint_version = self.repaint_version.wrapping_add(1);
    }

    pub fn take_layout(&mut self) -> bool {
        std::mem::take(&mut self.layout)
    }

    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.repaint)
    }
}
