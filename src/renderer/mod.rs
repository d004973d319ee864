pub mod primatives;

use glam::{Vec2, Vec4};

pub use primatives::RenderPrimative;

/// Display list filled by the paint pass.
///
/// Rasterising the primitives is the job of whatever backend consumes the
/// list at the end of the frame.
#[derive(Debug, Default)]
pub struct Renderer {
    prims: Vec<RenderPrimative>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_frame(&mut self) {
        self.prims.clear();
    }

    pub fn draw_primative(&mut self, prim: RenderPrimative) {
        self.prims.push(prim);
    }

    pub fn draw_text(&mut self, text: &str, position: Vec2, color: Vec4, size: f32) {
        let primative = RenderPrimative::Text {
            text: text.to_string(),
            position,
            color,
            size,
        };

        self.draw_primative(primative);
    }

    pub fn primatives(&self) -> &[RenderPrimative] {
        &self.prims
    }

    /// Hands the frame's primitives to the caller.
    pub fn end_frame(&mut self) -> Vec<RenderPrimative> {
        std::mem::take(&mut self.prims)
    }
}
