use glam::{Vec2, Vec4};

#[derive(Debug, Clone, PartialEq)]
pub enum RenderPrimative {
    Text {
        text: String,
        position: Vec2,
        color: Vec4,
        size: f32,
    },
}
