//! Design tokens used as style defaults.

pub struct Colour;

impl Colour {
    pub const TEXT: [f32; 4] = [0.93, 0.93, 0.95, 1.0];
    pub const TEXT_MUTED: [f32; 4] = [0.6, 0.6, 0.65, 1.0];
    pub const PRIMARY: [f32; 4] = [0.36, 0.52, 0.98, 1.0];
}

pub struct Typography;

impl Typography {
    pub const CAPTION: f32 = 12.0;
    pub const BODY: f32 = 16.0;
    pub const HEADING: f32 = 24.0;
    /// Line height as a multiple of the font size.
    pub const LINE_HEIGHT: f32 = 1.2;
}
