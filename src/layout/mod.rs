pub mod dirty;
pub mod measure;
pub mod node;
pub mod rect;

pub use dirty::Dirty;
pub use measure::{MeasureMode, measure_text_size};
pub use node::Node;
pub use rect::Rect;
