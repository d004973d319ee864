pub mod base;
pub mod text;

pub use base::{ElementBase, HasText, Widget};
pub use text::TextElement;
