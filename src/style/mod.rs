pub mod properties;
pub mod tokens;

pub use properties::{Style, WhiteSpace};
