pub mod layout;
pub mod panel;
pub mod renderer;
pub mod style;
pub mod text;
pub mod view_data;
pub mod widgets;

pub use layout::{MeasureMode, Node, measure_text_size};
pub use panel::Panel;
pub use renderer::Renderer;
pub use style::Style;
pub use text::{CosmicShaper, Font, HeuristicShaper, TextSettings, TextShaper};
pub use view_data::ViewDataStore;
pub use widgets::{ElementBase, HasText, TextElement, Widget};

pub use glam::{Vec2, Vec4};

pub type Result<T> = anyhow::Result<T>;

pub fn init_logging() {
    env_logger::init();
}
