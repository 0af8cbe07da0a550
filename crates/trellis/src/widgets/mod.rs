//! The built-in widget set.

mod button;
mod container;
mod file_selector;
mod layers;
mod rectangle;
mod textbox;

pub use button::Button;
pub use container::{Column, Row};
pub use file_selector::FileSelector;
pub use layers::Layers;
pub use rectangle::Rectangle;
pub use textbox::TextBox;
