//! Types shared between the Alien Invasion game and its frontends.

pub mod app;
pub mod color;
pub mod key;
pub mod rect;

pub use app::{App, Canvas, Host, Image, InputEvent};
pub use color::Color;
pub use key::Key;
pub use rect::Rect;
