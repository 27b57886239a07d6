use std::path::Path;
use std::time::Duration;

use anyhow::Result;

use crate::color::Color;
use crate::key::Key;
use crate::rect::Rect;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    MouseDown { x: i32, y: i32 },
}

/// Handle to an image owned by the frontend. Only its size is visible here.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Image {
    id: usize,
    width: u32,
    height: u32,
}

impl Image {
    pub const fn new(id: usize, width: u32, height: u32) -> Self {
        Image { id, width, height }
    }

    pub const fn id(&self) -> usize {
        self.id
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    pub fn rect(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }
}

pub trait Host {
    fn load_image(&mut self, path: &Path) -> Result<Image>;
    /// Renders `text` at `size` points in `fg` on a solid `bg` box.
    fn render_text(&mut self, text: &str, size: u16, fg: Color, bg: Color) -> Result<Image>;
    /// The image must not be drawn afterwards.
    fn release_image(&mut self, image: Image);
    fn set_cursor_visible(&mut self, visible: bool);
    /// Blocks the calling thread.
    fn sleep(&mut self, duration: Duration);
}

pub trait Canvas {
    fn clear(&mut self, color: Color) -> Result<()>;
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<()>;
    fn blit(&mut self, image: Image, dest: Rect) -> Result<()>;
}

/// Per frame the frontend hands every pending event to
/// [`handle_event`](App::handle_event), then calls [`update`](App::update)
/// and [`draw`](App::draw) once each before presenting.
pub trait App {
    fn init(&mut self, host: &mut dyn Host) -> Result<()>;
    fn handle_event(&mut self, event: InputEvent, host: &mut dyn Host) -> Result<()>;
    fn update(&mut self, host: &mut dyn Host) -> Result<()>;
    fn draw(&self, canvas: &mut dyn Canvas) -> Result<()>;
    fn should_exit(&self) -> bool;
    fn exit(&mut self);

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn title(&self) -> String;
}
