use alien_invasion_common::{Canvas, Color, Host, Rect};
use anyhow::Result;

use crate::label::Label;

const BUTTON_WIDTH: i32 = 200;
const BUTTON_HEIGHT: i32 = 50;
const BUTTON_COLOR: Color = Color::new_rgb(0, 135, 0);
const TEXT_COLOR: Color = Color::WHITE;
const FONT_SIZE: u16 = 48;

pub struct Button {
    pub rect: Rect,
    color: Color,
    label: Label,
}

impl Button {
    pub fn new(host: &mut dyn Host, screen: Rect, msg: &str) -> Result<Self> {
        let mut rect = Rect::new(0, 0, BUTTON_WIDTH, BUTTON_HEIGHT);
        rect.set_center(screen.center());

        let mut label = Label::render(host, msg, FONT_SIZE, TEXT_COLOR, BUTTON_COLOR)?;
        label.rect.set_center(rect.center());

        Ok(Button {
            rect,
            color: BUTTON_COLOR,
            label,
        })
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.rect.contains_point(x, y)
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) -> Result<()> {
        canvas.fill_rect(self.rect, self.color)?;
        self.label.draw(canvas)
    }
}
