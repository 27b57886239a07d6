use alien_invasion_common::{Canvas, Color, Rect};
use anyhow::Result;

use crate::settings::Settings;
use crate::ship::Ship;

pub struct Bullet {
    pub rect: Rect,
    /// Exact vertical position; `rect.y` is its truncation.
    y: f32,
    color: Color,
}

impl Bullet {
    pub fn new(settings: &Settings, ship: &Ship) -> Self {
        Self::with_midtop(settings, ship.rect.midtop())
    }

    pub fn with_midtop(settings: &Settings, midtop: (i32, i32)) -> Self {
        let mut rect = Rect::new(0, 0, settings.bullet_width, settings.bullet_height);
        rect.set_midtop(midtop);
        Bullet {
            rect,
            y: rect.y as f32,
            color: settings.bullet_color,
        }
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn update(&mut self, settings: &Settings) {
        self.y -= settings.bullet_speed;
        self.rect.y = self.y as i32;
    }

    pub fn is_off_screen(&self) -> bool {
        self.rect.bottom() <= 0
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) -> Result<()> {
        canvas.fill_rect(self.rect, self.color)
    }
}
