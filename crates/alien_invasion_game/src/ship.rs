use alien_invasion_common::{Canvas, Image, Rect};
use anyhow::Result;

use crate::settings::Settings;

pub struct Ship {
    image: Image,
    pub rect: Rect,
    /// Exact horizontal position; `rect.x` is its truncation.
    x: f32,
    pub moving_right: bool,
    pub moving_left: bool,
}

impl Ship {
    /// Places a new ship at the bottom center of `screen`.
    pub fn new(image: Image, screen: Rect) -> Self {
        let mut ship = Ship {
            image,
            rect: image.rect(),
            x: 0.0,
            moving_right: false,
            moving_left: false,
        };
        ship.center_ship(screen);
        ship
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn image(&self) -> Image {
        self.image
    }

    /// Holding both directions cancels out: the ship stays put.
    pub fn update(&mut self, settings: &Settings, screen: Rect) {
        match (self.moving_right, self.moving_left) {
            (true, false) if self.rect.right() < screen.right() => {
                self.x += settings.ship_speed;
            }
            (false, true) if self.rect.left() > screen.left() => {
                self.x -= settings.ship_speed;
            }
            _ => {}
        }
        self.rect.x = self.x as i32;
    }

    pub fn center_ship(&mut self, screen: Rect) {
        self.rect.set_midbottom(screen.midbottom());
        self.x = self.rect.x as f32;
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) -> Result<()> {
        canvas.blit(self.image, self.rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SCREEN: Rect = Rect::new(0, 0, 1150, 600);

    fn ship() -> Ship {
        Ship::new(Image::new(0, 60, 48), SCREEN)
    }

    #[test]
    fn starts_at_bottom_center() {
        let ship = ship();
        assert_eq!(ship.rect.midbottom(), SCREEN.midbottom());
        assert_eq!(ship.x(), 545.0);
    }

    #[test]
    fn sub_pixel_steps_accumulate() {
        let settings = Settings::default();
        let mut ship = ship();
        ship.moving_right = true;

        ship.update(&settings, SCREEN);
        assert_eq!(ship.rect.x, 546);
        ship.update(&settings, SCREEN);
        assert_eq!(ship.rect.x, 548);
        assert_eq!(ship.x(), 548.0);
    }

    #[test]
    fn stops_at_the_edges() {
        let settings = Settings::default();
        let mut ship = ship();

        ship.moving_left = true;
        for _ in 0..1000 {
            ship.update(&settings, SCREEN);
        }
        assert!(ship.rect.left() <= 0);
        assert!(ship.rect.left() > -2);

        ship.moving_left = false;
        ship.moving_right = true;
        for _ in 0..1000 {
            ship.update(&settings, SCREEN);
        }
        assert!(ship.rect.right() >= SCREEN.right());
        assert!(ship.rect.right() < SCREEN.right() + 2);
    }

    #[test]
    fn both_directions_cancel() {
        let settings = Settings::default();
        let mut ship = ship();
        ship.moving_left = true;
        ship.moving_right = true;
        ship.update(&settings, SCREEN);
        assert_eq!(ship.x(), 545.0);
    }

    #[test]
    fn recentering_resets_position() {
        let settings = Settings::default();
        let mut ship = ship();
        ship.moving_left = true;
        for _ in 0..50 {
            ship.update(&settings, SCREEN);
        }
        ship.center_ship(SCREEN);
        assert_eq!(ship.rect.midbottom(), SCREEN.midbottom());
        assert_eq!(ship.x(), 545.0);
    }

    proptest! {
        #[test]
        fn moving_right_adds_exactly_ship_speed(
            speed in 0.1f32..20.0,
            start in 0i32..1000,
        ) {
            let mut settings = Settings::default();
            settings.ship_speed = speed;
            let mut ship = ship();
            ship.rect.x = start;
            ship.x = start as f32;
            ship.moving_right = true;

            let before = ship.x();
            ship.update(&settings, SCREEN);
            prop_assert_eq!(ship.x(), before + speed);
        }
    }
}
