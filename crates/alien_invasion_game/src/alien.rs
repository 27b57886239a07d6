use alien_invasion_common::{Canvas, Image, Rect};
use anyhow::Result;

use crate::bullet::Bullet;
use crate::settings::Settings;

pub struct Alien {
    image: Image,
    pub rect: Rect,
    /// Exact horizontal position; `rect.x` is its truncation.
    x: f32,
}

impl Alien {
    pub fn new(image: Image, x: i32, y: i32) -> Self {
        let mut rect = image.rect();
        rect.x = x;
        rect.y = y;
        Alien {
            image,
            rect,
            x: x as f32,
        }
    }

    pub fn check_edges(&self, screen: Rect) -> bool {
        self.rect.right() >= screen.right() || self.rect.left() <= screen.left()
    }

    pub fn update(&mut self, settings: &Settings) {
        self.x += settings.alien_speed * settings.fleet_direction.sign();
        self.rect.x = self.x as i32;
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) -> Result<()> {
        canvas.blit(self.image, self.rect)
    }
}

/// Every alien currently alive. They share one heading and move in lockstep.
pub struct Fleet {
    image: Image,
    pub(crate) aliens: Vec<Alien>,
}

impl Fleet {
    pub fn new(image: Image) -> Self {
        Fleet {
            image,
            aliens: Vec::new(),
        }
    }

    /// Replaces the fleet with a full grid.
    ///
    /// Aliens are spaced one alien apart, with a one-alien margin on the
    /// left and right, and rows stop three alien heights above the bottom
    /// to leave room for the ship.
    pub fn spawn(&mut self, screen: Rect) {
        self.aliens.clear();

        let alien_width = self.image.width() as i32;
        let alien_height = self.image.height() as i32;
        if alien_width <= 0 || alien_height <= 0 {
            log::warn!("Alien sprite has no area, the fleet stays empty");
            return;
        }

        let mut current_y = alien_height;
        while current_y < screen.height - 3 * alien_height {
            let mut current_x = alien_width;
            while current_x < screen.width - 2 * alien_width {
                self.aliens.push(Alien::new(self.image, current_x, current_y));
                current_x += 2 * alien_width;
            }
            current_y += 2 * alien_height;
        }
        log::debug!("Spawned a fleet of {} aliens", self.aliens.len());
    }

    pub fn aliens(&self) -> &[Alien] {
        &self.aliens
    }

    pub fn len(&self) -> usize {
        self.aliens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliens.is_empty()
    }

    pub fn clear(&mut self) {
        self.aliens.clear();
    }

    /// Drops the whole fleet and reverses its heading if any alien has
    /// reached an edge. Applies at most once per call.
    pub fn check_edges(&mut self, settings: &mut Settings, screen: Rect) -> bool {
        if !self.aliens.iter().any(|alien| alien.check_edges(screen)) {
            return false;
        }
        for alien in &mut self.aliens {
            alien.rect.y += settings.fleet_drop_speed;
        }
        settings.fleet_direction = settings.fleet_direction.reversed();
        log::debug!("Fleet reversed, now heading {:?}", settings.fleet_direction);
        true
    }

    pub fn update(&mut self, settings: &Settings) {
        for alien in &mut self.aliens {
            alien.update(settings);
        }
    }

    pub fn collides_with(&self, rect: &Rect) -> bool {
        self.aliens.iter().any(|alien| alien.rect.collides_with(rect))
    }

    pub fn reached_bottom(&self, screen: Rect) -> bool {
        self.aliens
            .iter()
            .any(|alien| alien.rect.bottom() >= screen.bottom())
    }

    /// Resolves bullet hits: every alien a bullet touches is destroyed and
    /// the bullet is used up. An alien destroyed earlier in the same pass
    /// does not stop later bullets. Returns how many aliens were destroyed.
    pub fn take_hits(&mut self, bullets: &mut Vec<Bullet>) -> usize {
        let mut destroyed = vec![false; self.aliens.len()];
        let aliens = &self.aliens;
        bullets.retain(|bullet| {
            let mut spent = false;
            for (alien, dead) in aliens.iter().zip(destroyed.iter_mut()) {
                if !*dead && bullet.rect.collides_with(&alien.rect) {
                    *dead = true;
                    spent = true;
                }
            }
            !spent
        });

        let mut flags = destroyed.iter();
        self.aliens.retain(|_| !flags.next().copied().unwrap_or(false));
        destroyed.iter().filter(|dead| **dead).count()
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) -> Result<()> {
        for alien in &self.aliens {
            alien.draw(canvas)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::FleetDirection;
    use proptest::prelude::*;

    const SCREEN: Rect = Rect::new(0, 0, 1150, 600);
    const ALIEN: Image = Image::new(1, 60, 58);

    fn fleet_of(positions: &[(i32, i32)]) -> Fleet {
        let mut fleet = Fleet::new(ALIEN);
        fleet.aliens = positions
            .iter()
            .map(|&(x, y)| Alien::new(ALIEN, x, y))
            .collect();
        fleet
    }

    #[test]
    fn spawn_fills_the_grid() {
        let mut fleet = Fleet::new(ALIEN);
        fleet.spawn(SCREEN);

        // 9 columns from x = 60 to 1020, 4 rows from y = 58 to 406.
        assert_eq!(fleet.len(), 36);
        assert_eq!(fleet.aliens()[0].rect, Rect::new(60, 58, 60, 58));
        assert_eq!(fleet.aliens()[8].rect.x, 1020);
        assert_eq!(fleet.aliens()[35].rect.y, 406);
        assert!(!fleet.reached_bottom(SCREEN));
    }

    #[test]
    fn spawn_replaces_existing_aliens() {
        let mut fleet = fleet_of(&[(0, 0)]);
        fleet.spawn(SCREEN);
        fleet.spawn(SCREEN);
        assert_eq!(fleet.len(), 36);
    }

    #[test]
    fn spawn_leaves_no_aliens_when_nothing_fits() {
        let mut fleet = Fleet::new(Image::new(0, 0, 58));
        fleet.spawn(SCREEN);
        assert!(fleet.is_empty());

        let mut fleet = Fleet::new(ALIEN);
        fleet.spawn(Rect::new(0, 0, 1150, 150));
        assert!(fleet.is_empty());
    }

    #[test]
    fn update_follows_fleet_direction() {
        let mut settings = Settings::default();
        let mut fleet = fleet_of(&[(100, 100)]);

        fleet.update(&settings);
        assert_eq!(fleet.aliens()[0].rect.x, 101);

        settings.fleet_direction = FleetDirection::Left;
        fleet.update(&settings);
        fleet.update(&settings);
        assert_eq!(fleet.aliens()[0].rect.x, 99);
    }

    #[test]
    fn no_reversal_away_from_edges() {
        let mut settings = Settings::default();
        let mut fleet = fleet_of(&[(100, 100), (500, 100)]);
        assert!(!fleet.check_edges(&mut settings, SCREEN));
        assert_eq!(settings.fleet_direction, FleetDirection::Right);
        assert_eq!(fleet.aliens()[0].rect.y, 100);
    }

    #[test]
    fn bullet_is_spent_on_the_alien_it_hits() {
        let settings = Settings::default();
        let mut fleet = fleet_of(&[(100, 100), (300, 100)]);
        let mut bullets = vec![
            Bullet::with_midtop(&settings, (130, 120)),
            Bullet::with_midtop(&settings, (700, 120)),
        ];

        assert_eq!(fleet.take_hits(&mut bullets), 1);
        assert_eq!(fleet.len(), 1);
        assert_eq!(fleet.aliens()[0].rect.x, 300);
        assert_eq!(bullets.len(), 1);
        assert_eq!(bullets[0].rect.centerx(), 700);
    }

    #[test]
    fn one_bullet_can_destroy_overlapping_aliens() {
        let settings = Settings::default();
        let mut fleet = fleet_of(&[(100, 100), (110, 100)]);
        let mut bullets = vec![Bullet::with_midtop(&settings, (130, 120))];

        assert_eq!(fleet.take_hits(&mut bullets), 2);
        assert!(fleet.is_empty());
        assert!(bullets.is_empty());
    }

    #[test]
    fn second_bullet_on_a_dead_alien_survives() {
        let settings = Settings::default();
        let mut fleet = fleet_of(&[(100, 100)]);
        let mut bullets = vec![
            Bullet::with_midtop(&settings, (130, 120)),
            Bullet::with_midtop(&settings, (140, 120)),
        ];

        assert_eq!(fleet.take_hits(&mut bullets), 1);
        assert_eq!(bullets.len(), 1);
        assert_eq!(bullets[0].rect.centerx(), 140);
    }

    proptest! {
        #[test]
        fn reversal_happens_once_per_frame(
            at_edge in prop::collection::vec(any::<bool>(), 1..20),
        ) {
            let positions: Vec<(i32, i32)> = at_edge
                .iter()
                .enumerate()
                .map(|(i, &edge)| {
                    let x = if !edge {
                        300
                    } else if i % 2 == 0 {
                        0
                    } else {
                        SCREEN.right() - 60
                    };
                    (x, 10 * i as i32)
                })
                .collect();
            let mut fleet = fleet_of(&positions);
            let mut settings = Settings::default();
            let any_edge = at_edge.iter().any(|&edge| edge);

            let reversed = fleet.check_edges(&mut settings, SCREEN);

            prop_assert_eq!(reversed, any_edge);
            let expected_direction = if any_edge {
                FleetDirection::Left
            } else {
                FleetDirection::Right
            };
            prop_assert_eq!(settings.fleet_direction, expected_direction);
            let drop = if any_edge { settings.fleet_drop_speed } else { 0 };
            for (alien, &(_, y)) in fleet.aliens().iter().zip(&positions) {
                prop_assert_eq!(alien.rect.y, y + drop);
            }
        }
    }
}
