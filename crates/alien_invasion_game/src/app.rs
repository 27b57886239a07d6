use std::path::Path;

use alien_invasion_common::{App, Canvas, Host, Image, InputEvent, Key, Rect};
use anyhow::{ensure, Context, Result};

use crate::alien::Fleet;
use crate::bullet::Bullet;
use crate::button::Button;
use crate::scoreboard::Scoreboard;
use crate::settings::Settings;
use crate::ship::Ship;
use crate::stats::GameStats;
use crate::{ALIEN_IMAGE, SHIP_HIT_PAUSE, SHIP_IMAGE, TITLE};

/// Owns every entity and drives one frame at a time.
///
/// The game starts inactive, showing the Play button. While active, each
/// [`update`](App::update) moves the ship, bullets and fleet and resolves
/// collisions in that order.
pub struct AlienInvasion {
    pub(crate) settings: Settings,
    screen: Rect,
    pub(crate) stats: GameStats,
    pub(crate) ship: Ship,
    pub(crate) bullets: Vec<Bullet>,
    pub(crate) fleet: Fleet,
    scoreboard: Scoreboard,
    play_button: Button,
    game_active: bool,
    should_exit: bool,
}

impl AlienInvasion {
    /// Loads the sprites from `assets` and lays out the first fleet.
    pub fn new(settings: Settings, assets: &Path, host: &mut dyn Host) -> Result<Self> {
        let ship_image =
            load_sprite(host, assets, SHIP_IMAGE).context("failed to load the ship sprite")?;
        let alien_image =
            load_sprite(host, assets, ALIEN_IMAGE).context("failed to load the alien sprite")?;

        let screen = settings.screen_rect();
        let mut fleet = Fleet::new(alien_image);
        fleet.spawn(screen);
        ensure!(
            !fleet.is_empty(),
            "a {}x{} screen has no room for a fleet of {}x{} aliens",
            screen.width,
            screen.height,
            alien_image.width(),
            alien_image.height()
        );

        let stats = GameStats::new(&settings);
        let scoreboard = Scoreboard::new(host, screen, settings.bg_color, ship_image, &stats)?;
        let play_button = Button::new(host, screen, "Play")?;

        Ok(AlienInvasion {
            screen,
            stats,
            ship: Ship::new(ship_image, screen),
            bullets: Vec::new(),
            fleet,
            scoreboard,
            play_button,
            game_active: false,
            should_exit: false,
            settings,
        })
    }

    pub fn is_active(&self) -> bool {
        self.game_active
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn play_button(&self) -> &Button {
        &self.play_button
    }

    fn check_keydown(&mut self, key: Key) {
        match key {
            Key::Right => self.ship.moving_right = true,
            Key::Left => self.ship.moving_left = true,
            Key::Space => self.fire_bullet(),
            Key::Q => self.should_exit = true,
            Key::None => {}
        }
    }

    fn check_keyup(&mut self, key: Key) {
        match key {
            Key::Right => self.ship.moving_right = false,
            Key::Left => self.ship.moving_left = false,
            _ => {}
        }
    }

    fn check_play_button(&mut self, x: i32, y: i32, host: &mut dyn Host) -> Result<()> {
        if self.play_button.contains(x, y) && !self.game_active {
            self.start_game(host)?;
        }
        Ok(())
    }

    fn start_game(&mut self, host: &mut dyn Host) -> Result<()> {
        self.settings.initialize_dynamic_settings();
        self.stats.reset(&self.settings);
        self.scoreboard.prep_images(host, &self.stats)?;
        self.game_active = true;

        self.bullets.clear();
        self.fleet.spawn(self.screen);
        self.ship.center_ship(self.screen);

        host.set_cursor_visible(false);
        log::info!("New game started");
        Ok(())
    }

    fn fire_bullet(&mut self) {
        if !self.game_active || self.bullets.len() >= self.settings.bullets_allowed {
            return;
        }
        self.bullets.push(Bullet::new(&self.settings, &self.ship));
        log::debug!("Bullet fired ({} in flight)", self.bullets.len());
    }

    fn update_bullets(&mut self, host: &mut dyn Host) -> Result<()> {
        for bullet in &mut self.bullets {
            bullet.update(&self.settings);
        }
        self.bullets.retain(|bullet| !bullet.is_off_screen());

        self.check_bullet_alien_collisions(host)
    }

    fn check_bullet_alien_collisions(&mut self, host: &mut dyn Host) -> Result<()> {
        let destroyed = self.fleet.take_hits(&mut self.bullets);
        if destroyed > 0 {
            let points = self.settings.alien_points.saturating_mul(destroyed as u64);
            self.stats.score = self.stats.score.saturating_add(points);
            self.scoreboard.prep_score(host, &self.stats)?;
            if self.stats.check_high_score() {
                self.scoreboard.prep_high_score(host, &self.stats)?;
            }
        }

        if self.fleet.is_empty() {
            self.start_new_level(host)?;
        }
        Ok(())
    }

    fn start_new_level(&mut self, host: &mut dyn Host) -> Result<()> {
        self.bullets.clear();
        self.fleet.spawn(self.screen);
        self.settings.increase_speed();

        self.stats.level += 1;
        self.scoreboard.prep_level(host, &self.stats)?;
        log::info!("Fleet destroyed, level {}", self.stats.level);
        Ok(())
    }

    fn update_aliens(&mut self, host: &mut dyn Host) {
        self.fleet.check_edges(&mut self.settings, self.screen);
        self.fleet.update(&self.settings);

        if self.fleet.collides_with(&self.ship.rect) || self.fleet.reached_bottom(self.screen) {
            self.ship_hit(host);
        }
    }

    fn ship_hit(&mut self, host: &mut dyn Host) {
        self.stats.ships_left = self.stats.ships_left.saturating_sub(1);
        self.scoreboard.prep_ships(&self.stats);

        if self.stats.ships_left > 0 {
            log::info!("Ship hit, {} left", self.stats.ships_left);
            self.bullets.clear();
            self.fleet.spawn(self.screen);
            self.ship.center_ship(self.screen);

            host.sleep(SHIP_HIT_PAUSE);
        } else {
            log::info!(
                "Game over with {} points (high score {})",
                self.stats.score,
                self.stats.high_score
            );
            self.game_active = false;
            host.set_cursor_visible(true);
        }
    }
}

fn load_sprite(host: &mut dyn Host, assets: &Path, name: &str) -> Result<Image> {
    let path = assets.join(name);
    let image = host.load_image(&path)?;
    ensure!(
        image.width() > 0 && image.height() > 0,
        "'{}' is empty ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

impl App for AlienInvasion {
    fn init(&mut self, host: &mut dyn Host) -> Result<()> {
        log::info!("Alien Invasion init");
        host.set_cursor_visible(true);
        Ok(())
    }

    fn handle_event(&mut self, event: InputEvent, host: &mut dyn Host) -> Result<()> {
        match event {
            InputEvent::Quit => self.should_exit = true,
            InputEvent::KeyDown(key) => self.check_keydown(key),
            InputEvent::KeyUp(key) => self.check_keyup(key),
            InputEvent::MouseDown { x, y } => self.check_play_button(x, y, host)?,
        }
        Ok(())
    }

    fn update(&mut self, host: &mut dyn Host) -> Result<()> {
        if !self.game_active {
            return Ok(());
        }
        self.ship.update(&self.settings, self.screen);
        self.update_bullets(host)?;
        self.update_aliens(host);
        Ok(())
    }

    fn draw(&self, canvas: &mut dyn Canvas) -> Result<()> {
        canvas.clear(self.settings.bg_color)?;
        for bullet in &self.bullets {
            bullet.draw(canvas)?;
        }
        self.ship.draw(canvas)?;
        self.fleet.draw(canvas)?;
        self.scoreboard.show(canvas)?;

        if !self.game_active {
            self.play_button.draw(canvas)?;
        }
        Ok(())
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn exit(&mut self) {
        log::info!("Alien Invasion exit");
    }

    fn width(&self) -> u32 {
        self.settings.screen_width
    }

    fn height(&self) -> u32 {
        self.settings.screen_height
    }

    fn title(&self) -> String {
        TITLE.to_string()
    }
}
