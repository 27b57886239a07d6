use alien_invasion_common::{Color, Rect};
use typed_builder::TypedBuilder;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum FleetDirection {
    Right,
    Left,
}

impl FleetDirection {
    pub fn sign(&self) -> f32 {
        match self {
            FleetDirection::Right => 1.0,
            FleetDirection::Left => -1.0,
        }
    }

    pub fn reversed(&self) -> Self {
        match self {
            FleetDirection::Right => FleetDirection::Left,
            FleetDirection::Left => FleetDirection::Right,
        }
    }
}

/// Everything is fixed for the life of the process except the dynamic
/// block at the bottom, which [`increase_speed`](Settings::increase_speed)
/// scales on every cleared fleet and
/// [`initialize_dynamic_settings`](Settings::initialize_dynamic_settings)
/// restores when a new game starts.
#[derive(Clone, Debug, PartialEq, TypedBuilder)]
pub struct Settings {
    // Screen
    #[builder(default = 1150)]
    pub screen_width: u32,
    #[builder(default = 600)]
    pub screen_height: u32,
    #[builder(default = Color::new_rgb(230, 230, 230))]
    pub bg_color: Color,

    // Ship
    #[builder(default = 3)]
    pub ship_limit: u32,

    // Bullets
    #[builder(default = 3)]
    pub bullet_width: i32,
    #[builder(default = 15)]
    pub bullet_height: i32,
    #[builder(default = Color::new_rgb(60, 60, 60))]
    pub bullet_color: Color,
    #[builder(default = 3)]
    pub bullets_allowed: usize,

    // Aliens
    #[builder(default = 10)]
    pub fleet_drop_speed: i32,

    // Difficulty
    #[builder(default = 1.1)]
    pub speedup_scale: f32,
    #[builder(default = 1.5)]
    pub score_scale: f32,

    // Starting values of the dynamic settings
    #[builder(default = 1.5)]
    pub initial_ship_speed: f32,
    #[builder(default = 2.0)]
    pub initial_bullet_speed: f32,
    #[builder(default = 1.0)]
    pub initial_alien_speed: f32,
    #[builder(default = 50)]
    pub initial_alien_points: u64,

    // Dynamic settings
    #[builder(setter(skip), default = initial_ship_speed)]
    pub ship_speed: f32,
    #[builder(setter(skip), default = initial_bullet_speed)]
    pub bullet_speed: f32,
    #[builder(setter(skip), default = initial_alien_speed)]
    pub alien_speed: f32,
    #[builder(setter(skip), default = initial_alien_points)]
    pub alien_points: u64,
    #[builder(setter(skip), default = FleetDirection::Right)]
    pub fleet_direction: FleetDirection,
}

impl Default for Settings {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Settings {
    pub fn screen_rect(&self) -> Rect {
        Rect::new(0, 0, self.screen_width as i32, self.screen_height as i32)
    }

    pub fn initialize_dynamic_settings(&mut self) {
        self.ship_speed = self.initial_ship_speed;
        self.bullet_speed = self.initial_bullet_speed;
        self.alien_speed = self.initial_alien_speed;
        self.alien_points = self.initial_alien_points;
        self.fleet_direction = FleetDirection::Right;
    }

    pub fn increase_speed(&mut self) {
        self.ship_speed *= self.speedup_scale;
        self.bullet_speed *= self.speedup_scale;
        self.alien_speed *= self.speedup_scale;
        self.alien_points = (self.alien_points as f32 * self.score_scale) as u64;
        log::debug!(
            "Speeds now ship {:.2}, bullet {:.2}, alien {:.2}; aliens worth {}",
            self.ship_speed,
            self.bullet_speed,
            self.alien_speed,
            self.alien_points
        );
    }
}
