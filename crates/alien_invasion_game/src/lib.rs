use std::time::Duration;

pub mod alien;
pub mod app;
pub mod bullet;
pub mod button;
pub mod label;
pub mod scoreboard;
pub mod settings;
pub mod ship;
pub mod stats;


pub use alien::{Alien, Fleet};
pub use app::AlienInvasion;
pub use label::Label;
pub use settings::{FleetDirection, Settings};
pub use stats::GameStats;

pub const TITLE: &str = "Alien Invasion";

/// Sprite paths, relative to the asset directory.
pub const SHIP_IMAGE: &str = "images/ship.bmp";
pub const ALIEN_IMAGE: &str = "images/alien.bmp";

/// How long everything freezes after the ship is hit.
pub const SHIP_HIT_PAUSE: Duration = Duration::from_millis(500);
