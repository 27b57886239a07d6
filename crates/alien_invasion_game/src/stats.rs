use crate::settings::Settings;

/// Statistics for one session, plus the high score which outlives sessions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameStats {
    pub ships_left: u32,
    pub score: u64,
    pub level: u32,
    /// Never reset; lives for as long as the process does.
    pub high_score: u64,
}

impl GameStats {
    pub fn new(settings: &Settings) -> Self {
        let mut stats = GameStats {
            ships_left: 0,
            score: 0,
            level: 1,
            high_score: 0,
        };
        stats.reset(settings);
        stats
    }

    pub fn reset(&mut self, settings: &Settings) {
        self.ships_left = settings.ship_limit;
        self.score = 0;
        self.level = 1;
    }

    pub fn check_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }
}
