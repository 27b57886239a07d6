use alien_invasion_common::{Canvas, Color, Host, Image, Rect};
use anyhow::Result;

use crate::label::Label;
use crate::stats::GameStats;

const TEXT_COLOR: Color = Color::new_rgb(30, 30, 30);
const FONT_SIZE: u16 = 48;
const MARGIN: i32 = 20;

pub struct Scoreboard {
    screen: Rect,
    background: Color,
    ship_image: Image,
    score: Label,
    high_score: Label,
    level: Label,
    ships: Vec<Rect>,
}

impl Scoreboard {
    pub fn new(
        host: &mut dyn Host,
        screen: Rect,
        background: Color,
        ship_image: Image,
        stats: &GameStats,
    ) -> Result<Self> {
        let render = |host: &mut dyn Host, text: &str| {
            Label::render(host, text, FONT_SIZE, TEXT_COLOR, background)
        };
        let mut scoreboard = Scoreboard {
            screen,
            background,
            ship_image,
            score: render(host, "0")?,
            high_score: render(host, "0")?,
            level: render(host, "1")?,
            ships: Vec::new(),
        };
        scoreboard.prep_images(host, stats)?;
        Ok(scoreboard)
    }

    pub fn prep_images(&mut self, host: &mut dyn Host, stats: &GameStats) -> Result<()> {
        self.prep_score(host, stats)?;
        self.prep_high_score(host, stats)?;
        self.prep_level(host, stats)?;
        self.prep_ships(stats);
        Ok(())
    }

    /// Score at the top-right, rounded to the nearest ten.
    pub fn prep_score(&mut self, host: &mut dyn Host, stats: &GameStats) -> Result<()> {
        let mut label = self.render(host, &with_thousands(round_to_ten(stats.score)))?;
        label.rect.set_right(self.screen.right() - MARGIN);
        label.rect.y = MARGIN;
        std::mem::replace(&mut self.score, label).release(host);
        Ok(())
    }

    pub fn prep_high_score(&mut self, host: &mut dyn Host, stats: &GameStats) -> Result<()> {
        let mut label = self.render(host, &with_thousands(round_to_ten(stats.high_score)))?;
        label.rect.set_centerx(self.screen.centerx());
        label.rect.y = self.score.rect.y;
        std::mem::replace(&mut self.high_score, label).release(host);
        Ok(())
    }

    /// Level just below the score.
    pub fn prep_level(&mut self, host: &mut dyn Host, stats: &GameStats) -> Result<()> {
        let mut label = self.render(host, &stats.level.to_string())?;
        label.rect.set_right(self.score.rect.right());
        label.rect.y = self.score.rect.bottom() + 10;
        std::mem::replace(&mut self.level, label).release(host);
        Ok(())
    }

    pub fn prep_ships(&mut self, stats: &GameStats) {
        let mut rect = self.ship_image.rect();
        rect.y = 10;
        self.ships = (0..stats.ships_left as i32)
            .map(|i| {
                rect.x = 10 + i * rect.width;
                rect
            })
            .collect();
    }

    pub fn score_text(&self) -> &str {
        self.score.text()
    }

    pub fn high_score_text(&self) -> &str {
        self.high_score.text()
    }

    pub fn level_text(&self) -> &str {
        self.level.text()
    }

    pub fn ships(&self) -> &[Rect] {
        &self.ships
    }

    pub fn show(&self, canvas: &mut dyn Canvas) -> Result<()> {
        self.score.draw(canvas)?;
        self.high_score.draw(canvas)?;
        self.level.draw(canvas)?;
        for rect in &self.ships {
            canvas.blit(self.ship_image, *rect)?;
        }
        Ok(())
    }

    fn render(&self, host: &mut dyn Host, text: &str) -> Result<Label> {
        Label::render(host, text, FONT_SIZE, TEXT_COLOR, self.background)
    }
}

fn round_to_ten(value: u64) -> u64 {
    value.saturating_add(5) / 10 * 10
}

/// `1234567` -> `"1,234,567"`
fn with_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
