use invasion_common::{Color, Rect, Screen};

use crate::settings::Settings;
use crate::ship::Ship;

/// A player shot: a plain colored rectangle travelling straight up.
#[derive(Clone, Debug)]
pub struct Bullet {
    rect: Rect,
    /// Sub-pixel vertical position. `rect.y` is this value truncated.
    y: f32,
    speed: f32,
    color: Color,
}

impl Bullet {
    /// Spawn a bullet whose top-center sits on the ship's top-center.
    pub fn new(ship: &Ship, settings: &Settings) -> Self {
        let mut rect = Rect::new(
            0,
            0,
            settings.bullet_width as i32,
            settings.bullet_height as i32,
        );
        rect.set_mid_top(ship.rect().mid_top());
        Self {
            rect,
            y: rect.y as f32,
            speed: settings.bullet_speed,
            color: settings.bullet_color,
        }
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn update(&mut self) {
        self.y -= self.speed;
        self.rect.y = self.y as i32;
    }

    /// True once the bullet has fully left the top of the screen.
    pub fn is_offscreen(&self) -> bool {
        self.rect.bottom() <= 0
    }

    pub fn render(&self, screen: &mut Screen) {
        screen.fill_rect(self.rect, self.color);
    }
}
