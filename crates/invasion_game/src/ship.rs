use invasion_common::{Rect, Screen, Sprite};

use crate::settings::Settings;

/// The player's ship. Sits on the bottom edge of the screen and slides
/// left and right while a direction key is held.
pub struct Ship {
    sprite: Sprite,
    rect: Rect,
    /// Sub-pixel horizontal position. `rect.x` is this value truncated.
    x: f32,
    speed: f32,
    screen: Rect,
    moving_left: bool,
    moving_right: bool,
}

impl Ship {
    pub fn new(sprite: Sprite, settings: &Settings) -> Self {
        let screen = Rect::new(
            0,
            0,
            settings.screen_width as i32,
            settings.screen_height as i32,
        );
        let mut rect = sprite.rect();
        rect.set_mid_bottom(screen.mid_bottom());
        Self {
            sprite,
            rect,
            x: rect.x as f32,
            speed: settings.ship_speed,
            screen,
            moving_left: false,
            moving_right: false,
        }
    }

    pub fn set_moving_left(&mut self, moving: bool) {
        self.moving_left = moving;
    }

    pub fn set_moving_right(&mut self, moving: bool) {
        self.moving_right = moving;
    }

    pub fn moving_left(&self) -> bool {
        self.moving_left
    }

    pub fn moving_right(&self) -> bool {
        self.moving_right
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Apply the movement intent for one frame.
    ///
    /// Both guards look at the box from before this frame, so holding both
    /// keys cancels out. At an edge the step is skipped rather than clamped.
    pub fn update(&mut self) {
        if self.moving_right && self.rect.right() < self.screen.right() {
            self.x += self.speed;
        }
        if self.moving_left && self.rect.left() > 0 {
            self.x -= self.speed;
        }
        self.rect.x = self.x as i32;
    }

    pub fn render(&self, screen: &mut Screen) {
        screen.blit(&self.sprite, self.rect);
    }
}
