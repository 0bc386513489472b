use std::rc::Rc;

use invasion_common::{Rect, Screen, Sprite};

use crate::fleet::FleetDirection;
use crate::settings::Settings;

/// One member of the alien fleet. The sprite is shared with the rest of
/// the fleet.
pub struct Alien {
    sprite: Rc<Sprite>,
    rect: Rect,
    x: f32,
    y: f32,
    speed: f32,
    screen_right: i32,
}

impl Alien {
    pub fn new(sprite: Rc<Sprite>, (x, y): (i32, i32), settings: &Settings) -> Self {
        let mut rect = sprite.rect();
        rect.x = x;
        rect.y = y;
        Self {
            sprite,
            rect,
            x: x as f32,
            y: y as f32,
            speed: settings.alien_speed,
            screen_right: settings.screen_width as i32,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn update(&mut self, direction: FleetDirection) {
        self.x += self.speed * direction.sign();
        self.rect.x = self.x as i32;
    }

    pub fn drop_by(&mut self, pixels: i32) {
        self.y += pixels as f32;
        self.rect.y = self.y as i32;
    }

    /// True when the alien touches or crosses either side of the screen.
    pub fn check_edges(&self) -> bool {
        self.rect.right() >= self.screen_right || self.rect.left() <= 0
    }

    pub fn render(&self, screen: &mut Screen) {
        screen.blit(&self.sprite, self.rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invasion_common::Color;

    fn alien_at(x: i32) -> Alien {
        Alien::new(
            Rc::new(Sprite::solid(40, 30, Color::WHITE)),
            (x, 30),
            &Settings::default(),
        )
    }

    #[test]
    fn update_follows_fleet_direction() {
        let mut alien = alien_at(100);
        alien.update(FleetDirection::Right);
        assert_eq!(alien.rect().x, 101);
        alien.update(FleetDirection::Left);
        alien.update(FleetDirection::Left);
        assert_eq!(alien.x(), 99.0);
        assert_eq!(alien.rect().x, 99);
    }

    #[test]
    fn edges_are_inclusive() {
        assert!(alien_at(0).check_edges());
        assert!(!alien_at(1).check_edges());
        assert!(!alien_at(1159).check_edges());
        assert!(alien_at(1160).check_edges());
        assert!(alien_at(1175).check_edges());
    }

    #[test]
    fn drop_moves_down_only() {
        let mut alien = alien_at(100);
        alien.drop_by(16);
        assert_eq!(alien.rect(), Rect::new(100, 46, 40, 30));
        assert_eq!(alien.y(), 46.0);
    }
}
