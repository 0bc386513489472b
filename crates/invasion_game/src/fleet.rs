use std::rc::Rc;

use invasion_common::{Screen, Sprite};

use crate::alien::Alien;
use crate::settings::Settings;

/// Horizontal direction shared by the whole fleet.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum FleetDirection {
    #[default]
    Right,
    Left,
}

impl FleetDirection {
    #[inline]
    pub const fn sign(self) -> f32 {
        match self {
            FleetDirection::Right => 1.0,
            FleetDirection::Left => -1.0,
        }
    }

    #[inline]
    pub const fn reversed(self) -> Self {
        match self {
            FleetDirection::Right => FleetDirection::Left,
            FleetDirection::Left => FleetDirection::Right,
        }
    }
}

/// Number of aliens that fit in one row, leaving one alien width of margin
/// on each side and one alien width between neighbours.
pub fn aliens_per_row(screen_width: i32, alien_width: i32) -> i32 {
    if alien_width <= 0 {
        return 0;
    }
    ((screen_width - 2 * alien_width) / (2 * alien_width)).max(0)
}

/// Number of rows that fit above the ship, keeping sixteen alien heights
/// clear for the player.
pub fn number_of_rows(screen_height: i32, alien_height: i32, ship_height: i32) -> i32 {
    if alien_height <= 0 {
        return 0;
    }
    ((screen_height - 16 * alien_height - ship_height) / (2 * alien_height)).max(0)
}

/// Top-left corner of the alien at `(column, row)`.
pub fn alien_position(column: i32, row: i32, alien_width: i32, alien_height: i32) -> (i32, i32) {
    (
        alien_width + 2 * alien_width * column,
        alien_height + 2 * alien_height * row,
    )
}

pub struct Fleet {
    aliens: Vec<Alien>,
    direction: FleetDirection,
    drop_speed: i32,
}

impl Fleet {
    /// Lay out a full grid of aliens for the current screen size.
    pub fn new(settings: &Settings, sprite: Rc<Sprite>, ship_height: i32) -> Self {
        let alien_width = sprite.width() as i32;
        let alien_height = sprite.height() as i32;
        let per_row = aliens_per_row(settings.screen_width as i32, alien_width);
        let rows = number_of_rows(settings.screen_height as i32, alien_height, ship_height);

        let mut aliens = Vec::with_capacity((per_row * rows) as usize);
        for row in 0..rows {
            for column in 0..per_row {
                let position = alien_position(column, row, alien_width, alien_height);
                aliens.push(Alien::new(Rc::clone(&sprite), position, settings));
            }
        }
        log::debug!(
            "Created fleet of {} aliens ({} rows of {})",
            aliens.len(),
            rows,
            per_row
        );

        Self {
            aliens,
            direction: settings.fleet_direction,
            drop_speed: settings.fleet_drop_speed,
        }
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

    pub fn direction(&self) -> FleetDirection {
        self.direction
    }

    /// Reverse and drop if any alien touches an edge, then step every
    /// alien in the current direction.
    pub fn update(&mut self) {
        if self.aliens.iter().any(Alien::check_edges) {
            self.change_direction();
        }
        for alien in &mut self.aliens {
            alien.update(self.direction);
        }
    }

    fn change_direction(&mut self) {
        for alien in &mut self.aliens {
            alien.drop_by(self.drop_speed);
        }
        self.direction = self.direction.reversed();
        log::debug!("Fleet reached an edge, now moving {:?}", self.direction);
    }

    pub fn render(&self, screen: &mut Screen) {
        for alien in &self.aliens {
            alien.render(screen);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invasion_common::{Color, Rect};

    fn fleet(settings: &Settings) -> Fleet {
        Fleet::new(settings, Rc::new(Sprite::solid(40, 30, Color::WHITE)), 48)
    }

    #[test]
    fn direction_sign_is_unit() {
        assert_eq!(FleetDirection::Right.sign(), 1.0);
        assert_eq!(FleetDirection::Left.sign(), -1.0);
        assert_eq!(FleetDirection::Right.reversed(), FleetDirection::Left);
        assert_eq!(FleetDirection::Left.reversed().reversed(), FleetDirection::Left);
    }

    #[test]
    fn aliens_per_row_for_default_width() {
        assert_eq!(aliens_per_row(1200, 40), 14);
        assert_eq!(aliens_per_row(1200, 36), 15);
        assert_eq!(aliens_per_row(100, 40), 0);
        assert_eq!(aliens_per_row(10, 40), 0);
    }

    #[test]
    fn number_of_rows_leaves_room_for_ship() {
        // (800 - 480 - 48) / 60
        assert_eq!(number_of_rows(800, 30, 48), 4);
        assert_eq!(number_of_rows(400, 30, 48), 0);
    }

    #[test]
    fn grid_position_uses_full_sprite_gap() {
        assert_eq!(alien_position(2, 1, 40, 30), (200, 90));
        assert_eq!(alien_position(0, 0, 40, 30), (40, 30));
    }

    #[test]
    fn new_fills_the_grid() {
        let fleet = fleet(&Settings::default());
        assert_eq!(fleet.len(), 14 * 4);
        assert_eq!(fleet.direction(), FleetDirection::Right);
        assert_eq!(fleet.aliens()[0].rect(), Rect::new(40, 30, 40, 30));
        // row 1, column 2
        assert_eq!(fleet.aliens()[14 + 2].rect(), Rect::new(200, 90, 40, 30));
        let last = fleet.aliens().last().unwrap().rect();
        assert_eq!((last.x, last.y), (40 + 80 * 13, 30 + 60 * 3));
    }

    #[test]
    fn tiny_screen_gets_empty_fleet() {
        let settings = Settings::builder().screen_width(60).screen_height(200).build();
        let mut fleet = fleet(&settings);
        assert!(fleet.is_empty());
        fleet.update();
        assert_eq!(fleet.direction(), FleetDirection::Right);
    }

    #[test]
    fn update_moves_every_alien() {
        let mut fleet = fleet(&Settings::default());
        fleet.update();
        assert!(fleet.aliens().iter().all(|a| a.rect().x % 80 == 41));
    }

    #[test]
    fn reverses_and_drops_at_right_edge() {
        let mut fleet = fleet(&Settings::default());
        // rightmost alien starts with its right edge at 1120
        for _ in 0..80 {
            fleet.update();
        }
        assert_eq!(fleet.direction(), FleetDirection::Right);
        assert_eq!(fleet.aliens()[13].rect().right(), 1200);
        assert_eq!(fleet.aliens()[0].rect().y, 30);

        fleet.update();
        assert_eq!(fleet.direction(), FleetDirection::Left);
        assert_eq!(fleet.aliens()[0].rect().y, 46);
        assert_eq!(fleet.aliens()[13].rect().right(), 1199);

        // back inside the screen, so no second drop
        fleet.update();
        assert_eq!(fleet.direction(), FleetDirection::Left);
        assert_eq!(fleet.aliens()[0].rect().y, 46);
    }

    #[test]
    fn reverses_at_left_edge() {
        let settings = Settings::builder()
            .fleet_direction(FleetDirection::Left)
            .build();
        let mut fleet = fleet(&settings);
        for _ in 0..40 {
            fleet.update();
        }
        assert_eq!(fleet.aliens()[0].rect().left(), 0);
        fleet.update();
        assert_eq!(fleet.direction(), FleetDirection::Right);
        assert_eq!(fleet.aliens()[0].rect().left(), 1);
        assert_eq!(fleet.aliens()[0].rect().y, 46);
    }
}
