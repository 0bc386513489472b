use invasion_common::Color;
use typed_builder::TypedBuilder;

use crate::fleet::FleetDirection;

/// Tunables for one session.
///
/// Built once at startup. `screen_width`/`screen_height` are overwritten
/// with the real surface size after the window is created; everything else
/// stays fixed. Speeds are in pixels per frame.
#[derive(Clone, Debug, PartialEq, TypedBuilder)]
pub struct Settings {
    #[builder(default = 1200)]
    pub screen_width: u32,
    #[builder(default = 800)]
    pub screen_height: u32,
    #[builder(default = Color::BLACK)]
    pub background_color: Color,

    #[builder(default = 1.5)]
    pub ship_speed: f32,

    #[builder(default = 1.0)]
    pub bullet_speed: f32,
    #[builder(default = 4)]
    pub bullet_width: u32,
    #[builder(default = 16)]
    pub bullet_height: u32,
    #[builder(default = Color::gray(250))]
    pub bullet_color: Color,
    /// Maximum number of player bullets alive at once.
    #[builder(default = 3)]
    pub bullets_allowed: usize,

    #[builder(default = 1.0)]
    pub alien_speed: f32,
    /// How far the fleet drops each time it reverses.
    #[builder(default = 16)]
    pub fleet_drop_speed: i32,
    /// Direction the fleet starts moving in.
    #[builder(default = FleetDirection::Right)]
    pub fleet_direction: FleetDirection,
}

impl Default for Settings {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Settings {
    pub fn set_screen_size(&mut self, width: u32, height: u32) {
        self.screen_width = width;
        self.screen_height = height;
    }
}
