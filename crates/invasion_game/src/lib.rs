pub mod alien;
pub mod assets;
pub mod bullet;
pub mod fleet;
pub mod game;
pub mod settings;
pub mod ship;

pub use assets::Sprites;
pub use game::{AlienInvasion, GameState};
pub use settings::Settings;

/// Window caption.
pub const TITLE: &str = "Alien Invasion!";
