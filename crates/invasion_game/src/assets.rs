use std::path::Path;

use anyhow::{Context, Result};
use invasion_common::Sprite;

pub const SHIP_IMAGE: &str = "ship.png";
pub const ALIEN_IMAGE: &str = "alien.png";

const BUNDLED_SHIP: &[u8] = include_bytes!("../../../assets/images/ship.png");
const BUNDLED_ALIEN: &[u8] = include_bytes!("../../../assets/images/alien.png");

/// Every image the game needs.
pub struct Sprites {
    pub ship: Sprite,
    pub alien: Sprite,
}

impl Sprites {
    /// Load `ship.png` and `alien.png` from `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        log::info!("Loading sprites from '{}'", dir.display());
        Ok(Self {
            ship: Sprite::load(dir.join(SHIP_IMAGE))?,
            alien: Sprite::load(dir.join(ALIEN_IMAGE))?,
        })
    }

    /// The art compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Ok(Self {
            ship: Sprite::from_png_bytes(BUNDLED_SHIP).context("Bundled ship image is corrupt")?,
            alien: Sprite::from_png_bytes(BUNDLED_ALIEN)
                .context("Bundled alien image is corrupt")?,
        })
    }
}
