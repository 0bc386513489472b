use std::rc::Rc;

use invasion_common::app::App;
use invasion_common::key::Key;
use invasion_common::screen::Screen;

use crate::assets::Sprites;
use crate::bullet::Bullet;
use crate::fleet::Fleet;
use crate::settings::Settings;
use crate::ship::Ship;
use crate::TITLE;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum GameState {
    #[default]
    Running,
    Terminated,
}

/// Owns every entity and advances them once per frame.
pub struct AlienInvasion {
    settings: Settings,
    ship: Ship,
    bullets: Vec<Bullet>,
    fleet: Fleet,
    state: GameState,
}

impl AlienInvasion {
    /// `settings` must already carry the real screen size; the fleet is laid
    /// out from it here.
    pub fn new(settings: Settings, sprites: Sprites) -> Self {
        let Sprites { ship, alien } = sprites;
        let ship = Ship::new(ship, &settings);
        let fleet = Fleet::new(&settings, Rc::new(alien), ship.rect().height);
        Self {
            bullets: Vec::with_capacity(settings.bullets_allowed),
            settings,
            ship,
            fleet,
            state: GameState::default(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Spawn a bullet unless the cap is reached. Returns whether one was fired.
    pub fn fire_bullet(&mut self) -> bool {
        if self.bullets.len() >= self.settings.bullets_allowed {
            log::trace!("Bullet cap of {} reached", self.settings.bullets_allowed);
            return false;
        }
        self.bullets.push(Bullet::new(&self.ship, &self.settings));
        log::trace!("Fired bullet, {} in flight", self.bullets.len());
        true
    }

    fn update_bullets(&mut self) {
        for bullet in &mut self.bullets {
            bullet.update();
        }
        let before = self.bullets.len();
        self.bullets.retain(|bullet| !bullet.is_offscreen());
        if self.bullets.len() < before {
            log::trace!("Despawned {} bullet(s)", before - self.bullets.len());
        }
    }

    fn terminate(&mut self) {
        self.state = GameState::Terminated;
    }
}

impl App for AlienInvasion {
    fn init(&mut self) {
        log::info!(
            "Alien Invasion init: {}x{} screen, {} aliens",
            self.settings.screen_width,
            self.settings.screen_height,
            self.fleet.len()
        );
    }

    fn update(&mut self) {
        if self.state != GameState::Running {
            return;
        }
        self.ship.update();
        self.update_bullets();
        self.fleet.update();
    }

    fn render(&self, screen: &mut Screen) {
        screen.fill(self.settings.background_color);
        self.ship.render(screen);
        for bullet in &self.bullets {
            bullet.render(screen);
        }
        self.fleet.render(screen);
    }

    fn handle_key_event(&mut self, key: Key, is_down: bool) {
        match key {
            Key::Right => self.ship.set_moving_right(is_down),
            Key::Left => self.ship.set_moving_left(is_down),
            Key::Space if is_down => {
                self.fire_bullet();
            }
            Key::Q if is_down => self.terminate(),
            _ => {}
        }
    }

    fn should_exit(&self) -> bool {
        self.state == GameState::Terminated
    }

    fn exit(&mut self) {
        self.terminate();
        log::info!("Alien Invasion exit");
    }

    fn width(&self) -> u32 {
        self.settings.screen_width
    }

    fn height(&self) -> u32 {
        self.settings.screen_height
    }

    fn title(&self) -> String {
        TITLE.to_string()
    }
}
