use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::WindowCanvas;
use typed_builder::TypedBuilder;

pub use invasion_common;
pub use invasion_common::app::App;
pub use sdl2;

use invasion_common::key::Key;
use invasion_common::screen::Screen;

#[derive(TypedBuilder)]
pub struct SdlInitInfo {
    pub width: u32,
    pub height: u32,
    pub title: String,
    /// Take over the whole desktop. The window then reports the display
    /// resolution instead of `width`/`height`.
    #[builder(default = false)]
    pub fullscreen: bool,
    /// Frame cap. `0` runs as fast as the renderer presents.
    #[builder(default = 60)]
    pub target_fps: u32,
}

pub struct SdlContext {
    pub sdl_context: sdl2::Sdl,
    pub event_pump: sdl2::EventPump,
    pub canvas: WindowCanvas,
    pub target_fps: u32,
}

impl SdlContext {
    pub fn new(sdl_init_info: SdlInitInfo) -> Result<Self> {
        let SdlInitInfo {
            width,
            height,
            title,
            fullscreen,
            target_fps,
        } = sdl_init_info;

        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
        let mut builder = video_subsystem.window(&title, width, height);
        if fullscreen {
            builder.fullscreen_desktop();
        } else {
            builder.position_centered();
        }
        let window = builder.build().context("Failed to create window")?;
        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .context("Failed to create canvas")?;
        let event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;

        let context = Self {
            sdl_context,
            event_pump,
            canvas,
            target_fps,
        };
        let (w, h) = context.window_size();
        log::info!("Opened '{}' window at {}x{}", title, w, h);
        Ok(context)
    }

    /// Real size of the drawable surface, which differs from the requested
    /// size in fullscreen mode.
    pub fn window_size(&self) -> (u32, u32) {
        self.canvas.window().size()
    }

    pub fn run(mut self, mut app: impl App) -> Result<()> {
        let width = app.width();
        let height = app.height();
        self.canvas.window_mut().set_title(&app.title())?;

        let creator = self.canvas.texture_creator();
        let mut texture = creator
            .create_texture_streaming(PixelFormatEnum::RGB24, width, height)
            .context("Failed to create frame texture")?;
        let mut screen = Screen::new(width, height);

        let target_frame = match self.target_fps {
            0 => None,
            fps => Some(Duration::from_secs(1) / fps),
        };
        let mut last_frame = Instant::now();

        app.init();
        loop {
            for event in self.event_pump.poll_iter() {
                match event {
                    Event::Quit { .. } => {
                        app.exit();
                        return Ok(());
                    }
                    Event::KeyDown {
                        keycode: Some(keycode),
                        repeat: false,
                        ..
                    } => {
                        let key = map_keycode(keycode);
                        app.handle_key_event(key, true);
                    }
                    Event::KeyUp {
                        keycode: Some(keycode),
                        ..
                    } => {
                        let key = map_keycode(keycode);
                        app.handle_key_event(key, false);
                    }
                    _ => {}
                }
            }

            if app.should_exit() {
                app.exit();
                break;
            }

            app.update();
            app.render(&mut screen);

            texture
                .update(None, screen.as_bytes(), screen.pitch())
                .context("Failed to upload frame")?;
            self.canvas.clear();
            self.canvas.copy(&texture, None, None).map_err(|e| anyhow!(e))?;
            self.canvas.present();

            if let Some(target_frame) = target_frame {
                let elapsed = last_frame.elapsed();
                if elapsed < target_frame {
                    std::thread::sleep(target_frame - elapsed);
                }
            }
            last_frame = Instant::now();
        }

        Ok(())
    }
}

pub fn map_keycode(keycode: Keycode) -> Key {
    match keycode {
        Keycode::Left => Key::Left,
        Keycode::Right => Key::Right,
        Keycode::Space => Key::Space,
        Keycode::Q => Key::Q,
        _ => Key::None,
    }
}
