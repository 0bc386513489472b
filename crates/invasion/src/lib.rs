use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use invasion_game::{AlienInvasion, Settings, Sprites};
use invasion_sdl2::{SdlContext, SdlInitInfo};

pub const USAGE: &str = "\
Usage: alien_invasion [--windowed] [--assets <dir>]

Options:
  --windowed       open a window at the default size instead of fullscreen
  --assets <dir>   load ship.png and alien.png from <dir> instead of the bundled art
  -h, --help       print this help";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOptions {
    pub fullscreen: bool,
    pub asset_dir: Option<PathBuf>,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            fullscreen: true,
            asset_dir: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(LaunchOptions),
    Help,
}

/// Parse command-line arguments, excluding the program name.
pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Command> {
    let mut options = LaunchOptions::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--windowed" => options.fullscreen = false,
            "--fullscreen" => options.fullscreen = true,
            "--assets" => {
                let dir = args.next().context("--assets needs a directory")?;
                options.asset_dir = Some(PathBuf::from(dir));
            }
            "-h" | "--help" => return Ok(Command::Help),
            other => bail!("Unknown argument '{}'", other),
        }
    }
    Ok(Command::Play(options))
}

pub fn run(options: LaunchOptions) -> Result<()> {
    let mut settings = Settings::default();
    let init_info = SdlInitInfo::builder()
        .width(settings.screen_width)
        .height(settings.screen_height)
        .title(invasion_game::TITLE.to_string())
        .fullscreen(options.fullscreen)
        .build();
    let context = SdlContext::new(init_info)?;
    let (width, height) = context.window_size();
    settings.set_screen_size(width, height);

    let sprites = match &options.asset_dir {
        Some(dir) => Sprites::load(dir)?,
        None => {
            log::info!("No asset directory provided, using bundled sprites");
            Sprites::bundled()?
        }
    };

    let app = AlienInvasion::new(settings, sprites);
    context.run(app)
}
