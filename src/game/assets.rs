use std::path::Path;
use crate::audio::SoundHandle;
use crate::error::AssetError;
use crate::format_loaders::rgba_image;
use crate::game::{constants::*, SoundCue};
use crate::rendering::BlittableSurface;
use crate::rendering::fonts::true_type::Font;
use crate::utility::StopWatch;

pub struct Sprites {
    pub background: BlittableSurface,
    pub ship: BlittableSurface,
    pub debris: BlittableSurface,
    pub bullet: BlittableSurface,
    pub welcome_background: Option<BlittableSurface>
}

/// Every clip is optional, a missing one just means silence for that cue
#[derive(Default)]
pub struct Sounds {
    pub shoot: Option<SoundHandle>,
    pub hit: Option<SoundHandle>,
    pub game_over: Option<SoundHandle>
}

impl Sounds {
    pub fn for_cue(&self, cue: SoundCue) -> Option<&SoundHandle> {
        match cue {
            SoundCue::Shoot => self.shoot.as_ref(),
            SoundCue::Hit => self.hit.as_ref(),
            SoundCue::GameOver => self.game_over.as_ref()
        }
    }
}

pub struct AssetBundle {
    pub sprites: Sprites,
    pub font: Font,
    pub sounds: Sounds
}

impl AssetBundle {
    /// Loads every asset from `dir`.
    ///
    /// Images and the font are required and the first one that fails aborts the load.
    /// Sounds and the welcome background only produce a warning.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, AssetError> {
        let _sw = StopWatch::named("loading assets");
        let dir = dir.as_ref();

        let background = required(load_image(dir, BACKGROUND_IMAGE))?;
        let ship = required(load_image(dir, SHIP_IMAGE))?;
        let debris = required(load_image(dir, DEBRIS_IMAGE))?;
        let bullet = required(load_image(dir, BULLET_IMAGE))?;
        let welcome_background = optional(load_image(dir, WELCOME_BACKGROUND_IMAGE));
        let font = required(load_font(dir, FONT_FILE, FONT_SIZE))?;
        let sounds = Sounds {
            shoot: optional(load_sound(dir, SHOOT_SOUND)),
            hit: optional(load_sound(dir, HIT_SOUND)),
            game_over: optional(load_sound(dir, GAME_OVER_SOUND))
        };

        log::info!("Assets loaded from {}", dir.display());
        Ok(Self {
            sprites: Sprites {
                background,
                ship,
                debris,
                bullet,
                welcome_background
            },
            font,
            sounds
        })
    }
}

impl Drop for AssetBundle {
    fn drop(&mut self) {
        log::debug!("Releasing assets");
    }
}

fn required<T>(result: Result<T, AssetError>) -> Result<T, AssetError> {
    if let Err(err) = &result {
        log::error!("{}", err);
    }
    result
}

fn optional<T>(result: Result<T, AssetError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{}, continuing without it", err);
            None
        }
    }
}

fn load_image(dir: &Path, name: &str) -> Result<BlittableSurface, AssetError> {
    let path = dir.join(name);
    rgba_image::load_from_path(&path)
        .map_err(|source| AssetError::Image { path, source })
}

fn load_font(dir: &Path, name: &str, px: f32) -> Result<Font, AssetError> {
    let path = dir.join(name);
    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(source) => return Err(AssetError::Io { path, source })
    };
    Font::from_bytes(&bytes, px)
        .map_err(|reason| AssetError::Font { path, reason })
}

fn load_sound(dir: &Path, name: &str) -> Result<SoundHandle, AssetError> {
    let path = dir.join(name);
    let file = match std::fs::File::open(&path) {
        Ok(file) => file,
        Err(source) => return Err(AssetError::Io { path, source })
    };
    SoundHandle::from_file(file)
        .map_err(|source| AssetError::Sound { path, source })
}
