//! Asset cache
//!
//! Loaded once at startup from the data directory and shared by reference
//! with every scene. The explosion sprite is required; the font is not, and
//! without it scenes simply draw no text.

use std::path::Path;

use rusttype::Font;

use crate::error::DemoError;
use crate::renderer::Sprite;

/// Explosion sprite, relative to the data directory
pub const EXPLOSION_IMAGE: &str = "explosion1.gif";
/// Title and prompt font, relative to the data directory
pub const FONT_FILE: &str = "FreeSansBold.ttf";

pub struct Assets {
    /// Explosion animation: the decoded image, then the same image flipped
    pub explosion: [Sprite; 2],
    pub font: Option<Font<'static>>,
}

impl Assets {
    pub fn new(explosion: Sprite, font: Option<Font<'static>>) -> Self {
        let flipped = explosion.flipped();
        Self {
            explosion: [explosion, flipped],
            font,
        }
    }

    /// Load everything from `data_dir`
    pub fn load(data_dir: &Path) -> Result<Self, DemoError> {
        let explosion = load_sprite(&data_dir.join(EXPLOSION_IMAGE))?;
        let font = load_font(&data_dir.join(FONT_FILE));
        Ok(Self::new(explosion, font))
    }
}

fn load_sprite(path: &Path) -> Result<Sprite, DemoError> {
    let image = image::open(path)
        .map_err(|source| DemoError::Image {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();
    log::debug!("Loaded {} ({}x{})", path.display(), image.width(), image.height());
    Ok(Sprite::from_rgba(image.width(), image.height(), image.as_raw()))
}

fn load_font(path: &Path) -> Option<Font<'static>> {
    let font = std::fs::read(path).ok().and_then(Font::try_from_vec);
    if font.is_none() {
        log::warn!("Warning, fonts disabled");
    }
    font
}
