//! Image assets the card is composed from.
//!
//! Assets are fetched by whoever owns the card, so the card only ever sees an
//! asset as [`Asset::Pending`] until its raster shows up.

use crate::error::{Error, Result};

use cairo::ImageSurface;
use std::fmt;
use std::io::Cursor;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AssetKey {
    Template,
    Circle,
    Triangle,
}

impl AssetKey {
    pub const ALL: [AssetKey; 3] = [AssetKey::Template, AssetKey::Circle, AssetKey::Triangle];

    /// Stable logical path of the asset, relative to the asset root.
    pub fn path(&self) -> &'static str {
        match self {
            AssetKey::Template => "/img/template/game-card.png",
            AssetKey::Circle => "/img/hand-drawn/circle.svg",
            AssetKey::Triangle => "/img/hand-drawn/triangle.svg",
        }
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AssetKey::Template => "template",
            AssetKey::Circle => "circle",
            AssetKey::Triangle => "triangle",
        };
        f.write_str(name)
    }
}

/// A decoded image ready to be painted.
#[derive(Debug, Clone)]
pub struct Raster(ImageSurface);

impl Raster {
    pub fn from_png(bytes: &[u8]) -> Result<Self> {
        let mut reader = Cursor::new(bytes);
        let surface = ImageSurface::create_from_png(&mut reader)
            .map_err(|_| Error::ImageConversionError("png", "cairo"))?;
        Ok(Self(surface))
    }

    pub fn width(&self) -> i32 {
        self.0.width()
    }

    pub fn height(&self) -> i32 {
        self.0.height()
    }

    pub fn surface(&self) -> &ImageSurface {
        &self.0
    }
}

impl From<ImageSurface> for Raster {
    fn from(surface: ImageSurface) -> Self {
        Self(surface)
    }
}

#[derive(Debug, Clone, Default)]
pub enum Asset {
    #[default]
    Pending,
    Available(Raster),
}

impl Asset {
    pub fn raster(&self) -> Option<&Raster> {
        match self {
            Asset::Pending => None,
            Asset::Available(raster) => Some(raster),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Asset::Available(_))
    }
}

/// The three images a card needs, each resolved independently.
#[derive(Debug, Clone, Default)]
pub struct AssetSet {
    template: Asset,
    circle: Asset,
    triangle: Asset,
}

impl AssetSet {
    pub fn get(&self, key: AssetKey) -> &Asset {
        match key {
            AssetKey::Template => &self.template,
            AssetKey::Circle => &self.circle,
            AssetKey::Triangle => &self.triangle,
        }
    }

    pub fn resolve(&mut self, key: AssetKey, raster: Raster) {
        let slot = match key {
            AssetKey::Template => &mut self.template,
            AssetKey::Circle => &mut self.circle,
            AssetKey::Triangle => &mut self.triangle,
        };
        *slot = Asset::Available(raster);
    }

    pub fn raster(&self, key: AssetKey) -> Option<&Raster> {
        self.get(key).raster()
    }

    pub fn pending(&self) -> impl Iterator<Item = AssetKey> + '_ {
        AssetKey::ALL
            .into_iter()
            .filter(|key| !self.get(*key).is_available())
    }
}
