//! Common error types.

use std::path::Path;

/// A shortcut type equivalent to `Result<T, gamecard::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error that occurs within the crate.
#[derive(Debug)]
pub enum Error {
    ConfigOpen(String, String),
    ConfigDeser(String, String),
    CardOpen(String, String),
    CardDeser(String, String),
    AssetDecode(String, String),
    VipsError(String),
    CairoError(String),
    ImageConversionError(&'static str, &'static str),
    InvalidCString(String),
    FontConfigUnavailable,
    LoadFontError(String),
    PngHeader(String),
    Download(String, String),
}

impl Error {
    pub fn config_open(path: impl AsRef<Path>, e: impl ToString) -> Self {
        Self::ConfigOpen(path.as_ref().display().to_string(), e.to_string())
    }

    pub fn config_deser(path: impl AsRef<Path>, e: impl ToString) -> Self {
        Self::ConfigDeser(path.as_ref().display().to_string(), e.to_string())
    }

    pub fn card_open(path: impl AsRef<Path>, e: impl ToString) -> Self {
        Self::CardOpen(path.as_ref().display().to_string(), e.to_string())
    }

    pub fn card_deser(path: impl AsRef<Path>, e: impl ToString) -> Self {
        Self::CardDeser(path.as_ref().display().to_string(), e.to_string())
    }

    pub fn asset_decode(path: impl AsRef<Path>, e: impl ToString) -> Self {
        Self::AssetDecode(path.as_ref().display().to_string(), e.to_string())
    }

    pub fn cairo(e: impl ToString) -> Self {
        Self::CairoError(e.to_string())
    }

    pub fn download(filename: impl ToString, e: impl ToString) -> Self {
        Self::Download(filename.to_string(), e.to_string())
    }
}

impl From<cairo::Error> for Error {
    fn from(e: cairo::Error) -> Self {
        Self::cairo(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ConfigOpen(path, e) => write!(f, "failed to open config {path}: {e}"),
            Error::ConfigDeser(path, e) => write!(f, "failed to read config {path}: {e}"),
            Error::CardOpen(path, e) => write!(f, "failed to open card data {path}: {e}"),
            Error::CardDeser(path, e) => write!(f, "failed to read card data {path}: {e}"),
            Error::AssetDecode(path, e) => write!(f, "failed to decode asset {path}: {e}"),
            Error::VipsError(e) => write!(f, "libvips error: {e}"),
            Error::CairoError(e) => write!(f, "cairo error: {e}"),
            Error::ImageConversionError(from, to) => {
                write!(f, "failed to convert image from {from} to {to}")
            }
            Error::InvalidCString(s) => write!(f, "invalid C string: {s:?}"),
            Error::FontConfigUnavailable => write!(f, "fontconfig could not be initialized"),
            Error::LoadFontError(path) => write!(f, "failed to load font {path}"),
            Error::PngHeader(e) => write!(f, "invalid PNG data: {e}"),
            Error::Download(name, e) => write!(f, "failed to save {name}: {e}"),
        }
    }
}

impl std::error::Error for Error {}
