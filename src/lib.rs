//! # Gamecard
//!
//! Composes a Splatoon 3 game card from a template image, text fields and
//! hand-drawn marks, shows it at whatever width it is given, and exports it as
//! a 1920x1080 PNG.

pub mod card;
#[cfg(feature = "cli")]
pub mod cli;
pub mod clock;
pub mod data;
pub mod error;
pub mod export;
pub mod icon;
pub mod image;
pub mod layer;
pub mod layout;
pub mod logs;
pub mod scene;
pub mod stage;
pub mod text;
pub mod viewport;

pub use card::{ExportTrigger, GameCard};
pub use error::{Error, Result};
