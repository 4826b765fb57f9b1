//! Fonts used by text slots.

mod font;

pub use font::FontMap;
