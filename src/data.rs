//! Card input data and its fixed enumerations.

pub mod card;

pub use card::{CardData, PlayRule, VoiceChat};
