//! Reading card data files.

use crate::data::CardData;
use crate::error::{Error, Result};

use std::fs;
use std::path::Path;

pub fn read_card(path: impl AsRef<Path>) -> Result<CardData> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::card_open(path, e))?;
    toml::from_str(&content).map_err(|e| Error::card_deser(path, e))
}
