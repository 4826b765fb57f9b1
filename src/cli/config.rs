//! Configuration file for the command line front end.

use crate::clock::DateStyle;
use crate::error::{Error, Result};
use crate::image::AssetKey;

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub assets: AssetsConfig,
    pub font: Option<FontConfig>,
    pub output: OutputConfig,
    pub date: DateConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct AssetsConfig {
    pub root: PathBuf,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("public"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FontConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct OutputConfig {
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct DateConfig {
    pub style: DateStyle,
}

impl Config {
    pub const DEFAULT_PATH: &'static str = "./gamecard.toml";

    /// Opens the given file, or `./gamecard.toml` when it exists, or falls
    /// back to defaults relative to the current folder.
    pub fn find(path: Option<&Path>) -> Result<(PathBuf, Self)> {
        match path {
            Some(path) => Self::open(path),
            None => {
                let path = Path::new(Self::DEFAULT_PATH);
                if path.exists() {
                    Self::open(path)
                } else {
                    Ok((PathBuf::from("."), Self::default()))
                }
            }
        }
    }

    /// Reads a config file. Returns the folder relative paths are based on.
    pub fn open(path: impl AsRef<Path>) -> Result<(PathBuf, Self)> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::config_open(path, e))?;
        let config: Self = toml::from_str(&content).map_err(|e| Error::config_deser(path, e))?;
        let folder = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok((folder, config))
    }

    fn prefix(folder: &Path, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            folder.join(path)
        }
    }

    pub fn asset_path(&self, folder: &Path, key: AssetKey) -> PathBuf {
        let root = Self::prefix(folder, &self.assets.root);
        root.join(key.path().trim_start_matches('/'))
    }

    pub fn font_path(&self, folder: &Path) -> Option<PathBuf> {
        self.font.as_ref().map(|f| Self::prefix(folder, &f.path))
    }

    pub fn output_dir(&self, folder: &Path) -> PathBuf {
        Self::prefix(folder, &self.output.dir)
    }
}
