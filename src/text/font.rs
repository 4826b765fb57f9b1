//! Registration of font files with fontconfig, so pango can find them by family.

use crate::error::{Error, Result};

use fontconfig::Fontconfig;
use fontconfig_sys::fontconfig as sys;
use std::ffi::CString;
use std::path::{Path, PathBuf};

pub struct FontMap {
    _fc: Fontconfig,
    loaded: Vec<PathBuf>,
}

impl FontMap {
    pub fn new() -> Result<Self> {
        let fc = Fontconfig::new().ok_or(Error::FontConfigUnavailable)?;
        Ok(Self {
            _fc: fc,
            loaded: Vec::new(),
        })
    }

    /// Makes the fonts in a file available to every layout created afterwards.
    pub fn load_font_from_file(&mut self, fp: impl AsRef<Path>) -> Result<()> {
        let fp = fp.as_ref();
        if self.loaded.iter().any(|p| p == fp) {
            return Ok(());
        }
        let c_fp = CString::new(fp.to_string_lossy().to_string())
            .map_err(|_| Error::InvalidCString(fp.to_string_lossy().to_string()))?;
        let status = unsafe {
            sys::FcConfigAppFontAddFile(std::ptr::null_mut(), c_fp.as_ptr() as *const sys::FcChar8)
        };
        if status == 0 {
            Err(Error::LoadFontError(fp.display().to_string()))
        } else {
            self.loaded.push(fp.to_path_buf());
            Ok(())
        }
    }

    pub fn loaded(&self) -> &[PathBuf] {
        &self.loaded
    }
}
