//! Image values and the libvips decoder used to turn asset files into rasters.

mod asset;
mod color;

use crate::error::{Error, Result};
pub use crate::image::asset::{Asset, AssetKey, AssetSet, Raster};
pub use crate::image::color::Color;

use libvips::{ops, VipsApp, VipsImage};
use std::path::Path;

/// Keeps libvips initialized for as long as assets are being decoded.
pub struct ImgBackend {
    // libvips shuts down when this is dropped
    _vips_app: VipsApp,
}

impl ImgBackend {
    pub fn new() -> Result<Self> {
        Ok(Self {
            _vips_app: VipsApp::default("gamecard").map_err(|e| Error::VipsError(e.to_string()))?,
        })
    }

    /// Opens an asset file of any format libvips understands.
    pub fn open(&self, fp: impl AsRef<Path>) -> Result<Raster> {
        let bytes = decode_png(fp)?;
        Raster::from_png(&bytes)
    }
}

/// Decodes an image file into PNG bytes with four sRGB bands.
///
/// Only needs libvips to be initialized, so it can run on any thread while an
/// [`ImgBackend`] is alive.
pub fn decode_png(fp: impl AsRef<Path>) -> Result<Vec<u8>> {
    let fp = fp.as_ref();
    let err = |e: libvips::error::Error| Error::asset_decode(fp, e);
    let img = VipsImage::new_from_file(&fp.to_string_lossy()).map_err(err)?;
    let img = reinterpret(&img).map_err(err)?;
    img.image_write_to_buffer(".png").map_err(err)
}

fn reinterpret(img: &VipsImage) -> std::result::Result<VipsImage, libvips::error::Error> {
    let img = ops::cast(img, ops::BandFormat::Uchar)?;
    let img = ops::copy_with_opts(
        &img,
        &ops::CopyOptions {
            interpretation: ops::Interpretation::Srgb,
            width: img.get_width(),
            height: img.get_height(),
            bands: img.get_bands(),
            format: ops::BandFormat::Uchar,
            ..Default::default()
        },
    )?;
    if img.get_bands() == 3 {
        ops::bandjoin_const(&img, &mut [255.0])
    } else {
        Ok(img)
    }
}
