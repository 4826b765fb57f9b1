//! Native resolution export of a card.
//!
//! Exporting walks the stage through a short sequence: enter (resize to the
//! scene size at scale 1), capture (encode the raster as PNG), exit (restore
//! the interactive size and scale and redraw) and deliver (hand the PNG to a
//! [`Download`]). Enter, capture and exit happen inside a single call that
//! holds the stage exclusively, so no viewer ever sees the native frame.

use crate::error::{Error, Result};
use crate::layer::RenderContext;
use crate::scene::Scene;
use crate::stage::{Stage, StageGeometry};

use base64::Engine;
use std::fmt;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

/// Name every exported card is saved under.
pub const DOWNLOAD_FILENAME: &str = "splatoon3-game-card.png";

/// A PNG encoded capture.
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedImage(Vec<u8>);

impl EncodedImage {
    pub fn bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn data_uri(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.0);
        format!("data:image/png;base64,{encoded}")
    }

    /// Reads width and height back from the PNG header.
    pub fn dimensions(&self) -> Result<(u32, u32)> {
        let decoder = png::Decoder::new(Cursor::new(&self.0));
        let reader = decoder
            .read_info()
            .map_err(|e| Error::PngHeader(e.to_string()))?;
        let info = reader.info();
        Ok((info.width, info.height))
    }
}

impl fmt::Debug for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedImage({} bytes)", self.0.len())
    }
}

/// Where exported images end up.
pub trait Download {
    fn save(&mut self, filename: &str, image: &EncodedImage) -> Result<()>;
}

/// Saves into a directory through a temporary `.part` file that is renamed
/// into place, so a half written card never carries the final name.
#[derive(Debug, Clone)]
pub struct DirectoryDownload {
    dir: PathBuf,
}

impl DirectoryDownload {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Download for DirectoryDownload {
    fn save(&mut self, filename: &str, image: &EncodedImage) -> Result<()> {
        let target = self.dir.join(filename);
        let part = self.dir.join(format!(".{filename}.part"));
        fs::write(&part, image.bytes()).map_err(|e| Error::download(filename, e))?;
        fs::rename(&part, &target).map_err(|e| {
            let _ = fs::remove_file(&part);
            Error::download(filename, e)
        })
    }
}

pub struct ExportPipeline<'a> {
    stage: &'a mut Stage,
    scene: &'a Scene,
    ctx: &'a RenderContext<'a>,
}

impl<'a> ExportPipeline<'a> {
    pub fn new(stage: &'a mut Stage, scene: &'a Scene, ctx: &'a RenderContext<'a>) -> Self {
        Self { stage, scene, ctx }
    }

    /// Captures the scene at native resolution and delivers it.
    pub fn run(self, download: &mut dyn Download) -> Result<EncodedImage> {
        let image = self.snapshot()?;
        download.save(DOWNLOAD_FILENAME, &image)?;
        Ok(image)
    }

    /// Captures the scene at native resolution, leaving the stage as it was.
    pub fn snapshot(mut self) -> Result<EncodedImage> {
        let interactive = self.stage.geometry();
        self.enter()?;
        let captured = self.capture();
        self.exit(interactive)?;
        captured
    }

    fn enter(&mut self) -> Result<()> {
        self.stage.set_geometry(StageGeometry::native())
    }

    fn capture(&mut self) -> Result<EncodedImage> {
        self.stage.draw(self.scene, self.ctx)?;
        self.stage.to_png().map(EncodedImage)
    }

    fn exit(&mut self, interactive: StageGeometry) -> Result<()> {
        self.stage.set_geometry(interactive)?;
        self.stage.draw(self.scene, self.ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::AssetSet;

    fn stage(width: i32) -> Stage {
        let scale = width as f64 / 1920.0;
        Stage::new(StageGeometry {
            width,
            height: (1080.0 * scale).round() as i32,
            scale,
        })
        .unwrap()
    }

    #[test]
    fn snapshot_is_native_and_restores() {
        let assets = AssetSet::default();
        let ctx = RenderContext { assets: &assets };
        let scene = Scene::default();
        for width in [480, 960, 1920] {
            let mut stage = stage(width);
            let before = stage.geometry();
            let image = ExportPipeline::new(&mut stage, &scene, &ctx)
                .snapshot()
                .unwrap();
            assert_eq!(image.dimensions().unwrap(), (1920, 1080));
            assert_eq!(stage.geometry(), before);
            assert_eq!(stage.surface().width(), width);
        }
    }

    #[test]
    fn data_uri_prefix() {
        let image = EncodedImage(vec![0x89, b'P', b'N', b'G']);
        assert_eq!(image.data_uri(), "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn directory_download_leaves_no_part_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut download = DirectoryDownload::new(dir.path());
        let image = EncodedImage(b"card".to_vec());
        download.save(DOWNLOAD_FILENAME, &image).unwrap();
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec![DOWNLOAD_FILENAME.to_string()]);
        assert_eq!(fs::read(dir.path().join(DOWNLOAD_FILENAME)).unwrap(), b"card");
    }

    #[test]
    fn directory_download_reports_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut download = DirectoryDownload::new(dir.path().join("missing"));
        let res = download.save(DOWNLOAD_FILENAME, &EncodedImage(Vec::new()));
        assert!(matches!(res, Err(Error::Download(_, _))));
    }
}
