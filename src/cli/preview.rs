//! Writes the frames a card presents to a PNG file.

use crate::logs::{LogEvent, LogSink, TermLog};
use crate::stage::{StageGeometry, Viewer};

use cairo::ImageSurface;
use std::fs::File;
use std::io::Stderr;
use std::path::PathBuf;

pub struct PreviewViewer {
    path: PathBuf,
    log: TermLog<Stderr>,
}

impl PreviewViewer {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            log: TermLog::new_stderr(),
        }
    }
}

impl Viewer for PreviewViewer {
    fn present(&mut self, geometry: StageGeometry, surface: &ImageSurface) {
        if geometry.width == 0 || geometry.height == 0 {
            return;
        }
        let written = File::create(&self.path)
            .map_err(|e| e.to_string())
            .and_then(|mut file| surface.write_to_png(&mut file).map_err(|e| e.to_string()));
        if let Err(e) = written {
            let path = self.path.display();
            self.log
                .log(LogEvent::Warn(format!("could not write preview {path}: {e}")));
        }
    }
}
