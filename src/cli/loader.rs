//! Decodes card assets on worker threads.
//!
//! Each asset gets its own thread; results arrive over a channel in whatever
//! order the decodes finish.

use crate::error::Result;
use crate::image::{self, AssetKey};

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

pub struct AssetLoader {
    rx: Receiver<(AssetKey, Result<Vec<u8>>)>,
    handles: Vec<JoinHandle<()>>,
}

impl AssetLoader {
    /// Starts decoding. An [`ImgBackend`](crate::image::ImgBackend) must be
    /// alive while the loader runs.
    pub fn spawn(assets: impl IntoIterator<Item = (AssetKey, PathBuf)>) -> Self {
        let (tx, rx) = mpsc::channel();
        let handles = assets
            .into_iter()
            .map(|(key, path)| {
                let tx = tx.clone();
                thread::spawn(move || {
                    // the receiver only goes away when the loader is dropped
                    let _ = tx.send((key, image::decode_png(&path)));
                })
            })
            .collect();
        Self { rx, handles }
    }
}

impl Iterator for AssetLoader {
    type Item = (AssetKey, Result<Vec<u8>>);

    fn next(&mut self) -> Option<Self::Item> {
        match self.rx.recv() {
            Ok(item) => Some(item),
            Err(_) => {
                for handle in self.handles.drain(..) {
                    let _ = handle.join();
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::image::ImgBackend;

    #[test]
    fn missing_files_are_reported_per_asset() {
        let _backend = ImgBackend::new().unwrap();
        let loader = AssetLoader::spawn(
            AssetKey::ALL.map(|k| (k, PathBuf::from(format!("/nonexistent/{k}.png")))),
        );
        let mut keys: Vec<_> = loader
            .map(|(key, res)| {
                assert!(matches!(res, Err(Error::AssetDecode(_, _))));
                key
            })
            .collect();
        keys.sort_by_key(|k| AssetKey::ALL.iter().position(|a| a == k));
        assert_eq!(keys, AssetKey::ALL.to_vec());
    }
}
