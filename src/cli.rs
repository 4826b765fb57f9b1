//! CLI implementation.
mod card;
mod config;
mod loader;
mod preview;

pub use crate::cli::card::read_card;
pub use crate::cli::config::Config;
pub use crate::cli::loader::AssetLoader;
pub use crate::cli::preview::PreviewViewer;
use crate::export::DirectoryDownload;
use crate::image::{AssetKey, ImgBackend, Raster};
use crate::logs::{LogEvent, LogSink, TermLog};
use crate::text::FontMap;
use crate::GameCard;

use clap::Parser;
use std::path::PathBuf;

/// Render a Splatoon 3 game card and save it as a PNG
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Card data file (TOML)
    pub card: PathBuf,

    /// Configuration file, `./gamecard.toml` is used when present
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Width of the container the card is displayed in
    #[arg(short, long, default_value_t = 960.0)]
    pub width: f64,

    /// Folder to save the card to, overrides the configuration
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Writes the displayed card to this file as well
    #[arg(long)]
    pub preview: Option<PathBuf>,
}

macro_rules! error {
    ($res:expr) => {
        $res.unwrap_or_else(|e| panic!("{e}"))
    };
}

impl Cli {
    pub fn run() {
        std::panic::set_hook(Box::new(|panic_info| {
            if let Some(s) = panic_info.payload().downcast_ref::<String>() {
                eprintln!("{s}");
            } else {
                eprintln!("{panic_info}");
            }
        }));

        let cli = Self::parse();
        let (folder, config) = error!(Config::find(cli.config.as_deref()));
        let data = error!(read_card(&cli.card));
        let _backend = error!(ImgBackend::new());
        let mut fonts = error!(FontMap::new());
        if let Some(font) = config.font_path(&folder) {
            error!(fonts.load_font_from_file(font));
        }
        let mut log = TermLog::new_stderr();

        let out_dir = cli
            .output
            .clone()
            .unwrap_or_else(|| config.output_dir(&folder));
        let mut card = GameCard::new(data, DirectoryDownload::new(out_dir))
            .with_date_style(config.date.style)
            .with_log(TermLog::new_stderr());
        if let Some(preview) = cli.preview.clone() {
            card = card.with_viewer(PreviewViewer::new(preview));
        }
        let trigger = card
            .mount(cli.width)
            .unwrap_or_else(|| panic!("card stage could not be prepared"));

        let paths = AssetKey::ALL.map(|k| (k, config.asset_path(&folder, k)));
        for (key, bytes) in AssetLoader::spawn(paths) {
            match bytes.and_then(|b| Raster::from_png(&b)) {
                Ok(raster) => card.resolve(key, raster),
                Err(e) => log.log(LogEvent::Warn(e.to_string())),
            }
        }
        for key in card.pending_assets() {
            log.log(LogEvent::Warn(format!(
                "asset `{key}` is missing, its layers stay empty"
            )));
        }

        trigger.call();
    }
}
