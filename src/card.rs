//! A single interactive card.
//!
//! [`GameCard`] owns everything one card needs: its data, its assets, the
//! viewport measured when it was mounted, and the stage it draws on. Every
//! change (mounting, an asset arriving, new data) redraws the stage and
//! presents the frame to the card's [`Viewer`].
//!
//! Exporting is reached only through the [`ExportTrigger`] handed out by
//! [`GameCard::mount`].

use crate::clock::{Clock, DateStyle, SystemClock};
use crate::data::CardData;
use crate::export::{Download, EncodedImage, ExportPipeline, DOWNLOAD_FILENAME};
use crate::image::{AssetKey, AssetSet, Raster};
use crate::layer::RenderContext;
use crate::logs::{LogEvent, LogSink, NoLog};
use crate::scene::Scene;
use crate::stage::{NoViewer, Stage, StageGeometry, Viewer};
use crate::viewport::ViewportScaler;

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

struct CardState {
    data: CardData,
    assets: AssetSet,
    clock: Box<dyn Clock>,
    date_style: DateStyle,
    scaler: ViewportScaler,
    stage: Option<Stage>,
    viewer: Box<dyn Viewer>,
    download: Box<dyn Download>,
    log: Box<dyn LogSink>,
}

impl CardState {
    fn scene(&self) -> Scene {
        let date = self.date_style.format(self.clock.today());
        Scene::compose(&self.data, &date)
    }

    fn render(&mut self) {
        let scene = self.scene();
        let Some(stage) = self.stage.as_mut() else {
            return;
        };
        let ctx = RenderContext {
            assets: &self.assets,
        };
        match stage.draw(&scene, &ctx) {
            Ok(()) => self.viewer.present(stage.geometry(), stage.surface()),
            Err(e) => self.log.log(LogEvent::Warn(format!("render failed: {e}"))),
        }
    }

    fn export(&mut self) -> Option<EncodedImage> {
        let scene = self.scene();
        let stage = self.stage.as_mut()?;
        let ctx = RenderContext {
            assets: &self.assets,
        };
        match ExportPipeline::new(stage, &scene, &ctx).run(self.download.as_mut()) {
            Ok(image) => {
                self.log.log(LogEvent::Done(format!(
                    "exported {DOWNLOAD_FILENAME} ({} bytes)",
                    image.bytes().len()
                )));
                Some(image)
            }
            Err(e) => {
                self.log.log(LogEvent::Warn(format!("export failed: {e}")));
                None
            }
        }
    }
}

pub struct GameCard {
    state: Rc<RefCell<CardState>>,
}

impl GameCard {
    /// Creates an unmounted card. Nothing is drawn until [`GameCard::mount`].
    pub fn new(data: CardData, download: impl Download + 'static) -> Self {
        let state = CardState {
            data,
            assets: AssetSet::default(),
            clock: Box::new(SystemClock),
            date_style: DateStyle::default(),
            scaler: ViewportScaler::default(),
            stage: None,
            viewer: Box::new(NoViewer),
            download: Box::new(download),
            log: Box::new(NoLog),
        };
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    pub fn with_clock(self, clock: impl Clock + 'static) -> Self {
        self.state.borrow_mut().clock = Box::new(clock);
        self
    }

    pub fn with_date_style(self, style: DateStyle) -> Self {
        self.state.borrow_mut().date_style = style;
        self
    }

    pub fn with_viewer(self, viewer: impl Viewer + 'static) -> Self {
        self.state.borrow_mut().viewer = Box::new(viewer);
        self
    }

    pub fn with_log(self, log: impl LogSink + 'static) -> Self {
        self.state.borrow_mut().log = Box::new(log);
        self
    }

    /// Measures the container the card is shown in and readies the stage.
    ///
    /// Only the first call has an effect: it returns the trigger that exports
    /// this card. Later calls, including ones with a different width, return
    /// `None` and leave the scale untouched.
    pub fn mount(&self, container_width: f64) -> Option<ExportTrigger> {
        let mut state = self.state.borrow_mut();
        let viewport = state.scaler.measure(container_width)?;
        match Stage::new(viewport.geometry()) {
            Ok(stage) => state.stage = Some(stage),
            Err(e) => {
                state
                    .log
                    .log(LogEvent::Warn(format!("could not create stage: {e}")));
                return None;
            }
        }
        state.render();
        Some(ExportTrigger {
            card: Rc::downgrade(&self.state),
        })
    }

    /// Makes an asset available and redraws.
    pub fn resolve(&self, key: AssetKey, raster: Raster) {
        let mut state = self.state.borrow_mut();
        state.assets.resolve(key, raster);
        state
            .log
            .log(LogEvent::Info(format!("asset `{key}` available")));
        state.render();
    }

    /// Replaces the card data and redraws.
    pub fn set_data(&self, data: CardData) {
        let mut state = self.state.borrow_mut();
        state.data = data;
        state.render();
    }

    pub fn data(&self) -> CardData {
        self.state.borrow().data.clone()
    }

    /// The scene as it would be drawn right now.
    pub fn scene(&self) -> Scene {
        self.state.borrow().scene()
    }

    /// Current stage geometry, or `None` before mounting.
    pub fn geometry(&self) -> Option<StageGeometry> {
        self.state.borrow().stage.as_ref().map(|s| s.geometry())
    }

    pub fn scale(&self) -> f64 {
        self.state.borrow().scaler.scale()
    }

    pub fn pending_assets(&self) -> Vec<AssetKey> {
        self.state.borrow().assets.pending().collect()
    }
}

impl fmt::Debug for GameCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameCard")
            .field("geometry", &self.geometry())
            .finish()
    }
}

/// Zero argument handle that exports the card it came from.
///
/// The handle does not keep the card alive: once the card is dropped, or
/// while the card is busy, calling it does nothing.
#[derive(Clone)]
pub struct ExportTrigger {
    card: Weak<RefCell<CardState>>,
}

impl ExportTrigger {
    pub fn call(&self) {
        let _ = self.export();
    }

    /// Like [`ExportTrigger::call`], also returning what was delivered.
    pub fn export(&self) -> Option<EncodedImage> {
        let card = self.card.upgrade()?;
        let mut state = card.try_borrow_mut().ok()?;
        state.export()
    }

    pub fn into_fn(self) -> Box<dyn Fn()> {
        Box::new(move || self.call())
    }
}

impl fmt::Debug for ExportTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportTrigger")
            .field("alive", &(self.card.strong_count() > 0))
            .finish()
    }
}
