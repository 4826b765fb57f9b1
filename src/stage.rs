//! The surface a card is drawn on, and whoever looks at it.

use crate::error::{Error, Result};
use crate::layer::RenderContext;
use crate::layout::{SCENE_HEIGHT, SCENE_WIDTH};
use crate::scene::Scene;

use cairo::{Context, Format, ImageSurface, Operator};

/// Pixel size of a surface and the scale the scene is drawn at.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StageGeometry {
    pub width: i32,
    pub height: i32,
    pub scale: f64,
}

impl StageGeometry {
    /// The scene at its own resolution.
    pub fn native() -> Self {
        Self {
            width: SCENE_WIDTH as i32,
            height: SCENE_HEIGHT as i32,
            scale: 1.0,
        }
    }
}

/// Receives every frame the card presents for display.
pub trait Viewer {
    fn present(&mut self, geometry: StageGeometry, surface: &ImageSurface);
}

/// Discards frames.
#[derive(Debug, Default)]
pub struct NoViewer;

impl Viewer for NoViewer {
    fn present(&mut self, _geometry: StageGeometry, _surface: &ImageSurface) {}
}

pub struct Stage {
    geometry: StageGeometry,
    surface: ImageSurface,
}

impl Stage {
    pub fn new(geometry: StageGeometry) -> Result<Self> {
        let surface = Self::allocate(geometry)?;
        Ok(Self { geometry, surface })
    }

    fn allocate(geometry: StageGeometry) -> Result<ImageSurface> {
        let surface = ImageSurface::create(
            Format::ARgb32,
            geometry.width.max(0),
            geometry.height.max(0),
        )?;
        Ok(surface)
    }

    pub fn geometry(&self) -> StageGeometry {
        self.geometry
    }

    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    /// Resizes the surface and changes the draw scale. The content is lost
    /// when the size changes.
    pub fn set_geometry(&mut self, geometry: StageGeometry) -> Result<()> {
        let same_size =
            (self.geometry.width, self.geometry.height) == (geometry.width, geometry.height);
        if !same_size {
            self.surface = Self::allocate(geometry)?;
        }
        self.geometry = geometry;
        Ok(())
    }

    /// Clears the surface and paints the scene at the current scale.
    pub fn draw(&mut self, scene: &Scene, ctx: &RenderContext) -> Result<()> {
        {
            let cr = Context::new(&self.surface)?;
            cr.save()?;
            cr.set_operator(Operator::Clear);
            cr.paint()?;
            cr.restore()?;
            let scale = self.geometry.scale;
            // a zero scale would leave the context with a singular matrix
            if scale > 0.0 {
                cr.scale(scale, scale);
                scene.render(&cr, ctx)?;
            }
        }
        self.surface.flush();
        Ok(())
    }

    /// Serializes the current raster as PNG.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.surface
            .write_to_png(&mut buffer)
            .map_err(Error::cairo)?;
        Ok(buffer)
    }
}
