//! Rasterizes scene draw layers onto a cairo context.

mod image;
mod text;

use crate::error::Result;
use crate::image::AssetSet;
use crate::scene::{DrawLayer, Scene};

use cairo::Context;
use core::fmt::Debug;

pub struct RenderContext<'a> {
    pub assets: &'a AssetSet,
}

/// Something that can paint itself in scene coordinates.
pub trait Layer: Debug {
    fn render(&self, cr: &Context, ctx: &RenderContext) -> Result<()>;
}

impl Layer for DrawLayer {
    fn render(&self, cr: &Context, ctx: &RenderContext) -> Result<()> {
        match self {
            DrawLayer::Image(layer) => layer.render(cr, ctx),
            DrawLayer::Text(layer) => layer.render(cr, ctx),
        }
    }
}

impl Scene {
    /// Paints every layer in order, bottom first.
    pub fn render(&self, cr: &Context, ctx: &RenderContext) -> Result<()> {
        for layer in self.layers() {
            layer.render(cr, ctx)?;
        }
        Ok(())
    }
}
