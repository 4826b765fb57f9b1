//! Paints asset rasters: the card template and the hand-drawn marks.

use crate::error::Result;
use crate::layer::{Layer, RenderContext};
use crate::scene::ImageCommand;

use cairo::Context;

impl Layer for ImageCommand {
    fn render(&self, cr: &Context, ctx: &RenderContext) -> Result<()> {
        // pending assets leave their layer empty
        let Some(raster) = ctx.assets.raster(self.asset) else {
            return Ok(());
        };
        if self.opacity <= 0.0 {
            return Ok(());
        }
        cr.save()?;
        cr.translate(self.x, self.y);
        cr.rotate(self.rotation.to_radians());
        cr.scale(self.scale, self.scale);
        cr.set_source_surface(raster.surface(), 0.0, 0.0)?;
        cr.paint_with_alpha(self.opacity)?;
        cr.restore()?;
        Ok(())
    }
}
