//! Lays out slot text with pango.
//!
//! Boxed slots wrap at the box width, align horizontally inside it and are
//! clipped to it; the vertical alignment places the whole laid out block.
//! Unboxed slots are a single run starting at the slot position.

use crate::error::Result;
use crate::layer::{Layer, RenderContext};
use crate::layout::{HAlign, VAlign};
use crate::scene::TextCommand;

use cairo::Context;

impl TextCommand {
    fn layout(&self, cr: &Context) -> pango::Layout {
        let slot = self.slot;
        let layout = pangocairo::functions::create_layout(cr);
        let mut desc = pango::FontDescription::new();
        desc.set_family(slot.font_family);
        desc.set_absolute_size(slot.font_size * pango::SCALE as f64);
        layout.set_font_description(Some(&desc));
        if let Some((w, _)) = slot.size {
            layout.set_width((w * pango::SCALE as f64) as i32);
            layout.set_wrap(pango::WrapMode::WordChar);
            layout.set_alignment(match slot.align {
                HAlign::Left => pango::Alignment::Left,
                HAlign::Center => pango::Alignment::Center,
                HAlign::Right => pango::Alignment::Right,
            });
        }
        layout.set_text(&self.content);
        layout
    }

    fn offset_y(&self, layout: &pango::Layout) -> f64 {
        let Some((_, h)) = self.slot.size else {
            return 0.0;
        };
        let (_, logical) = layout.pixel_extents();
        let free = h - logical.height() as f64;
        match self.slot.valign {
            VAlign::Top => 0.0,
            VAlign::Middle => free / 2.0,
            VAlign::Bottom => free,
        }
    }
}

impl Layer for TextCommand {
    fn render(&self, cr: &Context, _ctx: &RenderContext) -> Result<()> {
        if self.content.is_empty() {
            return Ok(());
        }
        let slot = self.slot;
        let layout = self.layout(cr);
        let dy = self.offset_y(&layout);

        cr.save()?;
        if let Some((w, h)) = slot.size {
            cr.rectangle(slot.x, slot.y, w, h);
            cr.clip();
        }
        let (r, g, b, a) = slot.color.rgba();
        cr.set_source_rgba(r, g, b, a);
        cr.move_to(slot.x, slot.y + dy);
        pangocairo::functions::show_layout(cr, &layout);
        cr.restore()?;
        Ok(())
    }
}
