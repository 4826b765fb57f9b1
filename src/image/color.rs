//! Color values used by text slots.

use std::fmt;

/// An 8-bit RGBA color.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::hex(0x000000);

    /// Builds an opaque color from a `0xRRGGBB` literal.
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: (rgb >> 16) as u8,
            g: (rgb >> 8) as u8,
            b: rgb as u8,
            a: 0xFF,
        }
    }

    /// Channels scaled to `0.0..=1.0`, as cairo expects them.
    pub fn rgba(&self) -> (f64, f64, f64, f64) {
        let c = |x: u8| x as f64 / 255.0;
        (c(self.r), c(self.g), c(self.b), c(self.a))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { r, g, b, a } = *self;
        if a == 0xFF {
            write!(f, "#{r:02x}{g:02x}{b:02x}")
        } else {
            write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_splits_channels() {
        let c = Color::hex(0x5c4c42);
        assert_eq!((c.r, c.g, c.b, c.a), (0x5c, 0x4c, 0x42, 0xff));
        assert_eq!(c.to_string(), "#5c4c42");
    }

    #[test]
    fn rgba_is_normalized() {
        let (r, g, b, a) = Color::hex(0xff0000).rgba();
        assert_eq!((r, g, b, a), (1.0, 0.0, 0.0, 1.0));
    }
}
