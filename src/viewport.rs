//! Maps the scene onto the width the card is displayed at.

use crate::layout::{SCENE_HEIGHT, SCENE_WIDTH};
use crate::stage::StageGeometry;

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Viewport {
    container_width: f64,
}

impl Viewport {
    /// Negative or non-finite widths count as unmeasured.
    pub fn new(container_width: f64) -> Self {
        let container_width = if container_width.is_finite() {
            container_width.max(0.0)
        } else {
            0.0
        };
        Self { container_width }
    }

    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    pub fn scale(&self) -> f64 {
        self.container_width / SCENE_WIDTH
    }

    pub fn height(&self) -> f64 {
        SCENE_HEIGHT * self.scale()
    }

    /// Surface size and scale for interactive display.
    pub fn geometry(&self) -> StageGeometry {
        StageGeometry {
            width: self.container_width.round() as i32,
            height: self.height().round() as i32,
            scale: self.scale(),
        }
    }
}

/// Holds the viewport measured when the container first became measurable.
///
/// Later measurements are ignored, so the card keeps its initial scale even
/// if the container is resized afterwards.
#[derive(Debug, Default)]
pub struct ViewportScaler {
    viewport: Option<Viewport>,
}

impl ViewportScaler {
    /// Records the first measurement and returns it; returns `None` afterwards.
    pub fn measure(&mut self, container_width: f64) -> Option<Viewport> {
        if self.viewport.is_some() {
            return None;
        }
        let viewport = Viewport::new(container_width);
        self.viewport = Some(viewport);
        Some(viewport)
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Zero until a measurement arrives.
    pub fn scale(&self) -> f64 {
        self.viewport.map(|v| v.scale()).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_width() {
        let v = Viewport::new(960.0);
        assert_eq!(v.scale(), 0.5);
        assert_eq!(v.height(), 540.0);
        assert_eq!(
            v.geometry(),
            StageGeometry {
                width: 960,
                height: 540,
                scale: 0.5
            }
        );
    }

    #[test]
    fn unmeasured_is_zero() {
        let v = Viewport::new(0.0);
        assert_eq!(v.scale(), 0.0);
        assert_eq!(v.height(), 0.0);
        assert_eq!(Viewport::new(-3.0).scale(), 0.0);
        assert_eq!(Viewport::new(f64::NAN).scale(), 0.0);
        assert_eq!(ViewportScaler::default().scale(), 0.0);
    }

    #[test]
    fn full_width_is_native() {
        assert_eq!(Viewport::new(1920.0).geometry(), StageGeometry::native());
    }

    #[test]
    fn measured_once() {
        let mut scaler = ViewportScaler::default();
        assert_eq!(scaler.measure(480.0), Some(Viewport::new(480.0)));
        assert_eq!(scaler.measure(1920.0), None);
        assert_eq!(scaler.scale(), 0.25);
        assert_eq!(scaler.viewport().map(|v| v.height()), Some(270.0));
    }
}
