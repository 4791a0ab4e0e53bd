use crate::animation::lerp::Lerp;
use crate::foundation::core::Size;

/// Animated footprint of the overlay: uniform scale plus layout box size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Footprint {
    /// Uniform scale applied around the overlay's center.
    pub scale: f64,
    /// Layout box size before scaling.
    pub size: Size,
}

impl Footprint {
    /// Square thumbnail footprint.
    pub fn square(side_px: f64, scale: f64) -> Self {
        Self {
            scale,
            size: Size::new(side_px, side_px),
        }
    }

    /// Full coverage of `viewport` at unit scale.
    pub fn cover(viewport: Size) -> Self {
        Self {
            scale: 1.0,
            size: viewport,
        }
    }

    /// On-screen size after applying `scale`.
    pub fn visual_size(&self) -> Size {
        Size::new(self.size.width * self.scale, self.size.height * self.scale)
    }
}

impl Lerp for Footprint {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            scale: <f64 as Lerp>::lerp(&a.scale, &b.scale, t),
            size: <Size as Lerp>::lerp(&a.size, &b.size, t),
        }
    }
}

/// Everything the render layer needs to draw the transition overlay at one instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OverlayGeometry {
    /// Current footprint, centered in the video frame.
    #[serde(flatten)]
    pub footprint: Footprint,
    /// Whether the overlay is shown.
    pub visible: bool,
    /// Whether the overlay's media should be playing.
    pub playing: bool,
}

#[cfg(test)]
#[path = "../../tests/unit/transition/geometry.rs"]
mod tests;
