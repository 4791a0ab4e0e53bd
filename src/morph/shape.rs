use std::fmt::Write as _;

use crate::animation::lerp::Lerp;
use crate::foundation::core::{Point, ensure_finite};
use crate::foundation::error::{HeroError, HeroResult};

/// Clip boundary and corner rounding of the video frame.
///
/// Polygon vertices and radii are percentages of the frame box. Radii are ordered
/// top-left, top-right, bottom-right, bottom-left.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameShape {
    /// Clip polygon vertices, clockwise from top-left.
    pub polygon: [Point; 4],
    /// Corner radii in percent.
    pub radii: [f64; 4],
}

impl FrameShape {
    /// The untouched frame: full rectangle, square corners.
    pub fn full_rect() -> Self {
        Self {
            polygon: [
                Point::new(0.0, 0.0),
                Point::new(100.0, 0.0),
                Point::new(100.0, 100.0),
                Point::new(0.0, 100.0),
            ],
            radii: [0.0; 4],
        }
    }

    /// The fully scrolled frame: skewed quad with a rounded bottom edge.
    pub fn skewed() -> Self {
        Self {
            polygon: [
                Point::new(14.0, 0.0),
                Point::new(72.0, 0.0),
                Point::new(90.0, 90.0),
                Point::new(0.0, 100.0),
            ],
            radii: [0.0, 0.0, 40.0, 10.0],
        }
    }

    /// Reject non-finite coordinates or negative radii.
    pub fn validate(&self) -> HeroResult<()> {
        let coords: Vec<f64> = self.polygon.iter().flat_map(|p| [p.x, p.y]).collect();
        ensure_finite("frame shape polygon", &coords)?;
        ensure_finite("frame shape radii", &self.radii)?;
        if self.radii.iter().any(|r| *r < 0.0) {
            return Err(HeroError::validation("frame shape radii must be >= 0"));
        }
        Ok(())
    }

    /// CSS `clip-path` value, e.g. `polygon(14% 0%, 72% 0%, 90% 90%, 0% 100%)`.
    pub fn clip_path_css(&self) -> String {
        let mut out = String::from("polygon(");
        for (i, p) in self.polygon.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{} {}", pct(p.x), pct(p.y));
        }
        out.push(')');
        out
    }

    /// CSS `border-radius` value, e.g. `0% 0% 40% 10%`.
    pub fn border_radius_css(&self) -> String {
        self.radii.iter().map(|r| pct(*r)).collect::<Vec<_>>().join(" ")
    }
}

impl Lerp for FrameShape {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            polygon: <[Point; 4]>::lerp(&a.polygon, &b.polygon, t),
            radii: <[f64; 4]>::lerp(&a.radii, &b.radii, t),
        }
    }
}

fn pct(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    // "-0" shows up for tiny negative rounding noise.
    let s = if s == "-0" { "0" } else { s };
    format!("{s}%")
}

#[cfg(test)]
#[path = "../../tests/unit/morph/shape.rs"]
mod tests;
