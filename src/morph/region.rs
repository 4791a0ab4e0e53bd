use std::fmt;
use std::str::FromStr;

use crate::foundation::core::ensure_finite;
use crate::foundation::error::{HeroError, HeroResult};

/// Pairs a point on the element with a point on the viewport; the anchor is reached when the
/// two line up.
///
/// Both positions are fractions of the respective height (0 = top, 1 = bottom). The string
/// form is `"<element> <viewport>"` using `top`, `center`, `bottom` or a percentage.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScrollAnchor {
    /// Fraction of the element's height.
    pub element: f64,
    /// Fraction of the viewport's height.
    pub viewport: f64,
}

impl ScrollAnchor {
    /// Build an anchor from fractions.
    pub fn new(element: f64, viewport: f64) -> Self {
        Self { element, viewport }
    }

    /// Scroll offset at which this anchor is met.
    pub fn scroll_offset(&self, layout: &ScrollLayout) -> f64 {
        layout.element_top + self.element * layout.element_height
            - self.viewport * layout.viewport_height
    }
}

fn parse_edge(word: &str) -> HeroResult<f64> {
    match word {
        "top" => Ok(0.0),
        "center" => Ok(0.5),
        "bottom" => Ok(1.0),
        _ => {
            let Some(num) = word.strip_suffix('%') else {
                return Err(HeroError::validation(format!(
                    "unknown scroll anchor position '{word}'"
                )));
            };
            let v: f64 = num.parse().map_err(|e| {
                HeroError::validation(format!("invalid scroll anchor percentage '{word}': {e}"))
            })?;
            ensure_finite("scroll anchor percentage", &[v])?;
            Ok(v / 100.0)
        }
    }
}

fn format_edge(v: f64) -> String {
    if v == 0.0 {
        "top".to_string()
    } else if v == 0.5 {
        "center".to_string()
    } else if v == 1.0 {
        "bottom".to_string()
    } else {
        format!("{}%", v * 100.0)
    }
}

impl FromStr for ScrollAnchor {
    type Err = HeroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let (Some(element), Some(viewport), None) = (words.next(), words.next(), words.next())
        else {
            return Err(HeroError::validation(format!(
                "scroll anchor '{s}' must have exactly two positions"
            )));
        };
        Ok(Self {
            element: parse_edge(&element.to_ascii_lowercase())?,
            viewport: parse_edge(&viewport.to_ascii_lowercase())?,
        })
    }
}

impl TryFrom<String> for ScrollAnchor {
    type Error = HeroError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for ScrollAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            format_edge(self.element),
            format_edge(self.viewport)
        )
    }
}

impl From<ScrollAnchor> for String {
    fn from(a: ScrollAnchor) -> Self {
        a.to_string()
    }
}

/// Document-space measurements needed to resolve scroll progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollLayout {
    /// Element top relative to the document.
    pub element_top: f64,
    /// Element height.
    pub element_height: f64,
    /// Viewport height.
    pub viewport_height: f64,
    /// Current vertical scroll offset.
    pub scroll_y: f64,
}

/// Scroll range over which the frame morph is scrubbed.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollRegion {
    /// Anchor where progress is 0.
    pub start: ScrollAnchor,
    /// Anchor where progress is 1.
    pub end: ScrollAnchor,
}

impl Default for ScrollRegion {
    fn default() -> Self {
        Self {
            start: ScrollAnchor::new(0.5, 0.5),
            end: ScrollAnchor::new(1.0, 0.5),
        }
    }
}

impl ScrollRegion {
    /// Fraction of the region traversed at `layout.scroll_y`, clamped to `[0, 1]`.
    pub fn progress(&self, layout: &ScrollLayout) -> f64 {
        let start = self.start.scroll_offset(layout);
        let end = self.end.scroll_offset(layout);
        let span = end - start;
        if !span.is_finite() || span.abs() < f64::EPSILON {
            return if layout.scroll_y >= start { 1.0 } else { 0.0 };
        }
        let p = (layout.scroll_y - start) / span;
        if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/morph/region.rs"]
mod tests;
