use crate::animation::ease::Ease;
use crate::animation::lerp::Lerp;
use crate::foundation::error::HeroResult;
use crate::morph::region::{ScrollLayout, ScrollRegion};
use crate::morph::shape::FrameShape;

/// Shapes and scroll region for the frame morph.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MorphConfig {
    /// Shape at progress 0.
    pub from: FrameShape,
    /// Shape at progress 1.
    pub to: FrameShape,
    /// Curve applied to scroll progress before interpolation.
    pub ease: Ease,
    /// Scroll range that drives the morph.
    pub region: ScrollRegion,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            from: FrameShape::full_rect(),
            to: FrameShape::skewed(),
            ease: Ease::InOutQuad,
            region: ScrollRegion::default(),
        }
    }
}

impl MorphConfig {
    /// Validate both endpoint shapes.
    pub fn validate(&self) -> HeroResult<()> {
        self.from.validate()?;
        self.to.validate()
    }
}

/// Stateless mapping from scroll progress to frame shape.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollMorph {
    config: MorphConfig,
}

impl ScrollMorph {
    /// Build a morph from validated config.
    pub fn new(config: MorphConfig) -> HeroResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use.
    pub fn config(&self) -> &MorphConfig {
        &self.config
    }

    /// Shape at `progress`, interpolated linearly per control value.
    ///
    /// Progress is clamped to `[0, 1]`; NaN maps to 0.
    pub fn update(&self, progress: f64) -> FrameShape {
        let t = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        FrameShape::lerp(&self.config.from, &self.config.to, t)
    }

    /// Shape at `progress` after applying the configured ease.
    pub fn sample(&self, progress: f64) -> FrameShape {
        let p = if progress.is_nan() { 0.0 } else { progress };
        self.update(self.config.ease.apply(p))
    }

    /// Shape for a raw scroll position, resolved through the configured region.
    pub fn at_scroll(&self, layout: &ScrollLayout) -> FrameShape {
        self.sample(self.config.region.progress(layout))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/morph/scroll.rs"]
mod tests;
