use std::time::Duration;

use crate::animation::ease::Ease;
use crate::animation::lerp::Lerp;
use crate::animation::tween::Tween;
use crate::foundation::core::{Size, ensure_finite};
use crate::foundation::error::{HeroError, HeroResult};
use crate::transition::geometry::{Footprint, OverlayGeometry};

/// Timing and rest geometry of the thumbnail-to-fullscreen transition.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Length of the grow animation in seconds.
    pub duration_secs: f64,
    /// Curve applied to time progress.
    pub ease: Ease,
    /// Side of the square overlay box while at rest, in pixels.
    pub rest_size_px: f64,
    /// Overlay scale while at rest.
    pub rest_scale: f64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_secs: 1.0,
            ease: Ease::InOutCubic,
            rest_size_px: 256.0,
            rest_scale: 0.5,
        }
    }
}

impl TransitionConfig {
    /// Validate numeric ranges.
    pub fn validate(&self) -> HeroResult<()> {
        ensure_finite(
            "transition values",
            &[self.duration_secs, self.rest_size_px, self.rest_scale],
        )?;
        if self.duration_secs <= 0.0 {
            return Err(HeroError::validation("transition.duration_secs must be > 0"));
        }
        if self.rest_size_px < 0.0 {
            return Err(HeroError::validation("transition.rest_size_px must be >= 0"));
        }
        if self.rest_scale < 0.0 {
            return Err(HeroError::validation("transition.rest_scale must be >= 0"));
        }
        Ok(())
    }

    /// Footprint the overlay starts from and is reset to.
    pub fn rest_footprint(&self) -> Footprint {
        Footprint::square(self.rest_size_px, self.rest_scale)
    }
}

/// Whether a transition is in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionState {
    /// Overlay hidden at rest geometry; a trigger may start a transition.
    Idle,
    /// Overlay growing; triggers are ignored.
    Animating,
}

/// Result of advancing the animator by one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// Nothing in flight.
    Idle,
    /// Still animating; carries linear time progress in `[0, 1)`.
    Running(f64),
    /// The transition finished on this tick and the completion hook ran.
    Completed,
}

/// Drives the overlay from thumbnail to full-viewport coverage.
///
/// The animator owns the overlay's transient parameters. It never touches the playlist; the
/// caller passes the completion hook to [`TransitionAnimator::tick`], and it runs exactly once
/// per started transition.
#[derive(Clone, Debug)]
pub struct TransitionAnimator {
    rest: Footprint,
    progress: Tween<f64>,
    state: TransitionState,
    elapsed: Duration,
}

impl TransitionAnimator {
    /// Build an idle animator.
    pub fn new(config: &TransitionConfig) -> HeroResult<Self> {
        config.validate()?;
        let duration = Duration::try_from_secs_f64(config.duration_secs).map_err(|e| {
            HeroError::validation(format!(
                "transition.duration_secs {} is out of range: {e}",
                config.duration_secs
            ))
        })?;
        Ok(Self {
            rest: config.rest_footprint(),
            progress: Tween::new(0.0, 1.0, duration, config.ease)?,
            state: TransitionState::Idle,
            elapsed: Duration::ZERO,
        })
    }

    /// Current state.
    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// Time spent in the current transition (zero while idle).
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Configured transition length.
    pub fn duration(&self) -> Duration {
        self.progress.duration()
    }

    /// Start a transition. Returns `false` (and does nothing) if one is already running.
    pub fn trigger(&mut self) -> bool {
        if self.state == TransitionState::Animating {
            tracing::debug!(elapsed = ?self.elapsed, "transition already in flight");
            return false;
        }
        self.state = TransitionState::Animating;
        self.elapsed = Duration::ZERO;
        true
    }

    /// Advance the animation clock by `dt`. When the transition reaches its end, `on_complete`
    /// runs and the overlay returns to rest; otherwise `on_complete` is dropped uncalled.
    pub fn tick<F: FnOnce()>(&mut self, dt: Duration, on_complete: F) -> TickOutcome {
        if self.state == TransitionState::Idle {
            return TickOutcome::Idle;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        if !self.progress.is_finished(self.elapsed) {
            return TickOutcome::Running(self.progress.progress(self.elapsed));
        }
        on_complete();
        self.reset();
        TickOutcome::Completed
    }

    /// Overlay geometry at this instant, resolved against `viewport`.
    pub fn overlay(&self, viewport: Size) -> OverlayGeometry {
        match self.state {
            TransitionState::Idle => OverlayGeometry {
                footprint: self.rest,
                visible: false,
                playing: false,
            },
            TransitionState::Animating => {
                let t = self.progress.sample(self.elapsed);
                let footprint = Footprint::lerp(&self.rest, &Footprint::cover(viewport), t);
                OverlayGeometry {
                    footprint,
                    visible: true,
                    playing: true,
                }
            }
        }
    }

    fn reset(&mut self) {
        self.state = TransitionState::Idle;
        self.elapsed = Duration::ZERO;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/animator.rs"]
mod tests;
