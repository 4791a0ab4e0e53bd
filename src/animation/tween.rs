use std::time::Duration;

use crate::animation::ease::Ease;
use crate::animation::lerp::Lerp;
use crate::foundation::error::{HeroError, HeroResult};

/// Time-based interpolation between two values over a fixed duration.
#[derive(Clone, Debug)]
pub struct Tween<T> {
    /// Value at `elapsed == 0`.
    pub from: T,
    /// Value at `elapsed >= duration`.
    pub to: T,
    duration: Duration,
    /// Curve applied to normalized time.
    pub ease: Ease,
}

impl<T> Tween<T>
where
    T: Lerp + Clone,
{
    /// Create a tween; `duration` must be non-zero.
    pub fn new(from: T, to: T, duration: Duration, ease: Ease) -> HeroResult<Self> {
        if duration.is_zero() {
            return Err(HeroError::animation("tween duration must be > 0"));
        }
        Ok(Self {
            from,
            to,
            duration,
            ease,
        })
    }

    /// Total duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Linear time progress in `[0, 1]`.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Return `true` once `elapsed` has reached the full duration.
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    /// Sample the eased value at `elapsed`.
    pub fn sample(&self, elapsed: Duration) -> T {
        if self.is_finished(elapsed) {
            return self.to.clone();
        }
        let te = self.ease.apply(self.progress(elapsed));
        T::lerp(&self.from, &self.to, te)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
