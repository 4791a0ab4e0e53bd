use std::time::Duration;

use crate::config::hero::HeroConfig;
use crate::foundation::core::Size;
use crate::foundation::error::{HeroError, HeroResult};
use crate::hero::view::{FrameView, HeroEvent, HeroView, MainMediaView};
use crate::morph::region::ScrollLayout;
use crate::morph::scroll::ScrollMorph;
use crate::morph::shape::FrameShape;
use crate::playlist::asset::VideoId;
use crate::playlist::state::{MainLoad, PlaylistState};
use crate::transition::animator::{TickOutcome, TransitionAnimator, TransitionState};

/// Hero section controller.
///
/// Routes inbound UI signals to the playlist state machine, the transition animator and the
/// scroll morph, and exposes the combined render contract through [`Hero::view`]. The animator's
/// completion hook inside [`Hero::tick`] is the only place the playlist advances.
#[derive(Clone, Debug)]
pub struct Hero {
    playlist: PlaylistState,
    animator: TransitionAnimator,
    morph: ScrollMorph,
    viewport: Size,
    frame: FrameShape,
    events: Vec<HeroEvent>,
}

impl Hero {
    /// Build a controller from validated config and the initial viewport size.
    pub fn new(config: HeroConfig, viewport: Size) -> HeroResult<Self> {
        config.validate()?;
        check_viewport(viewport)?;
        let morph = ScrollMorph::new(config.morph)?;
        let frame = morph.update(0.0);
        Ok(Self {
            playlist: PlaylistState::new(config.playlist),
            animator: TransitionAnimator::new(&config.transition)?,
            morph,
            viewport,
            frame,
            events: Vec::new(),
        })
    }

    /// Playlist state (read-only).
    pub fn playlist(&self) -> &PlaylistState {
        &self.playlist
    }

    /// Transition state.
    pub fn transition_state(&self) -> TransitionState {
        self.animator.state()
    }

    /// Current viewport size.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Update the viewport size used to resolve the overlay's full-coverage footprint.
    pub fn set_viewport(&mut self, viewport: Size) -> HeroResult<()> {
        check_viewport(viewport)?;
        self.viewport = viewport;
        Ok(())
    }

    /// Pointer entered the preview region: open the secondary gate.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn pointer_entered_preview(&mut self) {
        if self.playlist.prepare_secondary() {
            let next = self.playlist.next().id;
            tracing::debug!(%next, "secondary assets requested");
            self.events.push(HeroEvent::FetchSecondary { next });
        }
    }

    /// Preview region clicked. Returns `true` if a transition started.
    ///
    /// Ignored until secondary assets are ready, and while a transition is in flight.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn preview_clicked(&mut self) -> bool {
        if !self.playlist.secondary_ready() {
            tracing::debug!("preview not mounted yet; ignoring click");
            return false;
        }
        if !self.animator.trigger() {
            return false;
        }
        self.events.push(HeroEvent::OverlayStarted {
            asset: self.playlist.next().id,
        });
        true
    }

    /// The current main clip finished its initial load.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn main_media_loaded(&mut self) {
        self.playlist.report_main_loaded();
    }

    /// Clip `id` finished its initial load; stale reports are ignored.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn main_media_loaded_for(&mut self, id: VideoId) -> bool {
        self.playlist.report_loaded(id)
    }

    /// The current main clip failed to load.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn main_media_failed(&mut self, reason: &str) {
        tracing::warn!(current = %self.playlist.current().id, reason, "main clip failed to load");
        self.playlist.report_main_failed(reason);
    }

    /// Retry a failed main clip. Returns `false` if nothing had failed.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn retry_main_media(&mut self) -> bool {
        self.playlist.retry_main()
    }

    /// Scrub the frame morph to normalized `progress`.
    pub fn set_scroll_progress(&mut self, progress: f64) {
        self.frame = self.morph.sample(progress);
    }

    /// Scrub the frame morph from raw scroll measurements.
    pub fn scroll_to(&mut self, layout: &ScrollLayout) {
        self.frame = self.morph.at_scroll(layout);
    }

    /// Advance the animation clock by one frame of length `dt`.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn tick(&mut self, dt: Duration) -> TickOutcome {
        let playlist = &mut self.playlist;
        let events = &mut self.events;
        self.animator.tick(dt, || {
            let (from, to) = playlist.advance();
            tracing::info!(%from, %to, "playlist advanced");
            events.push(HeroEvent::Advanced { from, to });
        })
    }

    /// Take all events queued since the last call.
    pub fn drain_events(&mut self) -> Vec<HeroEvent> {
        std::mem::take(&mut self.events)
    }

    /// Snapshot of the render contract.
    pub fn view(&self) -> HeroView {
        let current = self.playlist.current();
        let secondary_ready = self.playlist.secondary_ready();
        HeroView {
            main: MainMediaView {
                id: current.id,
                source: current.source.clone(),
                poster: current.poster.clone(),
            },
            next_source: self.playlist.next().source.clone(),
            show_loader: *self.playlist.main_load() == MainLoad::Loading,
            show_retry: matches!(self.playlist.main_load(), MainLoad::Failed(_)),
            secondary_ready,
            preview_enabled: secondary_ready,
            transition: self.animator.state(),
            overlay: self.animator.overlay(self.viewport),
            frame: FrameView::from(self.frame),
        }
    }
}

fn check_viewport(viewport: Size) -> HeroResult<()> {
    let ok = viewport.width.is_finite()
        && viewport.height.is_finite()
        && viewport.width > 0.0
        && viewport.height > 0.0;
    if !ok {
        return Err(HeroError::validation(format!(
            "viewport must be positive and finite, got {}x{}",
            viewport.width, viewport.height
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/hero/controller.rs"]
mod tests;
