use crate::playlist::asset::{Playlist, VideoAsset, VideoId};

/// Load status of the clip currently shown as the main background.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum MainLoad {
    /// Waiting for the first decoded frame.
    Loading,
    /// First frame available; the placeholder can go.
    Loaded,
    /// Fetch or decode failed; waiting for a retry.
    Failed(String),
}

/// Owner of the playlist cursor and the readiness gates.
///
/// The cursor only moves through [`PlaylistState::advance`], which is reachable solely from the
/// transition completion hook.
#[derive(Clone, Debug)]
pub struct PlaylistState {
    playlist: Playlist,
    current: usize,
    // Load status is scoped to the asset it was reported for.
    main_asset: VideoId,
    main: MainLoad,
    secondary_ready: bool,
    advances: u64,
}

impl PlaylistState {
    /// Start at the first clip with both gates closed.
    pub fn new(playlist: Playlist) -> Self {
        let main_asset = playlist.wrapping_get(0).id;
        Self {
            playlist,
            current: 0,
            main_asset,
            main: MainLoad::Loading,
            secondary_ready: false,
            advances: 0,
        }
    }

    /// The clip playing as the main background.
    pub fn current(&self) -> &VideoAsset {
        self.playlist.wrapping_get(self.current)
    }

    /// The clip queued next (preview thumbnail and incoming overlay).
    pub fn next(&self) -> &VideoAsset {
        self.playlist.wrapping_get(self.current + 1)
    }

    /// Cursor position, always in `[0, len)`.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Underlying playlist.
    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// Number of completed advances since construction.
    pub fn advances(&self) -> u64 {
        self.advances
    }

    /// Load status of the current clip.
    pub fn main_load(&self) -> &MainLoad {
        &self.main
    }

    /// `true` once the current clip has reported its initial load.
    pub fn main_loaded(&self) -> bool {
        self.main == MainLoad::Loaded
    }

    /// `true` once secondary clips may be fetched and rendered. Never reverts.
    pub fn secondary_ready(&self) -> bool {
        self.secondary_ready
    }

    /// Mark the current clip as loaded. Idempotent.
    pub fn report_main_loaded(&mut self) {
        self.main = MainLoad::Loaded;
    }

    /// Mark clip `id` as loaded. Reports for any clip other than the current one are stale and
    /// ignored; returns whether the report was applied.
    pub fn report_loaded(&mut self, id: VideoId) -> bool {
        if id != self.main_asset {
            tracing::debug!(%id, current = %self.main_asset, "ignoring stale load report");
            return false;
        }
        self.report_main_loaded();
        true
    }

    /// Mark the current clip as failed, unless it already loaded.
    pub fn report_main_failed(&mut self, reason: impl Into<String>) {
        if self.main == MainLoad::Loaded {
            return;
        }
        self.main = MainLoad::Failed(reason.into());
    }

    /// Mark clip `id` as failed; stale reports are ignored.
    pub fn report_failed(&mut self, id: VideoId, reason: impl Into<String>) -> bool {
        if id != self.main_asset {
            tracing::debug!(%id, current = %self.main_asset, "ignoring stale failure report");
            return false;
        }
        self.report_main_failed(reason);
        true
    }

    /// Move a failed main clip back to `Loading`. Returns `false` if it had not failed.
    pub fn retry_main(&mut self) -> bool {
        if !matches!(self.main, MainLoad::Failed(_)) {
            return false;
        }
        self.main = MainLoad::Loading;
        true
    }

    /// Open the secondary gate. Returns `true` only on the call that actually opened it, so the
    /// caller can fire its fetch side effect at most once.
    pub fn prepare_secondary(&mut self) -> bool {
        if self.secondary_ready {
            return false;
        }
        self.secondary_ready = true;
        true
    }

    /// Promote `next()` to `current()`.
    pub(crate) fn advance(&mut self) -> (VideoId, VideoId) {
        let from = self.current().id;
        self.current = (self.current + 1) % self.playlist.len();
        self.advances += 1;
        let to = self.current().id;
        if to != self.main_asset {
            self.main_asset = to;
            self.main = MainLoad::Loading;
        }
        (from, to)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playlist/state.rs"]
mod tests;
