use crate::morph::shape::FrameShape;
use crate::playlist::asset::VideoId;
use crate::transition::animator::TransitionState;
use crate::transition::geometry::OverlayGeometry;

/// Side effects the render layer must carry out, in the order they happened.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeroEvent {
    /// Start fetching secondary clips (preview and overlay media). Emitted once per session.
    FetchSecondary {
        /// Clip queued next when the gate opened.
        next: VideoId,
    },
    /// The overlay became visible and its playback should start.
    OverlayStarted {
        /// Clip shown in the overlay.
        asset: VideoId,
    },
    /// The playlist cursor moved.
    Advanced {
        /// Previous current clip.
        from: VideoId,
        /// New current clip.
        to: VideoId,
    },
}

/// Main background media binding.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MainMediaView {
    /// Clip id; a change means the media element must be recreated.
    pub id: VideoId,
    /// Media URI.
    pub source: String,
    /// Poster URI.
    pub poster: String,
}

/// Frame clip shape, both structured and as CSS strings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameView {
    /// Structured shape.
    pub shape: FrameShape,
    /// `clip-path` value.
    pub clip_path: String,
    /// `border-radius` value.
    pub border_radius: String,
}

impl From<FrameShape> for FrameView {
    fn from(shape: FrameShape) -> Self {
        Self {
            clip_path: shape.clip_path_css(),
            border_radius: shape.border_radius_css(),
            shape,
        }
    }
}

/// Everything a declarative UI needs to draw the hero at one instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HeroView {
    /// Background clip.
    pub main: MainMediaView,
    /// Clip queued next; bound to the preview thumbnail and the overlay.
    pub next_source: String,
    /// Loading placeholder is shown.
    pub show_loader: bool,
    /// Retry affordance is shown (main clip failed to load).
    pub show_retry: bool,
    /// Secondary media elements are mounted.
    pub secondary_ready: bool,
    /// The preview thumbnail accepts clicks.
    pub preview_enabled: bool,
    /// Transition state.
    pub transition: TransitionState,
    /// Overlay geometry resolved against the viewport.
    pub overlay: OverlayGeometry,
    /// Frame shape from the last scroll update.
    pub frame: FrameView,
}
