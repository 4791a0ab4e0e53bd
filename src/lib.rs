//! heroreel drives a full-screen video hero section: a fixed playlist of clips, a
//! thumbnail-to-fullscreen transition that promotes the queued clip, and a scroll-scrubbed
//! morph of the video frame's clip shape.
//!
//! # Pieces
//!
//! - [`PlaylistState`]: current/next cursor plus the main-load and secondary-ready gates.
//! - [`TransitionAnimator`]: grows the overlay from a thumbnail to the viewport and runs one
//!   completion hook per started transition.
//! - [`ScrollMorph`]: pure mapping from scroll progress to a [`FrameShape`].
//! - [`Hero`]: wires UI signals to the three and exposes a [`HeroView`] render contract.
//!
//! Nothing here renders or fetches media. The surrounding UI binds [`HeroView`] to its media
//! elements, performs the [`HeroEvent`] side effects, and feeds frame ticks, load reports and
//! scroll positions back in.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod config;
mod foundation;
mod hero;
mod morph;
mod playlist;
mod transition;

pub use animation::ease::Ease;
pub use animation::lerp::Lerp;
pub use animation::tween::Tween;
pub use config::hero::HeroConfig;
pub use foundation::core::{Fps, FrameIndex, Point, Size, Vec2};
pub use foundation::error::{HeroError, HeroResult};
pub use hero::controller::Hero;
pub use hero::view::{FrameView, HeroEvent, HeroView, MainMediaView};
pub use morph::region::{ScrollAnchor, ScrollLayout, ScrollRegion};
pub use morph::scroll::{MorphConfig, ScrollMorph};
pub use morph::shape::FrameShape;
pub use playlist::asset::{Playlist, VideoAsset, VideoId};
pub use playlist::state::{MainLoad, PlaylistState};
pub use transition::animator::{TickOutcome, TransitionAnimator, TransitionConfig, TransitionState};
pub use transition::geometry::{Footprint, OverlayGeometry};
