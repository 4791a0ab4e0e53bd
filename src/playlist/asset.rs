use std::collections::BTreeSet;

use crate::foundation::error::{HeroError, HeroResult};

/// Stable identifier of a clip within a playlist.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct VideoId(pub u32);

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One clip of the playlist. Immutable once defined.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VideoAsset {
    /// Unique, stable identifier.
    pub id: VideoId,
    /// Media URI of the clip.
    #[serde(alias = "src")]
    pub source: String,
    /// Still image shown until the clip has decoded its first frame.
    pub poster: String,
}

impl VideoAsset {
    /// Convenience constructor.
    pub fn new(id: u32, source: impl Into<String>, poster: impl Into<String>) -> Self {
        Self {
            id: VideoId(id),
            source: source.into(),
            poster: poster.into(),
        }
    }
}

/// Fixed, ordered, non-empty sequence of clips with unique ids.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<VideoAsset>", into = "Vec<VideoAsset>")]
pub struct Playlist {
    assets: Vec<VideoAsset>,
}

impl Playlist {
    /// Build a validated playlist.
    pub fn new(assets: Vec<VideoAsset>) -> HeroResult<Self> {
        if assets.is_empty() {
            return Err(HeroError::playlist("playlist must contain at least one clip"));
        }
        let mut seen = BTreeSet::new();
        for a in &assets {
            if !seen.insert(a.id) {
                return Err(HeroError::playlist(format!("duplicate clip id {}", a.id)));
            }
            if a.source.trim().is_empty() {
                return Err(HeroError::playlist(format!(
                    "clip {} has an empty source",
                    a.id
                )));
            }
        }
        Ok(Self { assets })
    }

    /// The four stock hero clips, `videos/hero-{1..4}.mp4` with matching posters.
    pub fn stock() -> Self {
        Self {
            assets: (1..=4)
                .map(|i| {
                    VideoAsset::new(
                        i,
                        format!("videos/hero-{i}.mp4"),
                        format!("videos/poster-{i}.jpg"),
                    )
                })
                .collect(),
        }
    }

    /// Number of clips (always >= 1).
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Clip at `index` modulo the playlist length.
    pub fn wrapping_get(&self, index: usize) -> &VideoAsset {
        &self.assets[index % self.assets.len()]
    }

    /// Iterate clips in playlist order.
    pub fn iter(&self) -> impl Iterator<Item = &VideoAsset> {
        self.assets.iter()
    }
}

impl TryFrom<Vec<VideoAsset>> for Playlist {
    type Error = HeroError;

    fn try_from(assets: Vec<VideoAsset>) -> Result<Self, Self::Error> {
        Self::new(assets)
    }
}

impl From<Playlist> for Vec<VideoAsset> {
    fn from(p: Playlist) -> Self {
        p.assets
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playlist/asset.rs"]
mod tests;
