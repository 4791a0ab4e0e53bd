use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{HeroError, HeroResult};
use crate::morph::scroll::MorphConfig;
use crate::playlist::asset::Playlist;
use crate::transition::animator::TransitionConfig;

/// Startup configuration of a hero section.
///
/// This is the JSON-facing representation; the playlist is validated on parse, the remaining
/// sections by [`HeroConfig::validate`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HeroConfig {
    /// Ordered clips cycled through by the transition.
    pub playlist: Playlist,
    /// Thumbnail-to-fullscreen transition settings.
    #[serde(default)]
    pub transition: TransitionConfig,
    /// Scroll-linked frame morph settings.
    #[serde(default)]
    pub morph: MorphConfig,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            playlist: Playlist::stock(),
            transition: TransitionConfig::default(),
            morph: MorphConfig::default(),
        }
    }
}

impl HeroConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> HeroResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| HeroError::config(format!("parse hero config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> HeroResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            HeroError::config(format!("open hero config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize to pretty JSON.
    pub fn to_json_pretty(&self) -> HeroResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| HeroError::serde(format!("serialize hero config: {e}")))
    }

    /// Validate transition and morph sections.
    pub fn validate(&self) -> HeroResult<()> {
        self.transition.validate()?;
        self.morph.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/hero.rs"]
mod tests;
