use serde::{Deserialize, Serialize};

use crate::model::features::AudioFeatures;
use crate::model::ids::SongId;

/// A catalog song.
///
/// `genre` and `tags` are comma-delimited strings as they appear in
/// the source data; an absent value is normalized to the empty
/// string at load time, never carried as a missing marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: SongId,
    pub name: String,
    pub artist: String,

    /// Comma-delimited genre labels (possibly empty).
    pub genre: String,

    /// Comma-delimited folksonomy tags (possibly empty).
    pub tags: String,

    pub features: AudioFeatures,

    /// URL of a short audio preview, if the source provides one.
    pub preview_url: Option<String>,
}

impl Song {
    #[must_use]
    pub fn new(name: impl Into<String>, artist: impl Into<String>, features: AudioFeatures) -> Self {
        Self {
            id: SongId::new(),
            name: name.into(),
            artist: artist.into(),
            genre: String::new(),
            tags: String::new(),
            features,
            preview_url: None,
        }
    }

    #[must_use]
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    #[must_use]
    pub fn with_preview_url(mut self, url: impl Into<String>) -> Self {
        self.preview_url = Some(url.into());
        self
    }

    /// The combined text field used for text similarity:
    /// `genre + " " + tags`. Always a string, even when both parts
    /// are empty.
    #[must_use]
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.genre, self.tags)
    }
}
