//! CSV catalog loading.
//!
//! The catalog is a delimited file with one song per row. Required
//! columns: `name`, `artist`, `genre`, `tags`, and the six audio
//! attributes; `preview_url` (or the legacy `spotify_preview_url`)
//! is optional. The schema is validated against the header before
//! any row is read, so a missing column fails fast with its name.

use std::path::Path;

use serde::Deserialize;

use segue_core::{AudioFeatures, Catalog, Song};

use crate::error::{IngestError, IngestResult};

/// Columns every catalog must have.
const REQUIRED_COLUMNS: [&str; 10] = [
    "name",
    "artist",
    "genre",
    "tags",
    "danceability",
    "energy",
    "acousticness",
    "instrumentalness",
    "valence",
    "tempo",
];

/// One catalog row as it appears in the file.
#[derive(Debug, Deserialize)]
struct RawRow {
    name: String,
    artist: String,

    // Genre and tags may be blank; both normalize to "".
    #[serde(default)]
    genre: Option<String>,
    #[serde(default)]
    tags: Option<String>,

    danceability: f64,
    energy: f64,
    acousticness: f64,
    instrumentalness: f64,
    valence: f64,
    tempo: f64,

    #[serde(default, alias = "spotify_preview_url")]
    preview_url: Option<String>,
}

impl RawRow {
    fn into_song(self) -> Song {
        let features = AudioFeatures::new(
            self.danceability,
            self.energy,
            self.acousticness,
            self.instrumentalness,
            self.valence,
            self.tempo,
        );
        let mut song = Song::new(self.name, self.artist, features)
            .with_genre(self.genre.unwrap_or_default())
            .with_tags(self.tags.unwrap_or_default());
        if let Some(url) = self.preview_url {
            if !url.is_empty() {
                song = song.with_preview_url(url);
            }
        }
        song
    }
}

/// Load a song catalog from a CSV file.
///
/// Rows keep their file order; none are dropped or reordered. Each
/// song is assigned a fresh id at load time.
///
/// # Errors
///
/// Returns [`IngestError::MissingColumn`] when a required column is
/// absent from the header, and [`IngestError::InvalidRow`] when a
/// cell cannot be parsed.
pub fn load_catalog(path: &Path) -> IngestResult<Catalog> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(IngestError::MissingColumn { column });
        }
    }

    let mut songs = Vec::new();
    for result in reader.deserialize::<RawRow>() {
        match result {
            Ok(row) => songs.push(row.into_song()),
            Err(e) => {
                let line = e.position().map_or(0, csv::Position::line);
                return Err(IngestError::InvalidRow { line, source: e });
            }
        }
    }

    log::info!("loaded {} songs from {}", songs.len(), path.display());

    Ok(Catalog::new(songs))
}
