use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::model::ids::{CatalogId, SongId};
use crate::model::song::Song;

/// An ordered collection of songs, loaded once per session.
///
/// Songs keep their source order; nothing here mutates or reorders
/// them after construction. Lookup by name returns the first match,
/// since names are not guaranteed unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub id: CatalogId,
    songs: Vec<Song>,
    pub loaded_at: DateTime<Utc>,
}

impl Catalog {
    #[must_use]
    pub fn new(songs: Vec<Song>) -> Self {
        Self {
            id: CatalogId::new(),
            songs,
            loaded_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Song> {
        self.songs.iter()
    }

    #[must_use]
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// First song whose name equals `name` exactly, in catalog order.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Song> {
        self.songs.iter().find(|s| s.name == name)
    }

    #[must_use]
    pub fn find_by_id(&self, id: SongId) -> Option<&Song> {
        self.songs.iter().find(|s| s.id == id)
    }

    /// Songs by a given artist, in catalog order.
    #[must_use]
    pub fn songs_by_artist(&self, artist: &str) -> Vec<&Song> {
        self.songs.iter().filter(|s| s.artist == artist).collect()
    }

    /// Number of distinct artist names in the catalog.
    #[must_use]
    pub fn artist_count(&self) -> usize {
        self.songs
            .iter()
            .map(|s| s.artist.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::features::AudioFeatures;

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            Song::new("So What", "Miles Davis", AudioFeatures::default()),
            Song::new("Blue in Green", "Miles Davis", AudioFeatures::default()),
            Song::new("So What", "Cover Band", AudioFeatures::default()),
        ])
    }

    #[test]
    fn test_find_by_name_returns_first_match() {
        let catalog = sample_catalog();
        let song = catalog.find_by_name("So What").unwrap();
        assert_eq!(song.artist, "Miles Davis");
    }

    #[test]
    fn test_find_by_name_miss() {
        let catalog = sample_catalog();
        assert!(catalog.find_by_name("Giant Steps").is_none());
    }

    #[test]
    fn test_find_by_id() {
        let catalog = sample_catalog();
        let id = catalog.songs()[1].id;
        assert_eq!(catalog.find_by_id(id).unwrap().name, "Blue in Green");
    }

    #[test]
    fn test_songs_by_artist_preserves_order() {
        let catalog = sample_catalog();
        let songs = catalog.songs_by_artist("Miles Davis");
        assert_eq!(songs.len(), 2);
        assert_eq!(songs[0].name, "So What");
        assert_eq!(songs[1].name, "Blue in Green");
    }

    #[test]
    fn test_artist_count() {
        let catalog = sample_catalog();
        assert_eq!(catalog.artist_count(), 2);
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::new(Vec::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}
