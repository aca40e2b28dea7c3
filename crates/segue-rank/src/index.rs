//! The catalog index: every artifact a recommendation request needs,
//! built once per catalog load.
//!
//! One [`SongEntry`] per song carries that song's numeric feature
//! vector and text term vector together, keyed by [`SongId`]. Keeping
//! the features inside a single entry (rather than in parallel
//! matrices indexed by row position) means there is nothing to fall
//! out of alignment if the catalog is ever filtered or reordered
//! upstream.

use std::collections::HashMap;

use segue_core::{Catalog, Song, SongId};

use crate::vectorizer::{TermVector, TfIdfVectorizer};

/// Per-song similarity features.
#[derive(Debug, Clone)]
pub struct SongEntry {
    pub id: SongId,

    /// The six audio attributes, in `AudioFeatures::COLUMNS` order.
    pub numeric: [f64; 6],

    /// L2-normalized TF-IDF vector of the song's combined genre/tag
    /// text.
    pub text: TermVector,
}

/// Immutable context for recommendation queries.
///
/// Owns the catalog, the vectorizer fitted on it, and one entry per
/// song in catalog order. All four artifacts are built together by
/// [`CatalogIndex::build`] and can never be individually stale; the
/// index has no write path after construction and is safe to share
/// by reference across concurrent readers.
#[derive(Debug, Clone)]
pub struct CatalogIndex {
    catalog: Catalog,
    vectorizer: TfIdfVectorizer,
    entries: Vec<SongEntry>,
    rows: HashMap<SongId, usize>,
}

impl CatalogIndex {
    /// Build the index for a catalog.
    ///
    /// Fits the vectorizer on every song's combined text field, then
    /// transforms that same set. Entry order matches catalog order
    /// exactly; no songs are dropped or reordered. An empty catalog
    /// yields an empty (degenerate) index.
    #[must_use]
    pub fn build(catalog: Catalog) -> Self {
        let documents: Vec<String> = catalog.iter().map(Song::combined_text).collect();
        let vectorizer = TfIdfVectorizer::fit(&documents);

        let entries: Vec<SongEntry> = catalog
            .iter()
            .zip(&documents)
            .map(|(song, text)| SongEntry {
                id: song.id,
                numeric: song.features.as_vector(),
                text: vectorizer.transform(text),
            })
            .collect();

        let rows = entries
            .iter()
            .enumerate()
            .map(|(row, entry)| (entry.id, row))
            .collect();

        log::info!(
            "indexed {} songs ({} vocabulary terms)",
            entries.len(),
            vectorizer.vocabulary_len()
        );

        Self {
            catalog,
            vectorizer,
            entries,
            rows,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn vectorizer(&self) -> &TfIdfVectorizer {
        &self.vectorizer
    }

    /// Entries in catalog order.
    #[must_use]
    pub fn entries(&self) -> &[SongEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entry(&self, id: SongId) -> Option<&SongEntry> {
        self.rows.get(&id).map(|&row| &self.entries[row])
    }

    #[must_use]
    pub fn song(&self, id: SongId) -> Option<&Song> {
        self.rows.get(&id).map(|&row| &self.catalog.songs()[row])
    }
}
