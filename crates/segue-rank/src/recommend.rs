//! The recommender: blend numeric and text similarity, rank, explain.

use serde::Serialize;

use segue_core::{Error, Result, SongId};

use crate::explain;
use crate::index::CatalogIndex;
use crate::similarity::{cosine_dense, cosine_sparse};

/// Default number of recommendations returned.
pub const DEFAULT_LIMIT: usize = 5;

/// Default blend weight: an even split between audio and genre/tag
/// similarity.
pub const DEFAULT_WEIGHT: f64 = 0.5;

/// Knobs for a recommendation request.
///
/// `weight` controls the blend: 1.0 ranks by numeric similarity
/// alone, 0.0 by text similarity alone. Values outside `[0, 1]` are
/// clamped rather than extrapolated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendOptions {
    pub weight: f64,
    pub limit: usize,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self {
            weight: DEFAULT_WEIGHT,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl RecommendOptions {
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// The effective blend weight, clamped to `[0, 1]`.
    #[must_use]
    pub fn clamped_weight(&self) -> f64 {
        self.weight.clamp(0.0, 1.0)
    }
}

/// A single ranked result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub name: String,
    pub artist: String,

    /// Why this song was recommended.
    pub reason: String,

    /// Preview-audio URL; empty when the catalog row has none.
    pub url: String,
}

/// Recommend songs similar to the one named `query_name`.
///
/// The name is matched exactly against the catalog; the first
/// matching row wins when names are duplicated.
///
/// # Errors
///
/// Returns [`Error::NotFound`] when no catalog song has that name.
/// This is the sole recoverable error path; callers distinguish it
/// by type from an empty recommendation list.
pub fn recommend(
    index: &CatalogIndex,
    query_name: &str,
    options: &RecommendOptions,
) -> Result<Vec<Recommendation>> {
    let song = index
        .catalog()
        .find_by_name(query_name)
        .ok_or_else(|| Error::NotFound {
            entity: "song",
            name: query_name.to_string(),
        })?;
    recommend_for(index, song.id, options)
}

/// Recommend songs similar to the song with the given id.
///
/// # Errors
///
/// Returns [`Error::NotFound`] when the id is not in the index.
pub fn recommend_for(
    index: &CatalogIndex,
    query_id: SongId,
    options: &RecommendOptions,
) -> Result<Vec<Recommendation>> {
    let query_entry = index.entry(query_id).ok_or_else(|| Error::NotFound {
        entity: "song",
        name: query_id.to_string(),
    })?;
    let query_song = index.song(query_id).ok_or_else(|| Error::NotFound {
        entity: "song",
        name: query_id.to_string(),
    })?;

    // Re-transform the query's text through the fitted vectorizer;
    // the model is never refitted per request.
    let query_text = index.vectorizer().transform(&query_song.combined_text());
    let weight = options.clamped_weight();

    // One score entry per catalog row, in catalog order.
    let mut scored: Vec<(usize, f64, f64, f64)> = index
        .entries()
        .iter()
        .enumerate()
        .map(|(row, entry)| {
            let numeric_sim = cosine_dense(&query_entry.numeric, &entry.numeric);
            let text_sim = cosine_sparse(&query_text, &entry.text);
            let blended = numeric_sim * weight + text_sim * (1.0 - weight);
            (row, numeric_sim, text_sim, blended)
        })
        .collect();

    // Full descending sort by blended score; the sort is stable, so
    // ties keep catalog order.
    scored.sort_by(|a, b| b.3.total_cmp(&a.3));

    let mut results = Vec::with_capacity(options.limit.min(scored.len()));
    for (row, numeric_sim, text_sim, _) in scored {
        if results.len() >= options.limit {
            break;
        }
        let song = &index.catalog().songs()[row];
        // Skip the query row itself, by identity rather than name.
        if song.id == query_id {
            continue;
        }
        results.push(Recommendation {
            name: song.name.clone(),
            artist: song.artist.clone(),
            reason: explain::reason(query_song, song, numeric_sim, text_sim),
            url: song.preview_url.clone().unwrap_or_default(),
        });
    }

    log::debug!(
        "recommended {} songs for {:?} (weight {weight})",
        results.len(),
        query_song.name
    );

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use segue_core::{AudioFeatures, Catalog, Song};

    fn song(name: &str, numeric: [f64; 6], genre: &str, tags: &str) -> Song {
        Song::new(
            name,
            "artist",
            AudioFeatures::new(
                numeric[0], numeric[1], numeric[2], numeric[3], numeric[4], numeric[5],
            ),
        )
        .with_genre(genre)
        .with_tags(tags)
    }

    /// A (rock/guitar), B (identical to A), C (orthogonal jazz/piano).
    fn abc_catalog() -> Catalog {
        Catalog::new(vec![
            song("A", [1.0, 0.0, 0.0, 0.0, 0.0, 0.0], "rock", "guitar"),
            song("B", [1.0, 0.0, 0.0, 0.0, 0.0, 0.0], "rock", "guitar"),
            song("C", [0.0, 1.0, 0.0, 0.0, 0.0, 0.0], "jazz", "piano"),
        ])
    }

    #[test]
    fn test_numeric_only_ranks_identical_vector_first() {
        let index = CatalogIndex::build(abc_catalog());
        let results = recommend(
            &index,
            "A",
            &RecommendOptions::default().with_weight(1.0),
        )
        .unwrap();
        assert_eq!(results[0].name, "B");
        assert_eq!(results[1].name, "C");
    }

    #[test]
    fn test_text_only_ranks_identical_text_first() {
        let index = CatalogIndex::build(abc_catalog());
        let results = recommend(
            &index,
            "A",
            &RecommendOptions::default().with_weight(0.0),
        )
        .unwrap();
        assert_eq!(results[0].name, "B");
        // B shares the query's genre or tags and the reason says so.
        let mentions_overlap =
            results[0].reason.contains("rock") || results[0].reason.contains("guitar");
        assert!(mentions_overlap, "reason was: {}", results[0].reason);
    }

    #[test]
    fn test_query_song_is_never_recommended() {
        let index = CatalogIndex::build(abc_catalog());
        for weight in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let results = recommend(
                &index,
                "A",
                &RecommendOptions::default().with_weight(weight),
            )
            .unwrap();
            assert!(results.len() <= DEFAULT_LIMIT);
            assert!(results.iter().all(|r| r.name != "A"));
        }
    }

    #[test]
    fn test_duplicate_names_exclude_by_identity_not_name() {
        // Two distinct songs named "A": the one that is not the query
        // row must still be rankable.
        let catalog = Catalog::new(vec![
            song("A", [1.0, 0.0, 0.0, 0.0, 0.0, 0.0], "rock", ""),
            song("A", [1.0, 0.0, 0.0, 0.0, 0.0, 0.0], "rock", ""),
            song("C", [0.0, 1.0, 0.0, 0.0, 0.0, 0.0], "jazz", ""),
        ]);
        let index = CatalogIndex::build(catalog);
        let results = recommend(&index, "A", &RecommendOptions::default()).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name, "A");
    }

    #[test]
    fn test_singleton_catalog_yields_no_recommendations() {
        let catalog = Catalog::new(vec![song(
            "Only",
            [0.5, 0.5, 0.0, 0.0, 0.0, 100.0],
            "rock",
            "",
        )]);
        let index = CatalogIndex::build(catalog);
        let results = recommend(&index, "Only", &RecommendOptions::default()).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_unknown_name_is_a_typed_lookup_miss() {
        let index = CatalogIndex::build(abc_catalog());
        let err = recommend(&index, "Nope", &RecommendOptions::default()).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("Nope"));
    }

    #[test]
    fn test_at_most_limit_results() {
        let songs: Vec<Song> = (0..12)
            .map(|i| {
                song(
                    &format!("S{i}"),
                    [1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
                    "rock",
                    "guitar",
                )
            })
            .collect();
        let index = CatalogIndex::build(Catalog::new(songs));
        let results = recommend(&index, "S0", &RecommendOptions::default()).unwrap();
        assert_eq!(results.len(), DEFAULT_LIMIT);

        let three = recommend(
            &index,
            "S0",
            &RecommendOptions::default().with_limit(3),
        )
        .unwrap();
        assert_eq!(three.len(), 3);
    }

    #[test]
    fn test_twin_songs_blend_equally_at_every_weight() {
        // A and B are identical in both feature spaces, so their
        // blended similarity to any third song is equal for every
        // weight.
        let index = CatalogIndex::build(abc_catalog());
        for weight in [0.0, 0.1, 0.3, 0.5, 0.7, 0.9, 1.0] {
            let options = RecommendOptions::default().with_weight(weight);
            let results = recommend(&index, "C", &options).unwrap();
            assert_eq!(results.len(), 2);
            // Tie between A and B: stable sort keeps catalog order.
            assert_eq!(results[0].name, "A");
            assert_eq!(results[1].name, "B");
        }
    }

    #[test]
    fn test_out_of_range_weight_is_clamped() {
        let index = CatalogIndex::build(abc_catalog());
        let high = recommend(
            &index,
            "A",
            &RecommendOptions::default().with_weight(7.5),
        )
        .unwrap();
        let one = recommend(
            &index,
            "A",
            &RecommendOptions::default().with_weight(1.0),
        )
        .unwrap();
        let high_names: Vec<&str> = high.iter().map(|r| r.name.as_str()).collect();
        let one_names: Vec<&str> = one.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(high_names, one_names);
        assert_eq!(RecommendOptions::default().with_weight(-2.0).clamped_weight(), 0.0);
    }

    #[test]
    fn test_audio_reason_carries_no_term_detail() {
        // D matches the query numerically but shares no vocabulary.
        let catalog = Catalog::new(vec![
            song("Q", [1.0, 0.0, 0.0, 0.0, 0.0, 0.0], "rock", "guitar"),
            song("D", [1.0, 0.0, 0.0, 0.0, 0.0, 0.0], "jazz", "piano"),
        ]);
        let index = CatalogIndex::build(catalog);
        let results =
            recommend(&index, "Q", &RecommendOptions::default().with_weight(0.9)).unwrap();
        assert_eq!(results[0].reason, crate::explain::AUDIO_MATCH);
    }

    #[test]
    fn test_missing_preview_url_serializes_as_empty_string() {
        let index = CatalogIndex::build(abc_catalog());
        let results = recommend(&index, "A", &RecommendOptions::default()).unwrap();
        assert!(results.iter().all(|r| r.url.is_empty()));
    }
}
