//! Human-readable match reasons.
//!
//! A candidate that scored higher on audio similarity gets the fixed
//! audio message with no genre/tag detail. A candidate that scored
//! higher on text similarity lists the genre and tag terms it shares
//! with the query, when any exist.

use segue_core::terms::shared_terms;
use segue_core::Song;

/// Reason attached to candidates matched primarily on audio features.
pub const AUDIO_MATCH: &str = "Matched on audio features";

/// Generic reason for text matches with no listable shared terms.
pub const TEXT_MATCH: &str = "Matched on genre/tags";

/// Build the reason string for a recommended song.
#[must_use]
pub fn reason(query: &Song, candidate: &Song, numeric_sim: f64, text_sim: f64) -> String {
    if numeric_sim > text_sim {
        return AUDIO_MATCH.to_string();
    }

    let genres = shared_terms(&query.genre, &candidate.genre);
    let tags = shared_terms(&query.tags, &candidate.tags);

    let mut clauses = Vec::new();
    if !genres.is_empty() {
        clauses.push(format!("Genre: {}", genres.join(", ")));
    }
    if !tags.is_empty() {
        clauses.push(format!("Tags: {}", tags.join(", ")));
    }

    if clauses.is_empty() {
        TEXT_MATCH.to_string()
    } else {
        format!("{TEXT_MATCH} ({})", clauses.join("; "))
    }
}
