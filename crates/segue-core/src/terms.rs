//! Comma-delimited genre/tag term handling.
//!
//! Genre and tag fields are comma-delimited label lists as they come
//! from the source data. Terms are split verbatim (no whitespace
//! trimming), so `"cool jazz, modal"` yields `"cool jazz"` and
//! `" modal"` as distinct terms. Empty terms are dropped, which keeps
//! two untagged songs from "sharing" the empty label.

use std::collections::HashSet;

/// Split a comma-delimited field into its non-empty terms, in order.
#[must_use]
pub fn split_terms(field: &str) -> Vec<&str> {
    field.split(',').filter(|t| !t.is_empty()).collect()
}

/// Terms present in both fields, in `query`'s term order.
#[must_use]
pub fn shared_terms<'a>(query: &'a str, other: &str) -> Vec<&'a str> {
    let other_terms: HashSet<&str> = split_terms(other).into_iter().collect();
    let mut seen = HashSet::new();
    split_terms(query)
        .into_iter()
        .filter(|t| other_terms.contains(t) && seen.insert(*t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_terms_verbatim() {
        assert_eq!(split_terms("rock,blues"), vec!["rock", "blues"]);
        // No trimming: the space stays part of the term.
        assert_eq!(split_terms("cool jazz, modal"), vec!["cool jazz", " modal"]);
    }

    #[test]
    fn test_split_terms_drops_empty() {
        assert_eq!(split_terms(""), Vec::<&str>::new());
        assert_eq!(split_terms("rock,,blues,"), vec!["rock", "blues"]);
    }

    #[test]
    fn test_shared_terms_in_query_order() {
        let shared = shared_terms("rock,blues,folk", "folk,rock");
        assert_eq!(shared, vec!["rock", "folk"]);
    }

    #[test]
    fn test_shared_terms_disjoint() {
        assert!(shared_terms("jazz", "rock").is_empty());
    }

    #[test]
    fn test_shared_terms_both_empty() {
        assert!(shared_terms("", "").is_empty());
    }

    #[test]
    fn test_shared_terms_deduplicates() {
        let shared = shared_terms("rock,rock", "rock");
        assert_eq!(shared, vec!["rock"]);
    }
}
