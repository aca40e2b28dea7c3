//! Term-weighting (TF-IDF) vectorization of genre/tag text.
//!
//! The vectorizer is fitted once on the full catalog's combined text
//! fields and is immutable afterwards; query text is transformed
//! through the fitted vocabulary, never refitted. Weighting follows
//! the common smoothed form: `idf = ln((1 + n) / (1 + df)) + 1` with
//! raw term counts and L2 normalization of each document vector.

use std::collections::{BTreeSet, HashMap};

/// A sparse weighted-term vector, ordered by term column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TermVector(Vec<(usize, f64)>);

impl TermVector {
    #[must_use]
    pub fn new(mut pairs: Vec<(usize, f64)>) -> Self {
        pairs.sort_unstable_by_key(|&(term, _)| term);
        Self(pairs)
    }

    /// Term-column/weight pairs in ascending column order.
    #[must_use]
    pub fn pairs(&self) -> &[(usize, f64)] {
        &self.0
    }

    /// A vector with no non-zero weights scores 0 against everything.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    /// Euclidean norm.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.0
            .iter()
            .map(|&(_, w)| w * w)
            .sum::<f64>()
            .sqrt()
    }
}

/// A fitted TF-IDF model: term vocabulary plus per-term IDF weights.
///
/// Fitting happens in [`TfIdfVectorizer::fit`]; there is deliberately
/// no way to refit an existing instance.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfIdfVectorizer {
    /// Fit a vectorizer on a set of documents.
    ///
    /// Vocabulary columns are assigned in lexicographic term order,
    /// so fitting is deterministic. An empty document set yields a
    /// degenerate vectorizer with an empty vocabulary, which is
    /// valid: every transform then produces a zero vector.
    #[must_use]
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
        let n_docs = documents.len() as f64;

        // Document frequency per term.
        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        for doc in documents {
            let unique: BTreeSet<String> = tokenize(doc.as_ref()).collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let terms: BTreeSet<&String> = doc_freq.keys().collect();
        let mut vocabulary = HashMap::with_capacity(terms.len());
        let mut idf = Vec::with_capacity(terms.len());
        for (column, term) in terms.into_iter().enumerate() {
            let df = doc_freq[term] as f64;
            vocabulary.insert(term.clone(), column);
            idf.push(((1.0 + n_docs) / (1.0 + df)).ln() + 1.0);
        }

        log::debug!(
            "fitted vectorizer: {} terms over {} documents",
            vocabulary.len(),
            documents.len()
        );

        Self { vocabulary, idf }
    }

    /// Transform a document into an L2-normalized weighted-term
    /// vector over the fitted vocabulary. Terms outside the
    /// vocabulary are ignored.
    #[must_use]
    pub fn transform(&self, document: &str) -> TermVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in tokenize(document) {
            if let Some(&column) = self.vocabulary.get(&term) {
                *counts.entry(column).or_insert(0.0) += 1.0;
            }
        }

        let mut pairs: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(column, tf)| (column, tf * self.idf[column]))
            .collect();

        let norm = pairs.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut pairs {
                *w /= norm;
            }
        }

        TermVector::new(pairs)
    }

    /// Number of terms in the fitted vocabulary.
    #[must_use]
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Column index of a term, if it was seen during fitting.
    #[must_use]
    pub fn term_column(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }
}

/// Lowercased alphanumeric runs of at least two characters.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= 2)
        .map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_splits_on_non_alphanumeric() {
        let tokens: Vec<String> = tokenize("rock, indie-pop Guitar").collect();
        assert_eq!(tokens, vec!["rock", "indie", "pop", "guitar"]);
    }

    #[test]
    fn test_tokenize_drops_single_characters() {
        let tokens: Vec<String> = tokenize("a jazz b").collect();
        assert_eq!(tokens, vec!["jazz"]);
    }

    #[test]
    fn test_fit_builds_sorted_vocabulary() {
        let vectorizer = TfIdfVectorizer::fit(&["rock guitar", "jazz piano"]);
        assert_eq!(vectorizer.vocabulary_len(), 4);
        // Lexicographic column assignment.
        assert_eq!(vectorizer.term_column("guitar"), Some(0));
        assert_eq!(vectorizer.term_column("jazz"), Some(1));
        assert_eq!(vectorizer.term_column("piano"), Some(2));
        assert_eq!(vectorizer.term_column("rock"), Some(3));
    }

    #[test]
    fn test_fit_on_empty_corpus_is_degenerate_but_valid() {
        let vectorizer = TfIdfVectorizer::fit(&[] as &[&str]);
        assert_eq!(vectorizer.vocabulary_len(), 0);
        assert!(vectorizer.transform("anything at all").is_zero());
    }

    #[test]
    fn test_transform_ignores_unseen_terms() {
        let vectorizer = TfIdfVectorizer::fit(&["rock guitar"]);
        let vector = vectorizer.transform("rock ukulele");
        assert_eq!(vector.pairs().len(), 1);
        assert_eq!(vector.pairs()[0].0, vectorizer.term_column("rock").unwrap());
    }

    #[test]
    fn test_transform_is_l2_normalized() {
        let vectorizer = TfIdfVectorizer::fit(&["rock guitar", "rock piano", "jazz piano"]);
        let vector = vectorizer.transform("rock guitar piano");
        assert!((vector.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_transform_of_empty_text_is_zero() {
        let vectorizer = TfIdfVectorizer::fit(&["rock guitar"]);
        assert!(vectorizer.transform("").is_zero());
        assert!(vectorizer.transform(" ").is_zero());
    }

    #[test]
    fn test_rare_terms_weigh_more_than_common_ones() {
        let docs = ["rock guitar", "rock piano", "rock strings"];
        let vectorizer = TfIdfVectorizer::fit(&docs);
        let vector = vectorizer.transform("rock guitar");
        let rock = vectorizer.term_column("rock").unwrap();
        let guitar = vectorizer.term_column("guitar").unwrap();
        let weight_of = |column: usize| {
            vector
                .pairs()
                .iter()
                .find(|&&(c, _)| c == column)
                .map(|&(_, w)| w)
                .unwrap()
        };
        assert!(weight_of(guitar) > weight_of(rock));
    }
}
