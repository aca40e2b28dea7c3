//! Cosine similarity over dense and sparse vectors.
//!
//! A zero vector has no defined angle; both helpers return 0.0 for
//! it, so zero-feature songs participate in ranking with score 0
//! rather than poisoning the sort with NaN.

use crate::vectorizer::TermVector;

/// Cosine similarity between two dense vectors of equal length.
#[must_use]
pub fn cosine_dense(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Cosine similarity between two sparse term vectors.
///
/// Walks both ordered pair lists once; columns present in only one
/// vector contribute nothing to the dot product.
#[must_use]
pub fn cosine_sparse(a: &TermVector, b: &TermVector) -> f64 {
    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let (pairs_a, pairs_b) = (a.pairs(), b.pairs());
    let mut dot = 0.0;
    let (mut i, mut j) = (0, 0);
    while i < pairs_a.len() && j < pairs_b.len() {
        let (col_a, w_a) = pairs_a[i];
        let (col_b, w_b) = pairs_b[j];
        match col_a.cmp(&col_b) {
            std::cmp::Ordering::Equal => {
                dot += w_a * w_b;
                i += 1;
                j += 1;
            }
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
        }
    }

    dot / (norm_a * norm_b)
}
