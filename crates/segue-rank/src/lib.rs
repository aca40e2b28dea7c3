//! Similarity ranking for segue.
//!
//! Turns a loaded [`Catalog`](segue_core::Catalog) into an immutable
//! [`CatalogIndex`] (numeric feature vectors plus a fitted TF-IDF
//! model over each song's genre/tag text), then ranks catalog songs
//! against a query song by a weighted blend of numeric and text
//! cosine similarity.
//!
//! The index is built once per catalog load and is read-only
//! afterwards; every recommendation request is a pure function of
//! the index and its arguments.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod explain;
pub mod index;
pub mod recommend;
pub mod similarity;
pub mod vectorizer;

pub use index::{CatalogIndex, SongEntry};
pub use recommend::{recommend, recommend_for, Recommendation, RecommendOptions};
pub use vectorizer::{TermVector, TfIdfVectorizer};
