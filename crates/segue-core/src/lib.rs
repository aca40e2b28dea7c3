//! Core domain model for segue.
//!
//! This crate defines the song catalog model (songs, audio features,
//! genre/tag terms) and the shared error type. Everything here is
//! plain data; loading lives in `segue-ingest` and similarity ranking
//! in `segue-rank`.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod model;
pub mod terms;

pub use error::{Error, Result};
pub use model::{AudioFeatures, Catalog, CatalogId, Song, SongId};
