//! Catalog loading for segue.
//!
//! Reads a delimited song catalog into the
//! [`Catalog`](segue_core::Catalog) model, validating the schema up
//! front and normalizing missing genre/tag values to empty strings.
//! Also owns the configuration layer (config file + `SEGUE_*`
//! environment variables).

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod load;

pub use config::Config;
pub use error::{IngestError, IngestResult};
pub use load::load_catalog;
