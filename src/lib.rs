//! # imdb-loader
//!
//! Fetches the Large Movie Review (IMDB) sentiment corpus, extracts it in a cache directory
//! and turns its `<split>/<sentiment>/*.txt` files into labeled, normalized [dataset::Example]s.
//!
//! The pipeline is sequential and eager:
//! - [download] makes sure the archive is present and extracted, skipping work when check files exist,
//! - [corpus] walks a split, normalizes the first line of each review with [normalize] and computes word count statistics,
//! - [imdb] aggregates splits into [dataset::Dataset]s and shapes the result.
pub mod config;
pub mod corpus;
pub mod dataset;
mod decompress;
pub mod download;
pub mod error;
pub mod imdb;
pub mod normalize;

pub use config::ImdbConfig;
pub use dataset::{Dataset, Example};
pub use imdb::{imdb_dataset, Splits};
