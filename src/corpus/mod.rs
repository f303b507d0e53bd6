//! Corpus traversal
//!
//! The extracted corpus is laid out as `<split>/<sentiment>/*.txt`, one review per file.
//! [walker::walk_split] turns one split into [crate::dataset::Example]s and tracks word counts in [stats::LengthStats].
pub mod stats;
pub mod walker;

pub use stats::LengthStats;
pub use walker::walk_split;
