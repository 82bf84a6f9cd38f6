//! Top-level module for the corpus generation system.
//!
//! This crate provides a random word-corpus file generator, including:
//! - A deduplicated word source with cached loading (`WordSource`)
//! - A shuffled sampling pool (`ShuffledPool`)
//! - Run configuration (`GenerateParams`)
//! - A high-level generation interface (`CorpusGenerator`)

/// Error taxonomy for word-source loading and corpus generation.
pub mod error;

/// High-level interface producing corpus fixture files on disk.
///
/// Exposes run construction, seeded and OS-seeded RNG setup, and the
/// per-file write loop with batched line flushing.
pub mod generator;

/// Run configuration.
///
/// Stores generation parameters such as file count, word draws per file,
/// output naming, and line layout, with validated setters where a value
/// has constraints.
pub mod params;

/// Randomized permutation of a word source.
///
/// Supports uniform with-replacement sampling by index. The shuffle
/// happens once, at construction.
pub mod pool;

/// Word source loading and deduplication.
///
/// Supports newline-separated word-list files (with a binary cache
/// written beside them) and in-memory lists.
pub mod source;
