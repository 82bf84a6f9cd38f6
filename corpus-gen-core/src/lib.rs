//! Word-corpus fixture generation library.
//!
//! This crate produces batches of text files filled with randomly sampled
//! words, for load-testing file-processing tools. It provides:
//! - Word source loading with deduplication and a binary cache
//! - A shuffled sampling pool with uniform with-replacement draws
//! - Configurable line layout, file count, and output naming
//! - Internal utilities for I/O and path handling
//!
//! The path and file helpers are crate-private; consumers go through
//! the `corpus` module.

/// Core corpus types and generation logic.
///
/// This module exposes the high-level generator interface while keeping
/// internal helpers private.
pub mod corpus;

/// I/O utilities (word-list loading, path helpers).
///
/// Not exposed
pub(crate) mod io;
