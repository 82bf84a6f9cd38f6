use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::GenerateError;
use crate::io::{build_cache_path, read_lines};

/// An immutable collection of distinct candidate words.
///
/// # Responsibilities
/// - Normalize raw input: trim whitespace, drop empty entries
/// - Deduplicate while preserving first-seen order
/// - Load from word-list files, with a compact binary cache beside them
///
/// # Invariants
/// - Every stored word is non-empty and carries no surrounding whitespace
/// - No word appears twice
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WordSource {
	words: Vec<String>,
}

impl WordSource {
	/// Builds a word source from any iterator of strings.
	///
	/// Entries are trimmed; empty entries are skipped; duplicates keep
	/// their first occurrence.
	pub fn new<I>(words: I) -> Self
	where
		I: IntoIterator<Item = String>,
	{
		let mut seen = HashSet::new();
		let mut unique = Vec::new();
		for word in words {
			let word = word.trim();
			if word.is_empty() {
				continue;
			}
			if seen.insert(word.to_owned()) {
				unique.push(word.to_owned());
			}
		}
		Self { words: unique }
	}

	/// Loads a word source from a newline-separated word-list file.
	///
	/// # Behavior
	/// - If a sibling binary cache exists (`words.txt` → `words.bin`),
	///   it is deserialized and returned directly.
	/// - Otherwise the text file is parsed and the cache is written for
	///   future fast loading.
	///
	/// # Errors
	/// - [`GenerateError::Io`] if the list or the cache cannot be read
	///   or written.
	/// - [`GenerateError::Cache`] if the cache bytes cannot be encoded
	///   or decoded.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GenerateError> {
		let cache_path = build_cache_path(&path)?;
		if cache_path.exists() {
			let bytes = std::fs::read(cache_path)?;
			return Ok(postcard::from_bytes(&bytes)?);
		}

		let source = Self::new(read_lines(&path)?);
		let bytes = postcard::to_stdvec(&source)?;
		std::fs::write(cache_path, bytes)?;

		Ok(source)
	}

	/// Builds a word source from an in-memory newline-separated list.
	pub fn from_lines(data: &str) -> Self {
		Self::new(data.lines().map(str::to_owned))
	}

	/// Number of distinct words.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	/// Whether the source holds no words at all.
	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Read-only view of the words, in first-seen order.
	pub fn words(&self) -> &[String] {
		&self.words
	}

	pub(crate) fn into_words(self) -> Vec<String> {
		self.words
	}
}
