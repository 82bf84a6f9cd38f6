use std::path::PathBuf;

use super::error::GenerateError;

/// Layout of words into lines within each output file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineLayout {
	/// Flush a full line after every `words_per_line` draws; the final
	/// partial batch is written as a shorter trailing line.
	Fixed,
	/// Historical layout, kept for byte-compatibility with fixtures
	/// produced by earlier versions of this tool: a line is flushed when
	/// the draw counter modulo `words_per_line` equals 1 (the first
	/// emitted line holds 2 words), and the unflushed tail at the end of
	/// a file is discarded, never written.
	Legacy,
}

/// Input parameters for a generation run.
///
/// `GenerateParams` contains both **output shape parameters** (file count,
/// draws per file, naming) and **line formatting parameters** (words per
/// line, layout).
///
/// # Responsibilities
/// - Track run parameters (`file_count`, `words_per_file`, `file_prefix`,
///   `output_dir`, `layout`)
/// - Guard constrained values behind validated setters (`words_per_line`)
///
/// # Invariants
/// - `words_per_line` is always >= 1
pub struct GenerateParams {
	/// Number of output files to produce.
	pub file_count: usize,

	/// Number of word draws per file.
	pub words_per_file: usize,

	/// Output filename prefix; files are named `{prefix}_{index}.txt`.
	pub file_prefix: String,

	/// Directory receiving the output files.
	pub output_dir: PathBuf,

	/// Line layout strategy.
	pub layout: LineLayout,

	/// Words accumulated before a line is flushed (>= 1).
	words_per_line: usize,
}

impl Default for GenerateParams {
	fn default() -> Self {
		Self {
			file_count: 99,
			words_per_file: 200_000,
			file_prefix: "test".to_owned(),
			output_dir: PathBuf::from("."),
			layout: LineLayout::Fixed,
			words_per_line: 25,
		}
	}
}

impl GenerateParams {
	/// Returns the current words-per-line batch size.
	pub fn words_per_line(&self) -> usize {
		self.words_per_line
	}

	/// Sets the words-per-line batch size.
	///
	/// # Errors
	/// Returns [`GenerateError::Config`] if the value is 0.
	pub fn set_words_per_line(&mut self, words_per_line: usize) -> Result<(), GenerateError> {
		if words_per_line == 0 {
			return Err(GenerateError::Config(
				"words_per_line must be >= 1".to_owned(),
			));
		}
		self.words_per_line = words_per_line;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults_match_original_constants() {
		let params = GenerateParams::default();
		assert_eq!(params.file_count, 99);
		assert_eq!(params.words_per_file, 200_000);
		assert_eq!(params.file_prefix, "test");
		assert_eq!(params.output_dir, PathBuf::from("."));
		assert_eq!(params.words_per_line(), 25);
		assert_eq!(params.layout, LineLayout::Fixed);
	}

	#[test]
	fn test_words_per_line_zero_rejected() {
		let mut params = GenerateParams::default();
		assert!(matches!(
			params.set_words_per_line(0),
			Err(GenerateError::Config(_))
		));
		// Unchanged after the failed set
		assert_eq!(params.words_per_line(), 25);
	}

	#[test]
	fn test_words_per_line_accepts_positive_values() {
		let mut params = GenerateParams::default();
		params.set_words_per_line(1).unwrap();
		assert_eq!(params.words_per_line(), 1);
		params.set_words_per_line(100).unwrap();
		assert_eq!(params.words_per_line(), 100);
	}
}
