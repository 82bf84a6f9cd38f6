use thiserror::Error;

/// Errors produced while loading a word source or generating corpus files.
///
/// All variants are fatal to the running operation: there are no retries,
/// and files already completed when an error occurs remain on disk.
#[derive(Error, Debug)]
pub enum GenerateError {
	/// The word source contains no usable words.
	///
	/// Raised when building the sampling pool, before any output file
	/// is created.
	#[error("word source is empty")]
	EmptySource,

	/// A filesystem operation failed (open, write, permission, space).
	#[error("i/o failure: {0}")]
	Io(#[from] std::io::Error),

	/// The word-list binary cache could not be encoded or decoded.
	#[error("word-list cache failure: {0}")]
	Cache(#[from] postcard::Error),

	/// A run parameter is outside its valid range.
	#[error("invalid configuration: {0}")]
	Config(String),
}
