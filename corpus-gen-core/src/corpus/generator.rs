use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::error::GenerateError;
use super::params::{GenerateParams, LineLayout};
use super::pool::ShuffledPool;
use super::source::WordSource;
use crate::io::corpus_file_path;

/// Statistics for one completed generation run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerateReport {
	/// Files opened and written to completion.
	pub files_written: usize,
	/// Lines flushed across all files.
	pub lines_written: u64,
	/// Word draws performed across all files.
	pub words_drawn: u64,
	/// Draws accumulated but never flushed ([`LineLayout::Legacy`] only).
	pub words_discarded: u64,
}

/// High-level generator producing word-corpus fixture files.
///
/// # Responsibilities
/// - Own the shuffled sampling pool and the run RNG
/// - Write `file_count` output files, each holding `words_per_file`
///   uniformly sampled words batched into lines
/// - Scope every file handle to its own iteration of the write loop
#[derive(Debug)]
pub struct CorpusGenerator {
	pool: ShuffledPool,
	rng: StdRng,
}

impl CorpusGenerator {
	/// Creates a generator with an OS-seeded RNG.
	///
	/// # Errors
	/// Returns [`GenerateError::EmptySource`] if `source` has no words.
	/// This happens before any output file is created.
	pub fn new(source: WordSource) -> Result<Self, GenerateError> {
		Self::with_rng(source, StdRng::from_rng(&mut rand::rng()))
	}

	/// Creates a generator with a fixed seed.
	///
	/// Two generators built from the same source and seed produce
	/// byte-identical output for the same parameters.
	///
	/// # Errors
	/// Returns [`GenerateError::EmptySource`] if `source` has no words.
	pub fn with_seed(source: WordSource, seed: u64) -> Result<Self, GenerateError> {
		Self::with_rng(source, StdRng::seed_from_u64(seed))
	}

	fn with_rng(source: WordSource, mut rng: StdRng) -> Result<Self, GenerateError> {
		let pool = ShuffledPool::new(source, &mut rng)?;
		Ok(Self { pool, rng })
	}

	/// Read-only access to the sampling pool.
	pub fn pool(&self) -> &ShuffledPool {
		&self.pool
	}

	/// Generates `params.file_count` corpus files.
	///
	/// # Behavior
	/// - For each index `i` in `[0, file_count)`, opens
	///   `{output_dir}/{file_prefix}_{i}.txt` in create-or-append mode:
	///   re-running against existing files grows them, never truncates.
	/// - Draws `words_per_file` words per file, uniformly with
	///   replacement, batching them into lines per `params.layout`.
	/// - Each writer is flushed and closed before the next index starts,
	///   so a failure mid-file cannot leak a handle into later
	///   iterations.
	///
	/// # Errors
	/// Returns [`GenerateError::Io`] on the first filesystem failure.
	/// The run aborts at that point; files already completed remain on
	/// disk. No retries, no rollback.
	///
	/// # Notes
	/// - `words_per_file == 0` still creates each file; no lines are
	///   written to it.
	pub fn generate(&mut self, params: &GenerateParams) -> Result<GenerateReport, GenerateError> {
		info!(
			"generating {} files of {} words into {}",
			params.file_count,
			params.words_per_file,
			params.output_dir.display()
		);

		let mut report = GenerateReport::default();
		for index in 0..params.file_count {
			let path = corpus_file_path(&params.output_dir, &params.file_prefix, index);
			let (lines, discarded) = self.write_corpus_file(&path, params)?;

			report.files_written += 1;
			report.lines_written += lines;
			report.words_drawn += params.words_per_file as u64;
			report.words_discarded += discarded;
			debug!("wrote {} lines to {}", lines, path.display());
		}

		Ok(report)
	}

	/// Writes a single corpus file and returns `(lines, discarded)`.
	///
	/// The batch buffer is bounded: it is flushed and cleared on each
	/// line boundary instead of growing one string for the whole file.
	fn write_corpus_file(
		&mut self,
		path: &Path,
		params: &GenerateParams,
	) -> Result<(u64, u64), GenerateError> {
		let file = OpenOptions::new().create(true).append(true).open(path)?;
		let mut writer = BufWriter::new(file);

		let words_per_line = params.words_per_line();
		let mut batch: Vec<&str> = Vec::with_capacity(words_per_line + 1);
		let mut lines = 0u64;

		for x in 0..params.words_per_file {
			batch.push(self.pool.pick(&mut self.rng));

			let flush = match params.layout {
				LineLayout::Fixed => batch.len() == words_per_line,
				LineLayout::Legacy => x % words_per_line == 1,
			};
			if flush {
				write_line(&mut writer, &batch)?;
				lines += 1;
				batch.clear();
			}
		}

		// Trailing partial batch: written under Fixed, dropped under Legacy
		let discarded = match params.layout {
			LineLayout::Fixed => {
				if !batch.is_empty() {
					write_line(&mut writer, &batch)?;
					lines += 1;
				}
				0
			}
			LineLayout::Legacy => batch.len() as u64,
		};

		writer.flush()?;
		Ok((lines, discarded))
	}
}

/// Writes one line: every word followed by two spaces, then a newline.
fn write_line<W: Write>(writer: &mut W, batch: &[&str]) -> std::io::Result<()> {
	for word in batch {
		write!(writer, "{word}  ")?;
	}
	writeln!(writer)
}
