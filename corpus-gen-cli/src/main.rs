use std::fs;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use corpus_gen_core::corpus::generator::CorpusGenerator;
use corpus_gen_core::corpus::params::{GenerateParams, LineLayout};
use corpus_gen_core::corpus::source::WordSource;

mod words;

/// Generate text fixture files filled with randomly sampled words.
#[derive(Parser)]
#[command(name = "corpus-gen", version, about)]
struct Cli {
    /// Newline-separated word-list file; the bundled English list is used if omitted
    #[arg(long)]
    word_list: Option<PathBuf>,

    /// Number of files to generate
    #[arg(short = 'n', long, default_value_t = 99)]
    files: usize,

    /// Number of word draws per file
    #[arg(short, long, default_value_t = 200_000)]
    words: usize,

    /// Output filename prefix; files are named `{prefix}_{index}.txt`
    #[arg(short, long, default_value = "test")]
    prefix: String,

    /// Output directory, created if missing
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Words per output line
    #[arg(long, default_value_t = 25)]
    words_per_line: usize,

    /// RNG seed for reproducible corpora
    #[arg(long)]
    seed: Option<u64>,

    /// Reproduce the historical line layout (2-word first line, dropped tail)
    #[arg(long)]
    legacy_layout: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    if !cli.output_dir.exists() {
        fs::create_dir_all(&cli.output_dir)?;
    }

    // Load the word source: an external list if given, the bundled one otherwise
    let source = match &cli.word_list {
        Some(path) => WordSource::from_file(path)?,
        None => WordSource::from_lines(words::ENGLISH),
    };
    info!("loaded {} unique words", source.len());

    let mut params = GenerateParams::default();
    params.file_count = cli.files;
    params.words_per_file = cli.words;
    params.file_prefix = cli.prefix;
    params.output_dir = cli.output_dir;
    params.layout = if cli.legacy_layout {
        LineLayout::Legacy
    } else {
        LineLayout::Fixed
    };
    params.set_words_per_line(cli.words_per_line)?;

    // A fixed seed makes the whole corpus reproducible, shuffle included
    let mut generator = match cli.seed {
        Some(seed) => CorpusGenerator::with_seed(source, seed),
        None => CorpusGenerator::new(source),
    }?;

    let report = generator.generate(&params)?;

    println!(
        "Done. Wrote {} files, {} lines, {} words drawn.",
        report.files_written, report.lines_written, report.words_drawn
    );
    if report.words_discarded > 0 {
        println!(
            "Discarded {} trailing words (legacy layout).",
            report.words_discarded
        );
    }

    Ok(())
}
