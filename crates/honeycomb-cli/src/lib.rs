//! Honeycomb CLI
//!
//! Reads a honeycomb file and a dictionary file, runs the word search and
//! prints the distinct words found, sorted, one per line.
//!
//! # Environment
//!
//! - `HONEYCOMB_DICT_MODE`: `skip` (default) drops dictionary words with
//!   characters outside 'A'..='Z'; `strict` rejects the dictionary
//! - `HONEYCOMB_MAX_WORD_LEN`: longest word to trace
//! - `HONEYCOMB_LOG`: tracing filter, falling back to `RUST_LOG`

pub mod config;
pub mod error;

use std::fs;
use std::io::Write;
use std::path::Path;

use honeycomb_lexicon::Trie;
use honeycomb_search::WordFinder;
use honeycomb_topology::HoneycombGrid;
use tracing::info;

pub use config::SearchConfig;
pub use error::{Error, Result};

/// Line printed when the search finds nothing.
pub const NO_RESULTS: &str = "No words found.";

/// Run one search. `args` are the positional arguments, program name
/// excluded. Returns the number of words written.
pub fn run<W: Write>(args: &[String], config: &SearchConfig, out: &mut W) -> Result<usize> {
    let [honeycomb_path, dictionary_path] = args else {
        return Err(Error::Usage(args.len()));
    };

    let honeycomb_text = read_input("honeycomb", honeycomb_path)?;
    let dictionary_text = read_input("dictionary", dictionary_path)?;

    let grid = HoneycombGrid::parse(&honeycomb_text)?;
    let trie = Trie::from_lines_with(dictionary_text.lines(), config.dict_mode)?;
    info!(
        layers = grid.layers(),
        cells = grid.cell_count(),
        words = trie.len(),
        "inputs loaded"
    );

    let report = WordFinder::with_options(&grid, &trie, config.finder_options()).search();
    info!(
        found = report.words.len(),
        steps = report.stats.steps,
        "search complete"
    );

    let words = report.words.into_sorted();
    write_results(out, &words)?;
    Ok(words.len())
}

/// Write words one per line, or [`NO_RESULTS`] if there are none.
///
/// `words` come from [`WordStore::into_sorted`](honeycomb_search::WordStore::into_sorted),
/// so they are already distinct and sorted.
pub fn write_results<W: Write>(out: &mut W, words: &[String]) -> Result<()> {
    if words.is_empty() {
        writeln!(out, "{}", NO_RESULTS)?;
    }
    for word in words {
        writeln!(out, "{}", word)?;
    }
    out.flush()?;
    Ok(())
}

fn read_input(role: &'static str, path: &str) -> Result<String> {
    let path = Path::new(path);
    fs::read_to_string(path).map_err(|source| Error::MissingInput {
        role,
        path: path.to_path_buf(),
        source,
    })
}

/// Print usage to stderr.
pub fn print_usage() {
    eprintln!("honeycomb - find dictionary words traced through a hexagonal honeycomb");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  honeycomb <honeycomb.txt> <dictionary.txt>");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  HONEYCOMB_DICT_MODE     skip | strict (default: skip)");
    eprintln!("  HONEYCOMB_MAX_WORD_LEN  Longest word to trace (default: unbounded)");
    eprintln!("  HONEYCOMB_LOG           Log filter (default: RUST_LOG, then warn)");
}
