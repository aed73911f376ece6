//! Command-line word-search solver.
//!
//! Prints the leftover letters of a puzzle after searching a word list, or the
//! coordinates of individual words.
//!
//! # Usage
//!
//! ```sh
//! wordsearch --puzzle puzzle.txt --set words.txt
//! wordsearch --puzzle puzzle.txt --word python zero --show
//! RUST_LOG=debug wordsearch -p puzzle.txt -s words.txt --format json
//! ```

use std::{path::PathBuf, process, time::Duration};

use clap::{Parser, ValueEnum};
use serde::Serialize;
use wordsearch_solver::{
    FoundWord, LookupMiss, MatchPolicy, SearchOptions, SearchReport, SolverError, WordSearch,
    WordSet,
};

use crate::render::highlight;

mod render;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// The word search puzzle file.
    #[arg(short, long, value_name = "FILE")]
    puzzle: PathBuf,

    /// A file containing the words to search for. Takes precedence over `--word`.
    #[arg(short, long, value_name = "FILE")]
    set: Option<PathBuf>,

    /// A word to search for. Repeatable.
    #[arg(short, long = "word", value_name = "WORD", num_args = 1..)]
    words: Vec<String>,

    /// Skip words shorter than this. Negative values mean no minimum.
    #[arg(long, value_name = "N", default_value_t = 0, allow_negative_numbers = true)]
    min_length: isize,

    /// Report every occurrence of a word instead of the first one.
    #[arg(long)]
    all_occurrences: bool,

    /// Abort the search after this many milliseconds.
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Output format.
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    format: OutputFormat,

    /// Print the puzzle with the found words in uppercase.
    #[arg(long)]
    show: bool,
}

impl Args {
    fn search_options(&self) -> SearchOptions {
        let policy = if self.all_occurrences {
            MatchPolicy::AllOccurrences
        } else {
            MatchPolicy::FirstOccurrence
        };
        let options = SearchOptions::new()
            .with_min_length(self.min_length)
            .with_policy(policy);
        match self.timeout_ms {
            Some(ms) => options.with_timeout(Duration::from_millis(ms)),
            None => options,
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    found: &'a [FoundWord],
    misses: &'a [LookupMiss],
    #[serde(skip_serializing_if = "Option::is_none")]
    leftover: Option<String>,
}

fn main() {
    better_panic::install();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if args.set.is_none() && args.words.is_empty() {
        eprintln!("expected --set <FILE> or --word <WORD>...");
        process::exit(1);
    }

    if let Err(err) = run(&args) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), SolverError> {
    let mut puzzle = WordSearch::open(&args.puzzle)?;
    // The puzzle grid is lowercase
    let words = match &args.set {
        Some(path) => puzzle.load_word_list(path)?.to_lowercase(),
        None => args.words.iter().map(|word| word.to_lowercase()).collect::<WordSet>(),
    };

    let options = args.search_options();
    log::debug!(
        "searching {} for {} words with {options:?}",
        args.puzzle.display(),
        words.len()
    );
    let report = puzzle.find_all(Some(&words), &options)?.clone();
    let leftover = if args.set.is_some() {
        Some(puzzle.leftover_letters()?)
    } else {
        None
    };

    match args.format {
        OutputFormat::Text => print_text(&report, leftover.as_deref()),
        OutputFormat::Json => print_json(&report, leftover),
    }

    if args.show && !report.is_empty() {
        println!();
        println!("{}", highlight(puzzle.grid(), &report.matches()));
    }
    Ok(())
}

fn print_text(report: &SearchReport, leftover: Option<&str>) {
    if let Some(leftover) = leftover {
        println!("{leftover}");
        return;
    }
    for found in report.found() {
        println!("{} - coordinates: {}", found.word, found.result);
    }
}

fn print_json(report: &SearchReport, leftover: Option<String>) {
    let output = JsonOutput {
        found: report.found(),
        misses: report.misses(),
        leftover,
    };
    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("failed to serialize the report: {err}");
            process::exit(1);
        }
    }
}
