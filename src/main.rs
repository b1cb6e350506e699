//! Letter Boxed Solver - CLI
//!
//! Solve, analyze or batch-run Letter Boxed puzzles against a word list.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use letter_boxed::{
    commands::{SolveConfig, analyze_puzzle, load_puzzles, run_batch, solve_puzzle},
    output::{print_analysis_result, print_batch_statistics, print_solve_result},
    solver::{DEFAULT_MAX_WORDS, SolverConfig},
    wordlists::{
        SAMPLE_WORDS, SYSTEM_WORDLIST,
        loader::{load_from_file, words_from_slice},
    },
};
use log::{info, warn};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "letter_boxed",
    about = "Letter Boxed solver: shortest word chain using every letter of the box",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'system' (default, /usr/share/dict/words), 'embedded', or path to file
    #[arg(short = 'w', long, global = true, default_value = "system")]
    wordlist: String,

    /// Longest chain to search before giving up
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MAX_WORDS)]
    max_words: usize,

    /// Shortest legal word
    #[arg(long, global = true, default_value_t = 3)]
    min_length: usize,

    /// Run validation and search on a single thread
    #[arg(long, global = true)]
    sequential: bool,

    /// Show details; repeat to raise the log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a puzzle, e.g. "TUL-ECR-IOH-APS" or "TUL ECR IOH APS"
    Solve {
        /// Puzzle sides separated by spaces, commas, dashes or slashes
        puzzle: String,

        /// List up to N minimal solutions
        #[arg(short, long, value_name = "N")]
        all: Option<usize>,
    },

    /// Report what the dictionary offers for a puzzle without searching
    Analyze {
        /// Puzzle sides separated by spaces, commas, dashes or slashes
        puzzle: String,
    },

    /// Solve every puzzle in a file (one per line, '#' comments)
    Batch {
        /// File with one puzzle per line
        file: PathBuf,
    },
}

/// Load the dictionary selected by the -w flag
///
/// - "system": the platform word list, falling back to the embedded list if absent
/// - "embedded": the sample list compiled into the binary
/// - "<path>": one word per line
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<String>> {
    match wordlist_mode {
        "embedded" => Ok(words_from_slice(SAMPLE_WORDS)),
        "system" => match load_from_file(SYSTEM_WORDLIST) {
            Ok(words) => Ok(words),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("{SYSTEM_WORDLIST} not found, using the embedded word list");
                Ok(words_from_slice(SAMPLE_WORDS))
            }
            Err(e) => {
                Err(e).with_context(|| format!("failed to read word list {SYSTEM_WORDLIST}"))
            }
        },
        path => load_from_file(path).with_context(|| format!("failed to read word list {path}")),
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let words = load_wordlist(&cli.wordlist)?;
    info!("loaded {} words from '{}'", words.len(), cli.wordlist);

    let mut config = SolverConfig::new(cli.max_words).with_min_word_length(cli.min_length);
    if cli.sequential {
        config = config.sequential();
    }
    let verbose = cli.verbose > 0;

    match cli.command {
        Commands::Solve { puzzle, all } => run_solve_command(puzzle, all, config, verbose, &words),
        Commands::Analyze { puzzle } => run_analyze_command(&puzzle, config, &words),
        Commands::Batch { file } => run_batch_command(&file, config, verbose, &words),
    }
}

fn run_solve_command(
    puzzle: String,
    all: Option<usize>,
    config: SolverConfig,
    verbose: bool,
    words: &[String],
) -> Result<()> {
    let mut solve_config = SolveConfig::new(puzzle, config);
    if let Some(limit) = all {
        solve_config = solve_config.with_all(limit);
    }
    let result = solve_puzzle(&solve_config, words)
        .with_context(|| format!("invalid puzzle '{}'", solve_config.puzzle))?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(puzzle: &str, config: SolverConfig, words: &[String]) -> Result<()> {
    let result = analyze_puzzle(puzzle, words, config)
        .with_context(|| format!("invalid puzzle '{puzzle}'"))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_batch_command(
    file: &Path,
    config: SolverConfig,
    verbose: bool,
    words: &[String],
) -> Result<()> {
    let puzzles = load_puzzles(file)
        .with_context(|| format!("failed to read puzzle file {}", file.display()))?;

    println!("🎯 Solving {} puzzles...", puzzles.len());
    let stats = run_batch(&puzzles, words, config, true);
    print_batch_statistics(&stats, verbose);
    Ok(())
}
