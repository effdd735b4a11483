//! Subword CLI
//!
//! Command-line front end for the subsequence word finder.

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use subword::config::log_filter;
use subword::progress::Spinner;
use subword::{baseline, Dictionary, Dispatcher, SearchConfig, DEFAULT_DICTIONARY_PATH};

#[derive(Parser)]
#[command(name = "subword")]
#[command(version)]
#[command(about = "Find dictionary words spelled by any ordered subset of some letters", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (ignored when RUST_LOG is set)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the dictionary in parallel
    Find {
        /// Letters to search
        letters: String,

        /// Newline-delimited dictionary file
        #[arg(short, long, env = "SUBWORD_DICT", default_value = DEFAULT_DICTIONARY_PATH)]
        dict: PathBuf,

        /// Longest word to accept (defaults to the number of letters)
        #[arg(short, long)]
        max_len: Option<usize>,

        /// Worker threads (defaults to one per core)
        #[arg(short = 'j', long, env = "SUBWORD_THREADS")]
        threads: Option<usize>,

        /// Also index a final dictionary line that has no newline
        #[arg(long)]
        keep_unterminated: bool,

        /// Print words alphabetically instead of in arrival order
        #[arg(long)]
        sorted: bool,

        /// Print only the number of matches
        #[arg(long)]
        count_only: bool,

        /// Show a spinner on stderr while searching
        #[arg(long)]
        progress: bool,
    },

    /// Count matches with the sequential brute-force enumerator
    Baseline {
        /// Letters to search
        letters: String,

        /// Newline-delimited dictionary file
        #[arg(short, long, env = "SUBWORD_DICT", default_value = DEFAULT_DICTIONARY_PATH)]
        dict: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let rust_log = std::env::var("RUST_LOG").ok();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(cli.verbose, rust_log.as_deref()))
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Find {
            letters,
            dict,
            max_len,
            threads,
            keep_unterminated,
            sorted,
            count_only,
            progress,
        } => {
            let mut config = SearchConfig::new()
                .with_dictionary_path(dict)
                .with_keep_unterminated(keep_unterminated);
            config.max_len = max_len;
            config.threads = threads;
            config.validate()?;

            let max_len = config.effective_max_len(&letters);
            let dictionary = Dictionary::load_with(&config.dictionary_path, max_len, config.scan_options())
                .context("cannot build dictionary index")?;
            info!(words = dictionary.len(), max_len, "dictionary loaded");

            let pool = config.thread_pool()?;
            let dispatcher = Dispatcher::new(&dictionary);

            let spinner = progress.then(|| Spinner::new("Searching..."));
            let start = Instant::now();
            let outcome = match &pool {
                Some(pool) => dispatcher.search_on(pool, &letters),
                None => dispatcher.search(&letters),
            };
            let elapsed = start.elapsed();
            if let Some(spinner) = spinner {
                spinner.finish();
            }

            let outcome = if sorted { outcome.sorted() } else { outcome };
            if !count_only {
                for word in &outcome.words {
                    println!("{}", word);
                }
            }
            println!("{}", outcome.count);
            info!(count = outcome.count, "search took {:.2?}", elapsed);
        }
        Commands::Baseline { letters, dict } => {
            let dictionary = Dictionary::load(&dict, letters.len()).context("cannot build dictionary index")?;

            let start = Instant::now();
            let count = baseline::count(&dictionary, &letters);
            let elapsed = start.elapsed();

            println!("{}", count);
            info!(count, "baseline took {:.2?}", elapsed);
        }
    }

    Ok(())
}
