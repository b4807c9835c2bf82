//! Command line argument parsing for spellrank using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::spelling::{DEFAULT_MAX_SUGGESTIONS, DictionaryFormat, SuggestionConfig};

/// Dictionary used when `--dictionary` is not given.
pub const DEFAULT_DICTIONARY_PATH: &str = "words_dictionary.json";

/// spellrank - check a word and suggest the closest dictionary words
#[derive(Parser, Debug, Clone)]
#[command(name = "spellrank")]
#[command(about = "Check the spelling of a word and suggest the closest dictionary words")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpellRankArgs {
    /// Word to check
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Dictionary file (JSON object of words, or one word per line)
    #[arg(
        short,
        long,
        value_name = "DICTIONARY",
        env = "SPELLRANK_DICTIONARY",
        default_value = DEFAULT_DICTIONARY_PATH
    )]
    pub dictionary: PathBuf,

    /// Dictionary file format (inferred from the extension if omitted)
    #[arg(long, value_enum)]
    pub dictionary_format: Option<DictionaryFormatArg>,

    /// Maximum number of suggestions to print
    #[arg(short, long, default_value_t = DEFAULT_MAX_SUGGESTIONS)]
    pub limit: usize,

    /// Ignore dictionary words farther than this edit distance
    #[arg(long)]
    pub max_distance: Option<usize>,

    /// Scan the dictionary on multiple threads
    #[arg(long)]
    pub parallel: bool,

    /// Number of scan threads (default: number of CPUs)
    #[arg(long, requires = "parallel")]
    pub threads: Option<usize>,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Print the edit distance next to each suggestion
    #[arg(long)]
    pub show_distance: bool,

    /// Verbosity level (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,
}

impl SpellRankArgs {
    /// Get the effective verbosity level (0=quiet, 1=normal, 2=verbose, 3+=debug)
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }

    /// Dictionary format from the flag, or guessed from the file name.
    pub fn dictionary_format(&self) -> DictionaryFormat {
        self.dictionary_format
            .map(DictionaryFormat::from)
            .unwrap_or_else(|| DictionaryFormat::from_path(&self.dictionary))
    }

    /// Ranking configuration described by these arguments.
    pub fn suggestion_config(&self) -> SuggestionConfig {
        SuggestionConfig {
            max_suggestions: self.limit,
            max_distance: self.max_distance,
            parallel: self.parallel,
            thread_pool_size: self.threads,
        }
    }
}

/// Dictionary formats accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionaryFormatArg {
    /// JSON object whose keys are the words
    Json,
    /// One word per line
    Words,
}

impl From<DictionaryFormatArg> for DictionaryFormat {
    fn from(arg: DictionaryFormatArg) -> Self {
        match arg {
            DictionaryFormatArg::Json => DictionaryFormat::Json,
            DictionaryFormatArg::Words => DictionaryFormat::WordList,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
