//! Command implementation for the spellrank CLI.

use std::io::{self, Write};
use std::time::Instant;

use log::{debug, info};

use crate::cli::args::SpellRankArgs;
use crate::cli::output::output_result;
use crate::error::{Result, SpellRankError};
use crate::spelling::{SpellCheck, SpellingDictionary, SuggestionEngine};

/// Execute the CLI command, printing to standard output.
pub fn execute_command(args: SpellRankArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&args, &mut out)
}

/// Check the word and write the result to `out`.
pub fn run<W: Write>(args: &SpellRankArgs, out: &mut W) -> Result<()> {
    let check = check_word(args)?;
    output_result(&args.word, &check, args, out)?;
    out.flush()?;
    Ok(())
}

/// Load the dictionary and check the word against it.
///
/// The dictionary lives for this call only and is dropped on return.
pub fn check_word(args: &SpellRankArgs) -> Result<SpellCheck> {
    validate_query(&args.word)?;

    let dictionary = SpellingDictionary::load(&args.dictionary, args.dictionary_format())?;
    if dictionary.is_empty() {
        info!("Dictionary {} contains no words", args.dictionary.display());
    }

    let engine = SuggestionEngine::with_config(&dictionary, args.suggestion_config())?;

    let start_time = Instant::now();
    let check = engine.check(&args.word);
    debug!("Checked '{}' in {:?}", args.word, start_time.elapsed());

    Ok(check)
}

/// Follow-up advice printed after an error, naming the dictionary that was tried.
pub fn error_hint(error: &SpellRankError, args: &SpellRankArgs) -> Option<String> {
    match error {
        SpellRankError::DictionaryLoad(_) => Some(format!(
            "could not use dictionary {}; pass --dictionary <PATH> or set SPELLRANK_DICTIONARY",
            args.dictionary.display()
        )),
        SpellRankError::InvalidArgument(_) => {
            Some("usage: spellrank [OPTIONS] <WORD>".to_string())
        }
        _ => None,
    }
}

/// Reject query tokens that are empty or only whitespace.
pub fn validate_query(word: &str) -> Result<()> {
    if word.trim().is_empty() {
        return Err(SpellRankError::invalid_argument(
            "query word must not be empty",
        ));
    }
    Ok(())
}
