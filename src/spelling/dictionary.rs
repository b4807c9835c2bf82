//! Dictionary management for spelling correction.
//!
//! A [`SpellingDictionary`] is an insertion-ordered set of unique words. The
//! order is part of the ranking contract: suggestions at equal distance are
//! reported in the order the words were loaded.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::time::Instant;

use ahash::AHashMap;
use log::{debug, info};
use serde::de::{Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};

use crate::error::{Result, SpellRankError};

/// On-disk dictionary formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionaryFormat {
    /// A JSON object whose keys are the words; values are ignored.
    Json,
    /// Plain text with one word per line.
    WordList,
}

impl DictionaryFormat {
    /// Guess the format from a file extension (`.json` is JSON, anything else is a word list).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DictionaryFormat::Json,
            _ => DictionaryFormat::WordList,
        }
    }
}

/// An ordered, read-only set of known words.
#[derive(Debug, Clone, Default)]
pub struct SpellingDictionary {
    /// Words in enumeration order
    words: Vec<String>,
    /// Word -> position in `words`
    index: AHashMap<String, usize>,
}

impl SpellingDictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from words in order. Later duplicates are ignored.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dictionary = SpellingDictionary::new();
        for word in words {
            dictionary.insert(word);
        }
        dictionary
    }

    /// Append a word. Returns `false` if the word was already present, in
    /// which case its original position is kept.
    pub fn insert<S: Into<String>>(&mut self, word: S) -> bool {
        let word = word.into();
        if self.index.contains_key(&word) {
            return false;
        }
        self.index.insert(word.clone(), self.words.len());
        self.words.push(word);
        true
    }

    /// Exact, case-sensitive membership.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Enumeration position of a word.
    pub fn position(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    /// All words in enumeration order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Get the total number of unique words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Parse a JSON object mapping words to arbitrary values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| SpellRankError::dictionary_load(format!("invalid JSON dictionary: {e}")))
    }

    /// Parse a JSON object mapping words to arbitrary values from a reader.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader)
            .map_err(|e| SpellRankError::dictionary_load(format!("invalid JSON dictionary: {e}")))
    }

    /// Read a word list with one word per line. Blank lines are skipped.
    pub fn from_word_list<R: BufRead>(reader: R) -> Result<Self> {
        let mut dictionary = SpellingDictionary::new();

        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                dictionary.insert(word);
            }
        }

        Ok(dictionary)
    }

    /// Load dictionary from a JSON file (`{"word": value, ...}`).
    pub fn load_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load(path, DictionaryFormat::Json)
    }

    /// Load dictionary from a text file with one word per line.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load(path, DictionaryFormat::WordList)
    }

    /// Load a dictionary file in the given format.
    ///
    /// Missing or unreadable files are reported as
    /// [`SpellRankError::DictionaryLoad`]; there is no empty fallback.
    pub fn load<P: AsRef<Path>>(path: P, format: DictionaryFormat) -> Result<Self> {
        let path = path.as_ref();
        let start_time = Instant::now();

        let file = File::open(path).map_err(|e| {
            SpellRankError::dictionary_load(format!("cannot open {}: {e}", path.display()))
        })?;
        let reader = BufReader::new(file);

        let dictionary = match format {
            DictionaryFormat::Json => Self::from_json_reader(reader),
            DictionaryFormat::WordList => Self::from_word_list(reader),
        }
        .map_err(|e| match e {
            SpellRankError::DictionaryLoad(msg) => {
                SpellRankError::dictionary_load(format!("{}: {msg}", path.display()))
            }
            other => SpellRankError::dictionary_load(format!("{}: {other}", path.display())),
        })?;

        info!(
            "Loaded {} words from {}",
            dictionary.len(),
            path.display()
        );
        debug!("Dictionary load took {:?}", start_time.elapsed());

        Ok(dictionary)
    }
}

impl<S: Into<String>> FromIterator<S> for SpellingDictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        SpellingDictionary::from_words(iter)
    }
}

struct DictionaryVisitor;

impl<'de> Visitor<'de> for DictionaryVisitor {
    type Value = SpellingDictionary;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object mapping words to values")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut dictionary = SpellingDictionary::new();
        while let Some(word) = map.next_key::<String>()? {
            map.next_value::<IgnoredAny>()?;
            dictionary.insert(word);
        }
        Ok(dictionary)
    }
}

impl<'de> Deserialize<'de> for SpellingDictionary {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(DictionaryVisitor)
    }
}
