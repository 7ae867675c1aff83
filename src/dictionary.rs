//! Spell checking for submitted words.
//!
//! The session only needs a yes/no answer for "is this a real word", so the
//! capability is a single-method trait. [`WordListDictionary`] answers it
//! from a newline-separated word list.

use crate::error::ConfigurationError;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/dictionary.txt");

/// Conventional location of the system word list on Unix systems.
pub const SYSTEM_DICTIONARY_PATH: &str = "/usr/share/dict/words";

pub trait SpellChecker {
    /// `word` is already trimmed and lowercased.
    fn is_real(&self, word: &str) -> bool;
}

impl<F> SpellChecker for F
where
    F: Fn(&str) -> bool,
{
    fn is_real(&self, word: &str) -> bool {
        self(word)
    }
}

#[derive(Debug, Clone, Default)]
pub struct WordListDictionary {
    words: HashSet<String>,
}

impl WordListDictionary {
    /// Build from newline-separated words. Entries with anything other than
    /// letters (possessives, abbreviations) are skipped.
    #[must_use]
    pub fn from_list(data: &str) -> Self {
        let words = data
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| !word.is_empty() && word.chars().all(char::is_alphabetic))
            .collect();
        Self { words }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| ConfigurationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_list(&data))
    }

    #[must_use]
    pub fn embedded() -> Self {
        Self::from_list(EMBEDDED_DICTIONARY)
    }

    /// Pick a dictionary: an explicit path (errors are fatal), then the
    /// system word list if present and readable, then the embedded one.
    pub fn locate(explicit: Option<&Path>) -> Result<Self, ConfigurationError> {
        if let Some(path) = explicit {
            log::info!("Loading dictionary from {}", path.display());
            return Self::from_file(path);
        }

        let system = PathBuf::from(SYSTEM_DICTIONARY_PATH);
        if system.is_file() {
            match Self::from_file(&system) {
                Ok(dictionary) if !dictionary.is_empty() => {
                    log::info!(
                        "Loaded {} words from {}",
                        dictionary.len(),
                        system.display()
                    );
                    return Ok(dictionary);
                }
                Ok(_) => log::warn!("{} is empty, using embedded dictionary", system.display()),
                Err(e) => log::warn!("{e}, using embedded dictionary"),
            }
        }

        log::info!("Using embedded dictionary");
        Ok(Self::embedded())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl SpellChecker for WordListDictionary {
    fn is_real(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}
