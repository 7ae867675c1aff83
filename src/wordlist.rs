use crate::error::ConfigurationError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_START_WORDS: &str = include_str!("resources/start.txt");

const APP_DIR: &str = "word-scramble";
const WORD_LIST_FILE: &str = "start.txt";

fn normalize_line(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();
    if word.is_empty() { None } else { Some(word) }
}

pub fn load_word_list_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(normalize_line).collect()
}

pub fn load_word_list_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ConfigurationError> {
    let path = path.as_ref();
    let io_error = |source| ConfigurationError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize_line(&line.map_err(io_error)?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// `<config dir>/word-scramble/start.txt`, if the platform has a config dir.
#[must_use]
pub fn user_word_list_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(WORD_LIST_FILE))
}

/// Resolve the root word list: an explicit path, then the user's override
/// file if it exists, then the embedded list.
pub fn locate_word_list(explicit: Option<&Path>) -> Result<Vec<String>, ConfigurationError> {
    if let Some(path) = explicit {
        log::info!("Loading word list from {}", path.display());
        return load_word_list_from_file(path);
    }

    if let Some(path) = user_word_list_path().filter(|p| p.is_file()) {
        log::info!("Loading word list from {}", path.display());
        return load_word_list_from_file(&path);
    }

    log::info!("Using embedded word list");
    Ok(load_word_list_from_str(EMBEDDED_START_WORDS))
}
