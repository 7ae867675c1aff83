// Library interface for word-scramble
// This allows integration tests to access internal modules

pub mod cli;
pub mod dictionary;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod wordlist;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_props_validation;

// Re-export commonly used items for easier testing
pub use dictionary::{SpellChecker, WordListDictionary};
pub use error::{ConfigurationError, RejectionReason};
pub use game_state::{GameInterface, GameSession, UserAction, ValidatedWord, game_loop};
pub use wordlist::{load_word_list_from_file, load_word_list_from_str, locate_word_list};
