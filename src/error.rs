use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal problems with the game's resources. These stop the program.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("The word list is empty, there is no root word to start a game with")]
    EmptyWordList,
    #[error("Could not read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a submitted word was turned down. Always recoverable.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    #[error("Word too short")]
    TooShort,
    #[error("Word used already")]
    Duplicate,
    #[error("Word not possible")]
    NotPossible,
    #[error("Word not recognized")]
    NotReal,
}

impl RejectionReason {
    /// Longer explanation shown under the title.
    #[must_use]
    pub fn message(self, root_word: &str) -> String {
        match self {
            Self::TooShort => "Try words with more than two letters.".to_string(),
            Self::Duplicate => "Be more original.".to_string(),
            Self::NotPossible => format!("You can't spell that word from '{root_word}'!"),
            Self::NotReal => "You can't just make them up, you know!".to_string(),
        }
    }
}
