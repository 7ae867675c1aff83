use crate::dictionary::SpellChecker;
use crate::error::{ConfigurationError, RejectionReason};
use crate::{debug_log, info_log};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;

const MIN_WORD_LENGTH: usize = 3;

/// A candidate that passed every check, normalised to trimmed lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedWord(String);

impl ValidatedWord {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Points the word is worth: one per letter.
    #[must_use]
    pub fn points(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for ValidatedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ValidatedWord> for String {
    fn from(word: ValidatedWord) -> Self {
        word.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    root_word: String,
    used_words: Vec<String>,
    score: usize,
}

/// Trim surrounding whitespace and lowercase, the form every check works on.
#[must_use]
pub fn normalize(candidate: &str) -> String {
    candidate.trim().to_lowercase()
}

#[must_use]
pub fn is_long_enough(word: &str) -> bool {
    word.chars().count() >= MIN_WORD_LENGTH
}

#[must_use]
pub fn is_original(word: &str, used_words: &[String]) -> bool {
    !used_words.iter().any(|used| used == word)
}

/// True when every letter of `word` can be taken from `root_word`, each
/// letter of the root used at most once, with at least one root letter left
/// over. The root word and its full-length anagrams are not possible.
#[must_use]
pub fn is_possible(word: &str, root_word: &str) -> bool {
    let mut remaining: Vec<char> = root_word.chars().collect();
    for letter in word.chars() {
        match remaining.iter().position(|&c| c == letter) {
            Some(pos) => {
                remaining.swap_remove(pos);
            }
            None => return false,
        }
    }
    !remaining.is_empty()
}

impl GameSession {
    /// Start a game on a random root word from `word_list`.
    pub fn new_game<R: Rng + ?Sized>(
        word_list: &[String],
        rng: &mut R,
    ) -> Result<Self, ConfigurationError> {
        let root_word = word_list
            .choose(rng)
            .ok_or(ConfigurationError::EmptyWordList)?;
        info_log!("New game with root word '{}'", root_word);
        Ok(Self::with_root_word(root_word))
    }

    /// Start a game on a known root word.
    #[must_use]
    pub fn with_root_word(root_word: &str) -> Self {
        Self {
            root_word: normalize(root_word),
            used_words: Vec::new(),
            score: 0,
        }
    }

    /// Reset this session in place with a fresh random root word. On error
    /// the session is left as it was.
    pub fn restart<R: Rng + ?Sized>(
        &mut self,
        word_list: &[String],
        rng: &mut R,
    ) -> Result<(), ConfigurationError> {
        *self = Self::new_game(word_list, rng)?;
        Ok(())
    }

    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first.
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Run the checks in order: length, originality, spellability from the
    /// root word, then the dictionary. The first failure wins.
    pub fn validate<S: SpellChecker + ?Sized>(
        &self,
        candidate: &str,
        speller: &S,
    ) -> Result<ValidatedWord, RejectionReason> {
        let word = normalize(candidate);

        if !is_long_enough(&word) {
            return Err(RejectionReason::TooShort);
        }
        if !is_original(&word, &self.used_words) {
            return Err(RejectionReason::Duplicate);
        }
        if !is_possible(&word, &self.root_word) {
            return Err(RejectionReason::NotPossible);
        }
        if !speller.is_real(&word) {
            return Err(RejectionReason::NotReal);
        }
        Ok(ValidatedWord(word))
    }

    /// Validate and, on success, record the word and add its points.
    pub fn accept<S: SpellChecker + ?Sized>(
        &mut self,
        candidate: &str,
        speller: &S,
    ) -> Result<ValidatedWord, RejectionReason> {
        let word = match self.validate(candidate, speller) {
            Ok(word) => word,
            Err(reason) => {
                debug_log!("Rejected '{}': {:?}", candidate.trim(), reason);
                return Err(reason);
            }
        };
        self.used_words.insert(0, word.as_str().to_string());
        self.score += word.points();
        info_log!("Accepted '{}', score now {}", word, self.score);
        Ok(word)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Submit(String),
    NewGame,
    Exit,
}

/// Whatever presents the game to the player.
pub trait GameInterface {
    fn display_new_game(&mut self, session: &GameSession);
    /// `None` means nothing to act on, ask again.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_accepted(&mut self, word: &ValidatedWord, session: &GameSession);
    fn display_rejection(&mut self, reason: RejectionReason, session: &GameSession);
    fn display_exit_message(&mut self, session: &GameSession);
}

/// Play until the interface asks to exit. Returns the final session.
pub fn game_loop<I, S, R>(
    word_list: &[String],
    speller: &S,
    interface: &mut I,
    rng: &mut R,
) -> Result<GameSession, ConfigurationError>
where
    I: GameInterface + ?Sized,
    S: SpellChecker + ?Sized,
    R: Rng + ?Sized,
{
    let mut session = GameSession::new_game(word_list, rng)?;
    interface.display_new_game(&session);

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };

        match action {
            UserAction::Submit(candidate) => match session.accept(&candidate, speller) {
                Ok(word) => interface.display_accepted(&word, &session),
                Err(reason) => interface.display_rejection(reason, &session),
            },
            UserAction::NewGame => {
                session.restart(word_list, rng)?;
                interface.display_new_game(&session);
            }
            UserAction::Exit => {
                interface.display_exit_message(&session);
                log::info!("Game over, final score {}", session.score());
                return Ok(session);
            }
        }
    }
}
