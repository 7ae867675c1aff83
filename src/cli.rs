use crate::error::RejectionReason;
use crate::game_state::{GameInterface, GameSession, UserAction, ValidatedWord};
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

/// Word Scramble: spell as many words as you can from the root word
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited list of root words
    #[arg(short = 'w', long = "words")]
    pub word_list_path: Option<PathBuf>,

    /// Path to a newline-delimited dictionary used for the spell check
    #[arg(short = 'd', long = "dictionary")]
    pub dictionary_path: Option<PathBuf>,

    /// Seed for choosing root words, for repeatable games
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Increase logging verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

const NEW_GAME_COMMAND: &str = ":new";
const QUIT_COMMAND: &str = ":quit";

/// Turn one line of player input into an action. Blank lines yield `None`.
#[must_use]
pub fn parse_action(line: &str) -> Option<UserAction> {
    let input = line.trim();
    if input.is_empty() {
        return None;
    }
    if input.eq_ignore_ascii_case(NEW_GAME_COMMAND) {
        Some(UserAction::NewGame)
    } else if input.eq_ignore_ascii_case(QUIT_COMMAND) {
        Some(UserAction::Exit)
    } else {
        Some(UserAction::Submit(input.to_string()))
    }
}

pub fn display_new_game(session: &GameSession) {
    println!("\nNew game! Your word is: {}", session.root_word().to_uppercase());
    println!("Your score is: {}", session.score());
}

pub fn display_prompt(root_word: &str) {
    println!(
        "\nWrite a word using '{root_word}' ('{NEW_GAME_COMMAND}' for a new game, '{QUIT_COMMAND}' to quit):"
    );
}

pub fn display_used_words(session: &GameSession) {
    for word in session.used_words() {
        println!("  {word:<20} {}", word.chars().count());
    }
}

pub fn display_accepted(word: &ValidatedWord, session: &GameSession) {
    println!("'{word}' accepted, +{} points.", word.points());
    println!("Your score is: {}", session.score());
    display_used_words(session);
}

pub fn display_rejection(reason: RejectionReason, root_word: &str) {
    println!("{reason}: {}", reason.message(root_word));
}

pub fn display_exit_message(session: &GameSession) {
    println!(
        "Final score: {} ({} words from '{}').",
        session.score(),
        session.used_words().len(),
        session.root_word()
    );
}

/// Line-based implementation of the `GameInterface` trait
/// Reads one action per line from any BufRead and prints to stdout
pub struct CliInterface<R: BufRead> {
    reader: R,
    prompt: String,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            prompt: String::new(),
        }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_new_game(&mut self, session: &GameSession) {
        self.prompt = session.root_word().to_string();
        display_new_game(session);
    }

    fn read_action(&mut self) -> Option<UserAction> {
        display_prompt(&self.prompt);
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => Some(UserAction::Exit),
            Ok(_) => parse_action(&input),
            Err(e) => {
                log::error!("Failed to read input: {e}");
                Some(UserAction::Exit)
            }
        }
    }

    fn display_accepted(&mut self, word: &ValidatedWord, session: &GameSession) {
        display_accepted(word, session);
    }

    fn display_rejection(&mut self, reason: RejectionReason, session: &GameSession) {
        display_rejection(reason, session.root_word());
    }

    fn display_exit_message(&mut self, session: &GameSession) {
        display_exit_message(session);
    }
}
