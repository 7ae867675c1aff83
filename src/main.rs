use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process::ExitCode;
use word_scramble::cli::{CliInterface, parse_cli};
use word_scramble::logging::init_logging;
use word_scramble::{ConfigurationError, WordListDictionary, game_loop, locate_word_list};

fn run() -> Result<(), ConfigurationError> {
    let cli = parse_cli();
    init_logging(cli.verbose);

    let word_list = locate_word_list(cli.word_list_path.as_deref())?;
    if word_list.is_empty() {
        return Err(ConfigurationError::EmptyWordList);
    }
    log::info!("Loaded {} root words", word_list.len());

    let dictionary = WordListDictionary::locate(cli.dictionary_path.as_deref())?;
    log::info!("Dictionary has {} words", dictionary.len());

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let stdin = io::stdin();
    let mut interface = CliInterface::new(stdin.lock());
    game_loop(&word_list, &dictionary, &mut interface, &mut rng)?;
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
