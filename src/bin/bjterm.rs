//! Plays one round of blackjack in the terminal.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use bjterm::{Console, Game};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_target(false)
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    log::debug!("shuffling with seed {seed}");

    let mut input = Console::new();
    let mut output = Console::new();
    let mut game = Game::new(seed);

    match game.play(&mut input, &mut output) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("round aborted: {err}");
            ExitCode::FAILURE
        }
    }
}
