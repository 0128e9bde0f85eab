mod config;
mod game_ui;
mod runner;

use std::path::PathBuf;

use clap::Parser;
use common::games::SessionRng;
use common::tictactoe::{BotType, TicTacToeGameState};
use common::{log, logger};

use config::{get_config_manager, Config};
use runner::run_game;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against the computer")]
struct Args {
    /// YAML config file, created with defaults if missing
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides the configured bot (minimax or random)
    #[arg(long)]
    bot: Option<BotType>,
    /// Seed for the random bot
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config: Config = get_config_manager(args.config).get_or_create_config()?;

    let bot_type = args.bot.unwrap_or(config.bot);
    let rng = SessionRng::from_seed(args.seed.or(config.seed));
    let seed = rng.seed();

    let mut game = TicTacToeGameState::new(bot_type, rng);
    log!("Starting game against {} bot (seed {})", game.bot_type(), seed);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_game(&mut game, &config, stdin.lock(), &mut stdout)?;

    log!("Client shut down");
    Ok(())
}
