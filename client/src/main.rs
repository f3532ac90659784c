mod config;
mod offline;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use minigames_common::config::Validate;
use minigames_common::error::ConfigError;
use minigames_common::games::SessionRng;
use minigames_common::games::tictactoe::TicTacToeWidget;
use minigames_common::{log, logger};

use config::get_config_manager;
use offline::run_tictactoe_game;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against a heuristic bot")]
struct Args {
    /// YAML config file (defaults to tictactoe_config.yaml next to the binary)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective config to the config file and exit
    #[arg(long)]
    write_default_config: bool,

    #[arg(long)]
    side_size: Option<usize>,

    #[arg(long, conflicts_with = "human_first")]
    bot_first: bool,

    #[arg(long)]
    human_first: bool,

    /// Seed for the bot's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Log engine activity to stderr
    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.verbose {
        let prefix = args.use_log_prefix.then(|| "TicTacToe".to_string());
        logger::init_logger(prefix);
    }

    let manager = get_config_manager(args.config.as_deref());
    let mut config = manager.get_config()?;

    if let Some(side_size) = args.side_size {
        config.tictactoe.side_size = side_size;
    }
    if args.bot_first {
        config.tictactoe.bot_go_first = true;
    }
    if args.human_first {
        config.tictactoe.bot_go_first = false;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate().map_err(ConfigError::Validation)?;

    if args.write_default_config {
        manager.set_config(&config)?;
        log!("config written");
        return Ok(());
    }

    let rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("starting with seed {}", rng.seed());

    let mut widget = TicTacToeWidget::new(config.tictactoe, rng)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_tictactoe_game(&mut widget, stdin.lock(), &mut stdout)?;

    Ok(())
}
