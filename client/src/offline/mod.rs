mod tictactoe_runner;

pub use tictactoe_runner::{Command, parse_command, run_tictactoe_game};
