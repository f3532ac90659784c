use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::scaffold::MinigameOptions;
use super::types::Mark;

pub const MIN_SIDE_SIZE: usize = 1;
pub const MAX_SIDE_SIZE: usize = 20;

/// Widget options. Every field falls back to its default when absent, so a
/// config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicTacToeOptions {
    pub side_size: usize,
    pub bot_go_first: bool,
    pub symbol_empty: String,
    pub symbol_player1: String,
    pub symbol_player2: String,
    #[serde(flatten)]
    pub minigame: MinigameOptions,
}

impl Default for TicTacToeOptions {
    fn default() -> Self {
        Self {
            side_size: 3,
            bot_go_first: true,
            symbol_empty: " ".to_string(),
            symbol_player1: "O".to_string(),
            symbol_player2: "X".to_string(),
            minigame: MinigameOptions::default(),
        }
    }
}

impl TicTacToeOptions {
    pub fn symbol(&self, mark: Mark) -> &str {
        match mark {
            Mark::Empty => &self.symbol_empty,
            Mark::PlayerOne => &self.symbol_player1,
            Mark::PlayerTwo => &self.symbol_player2,
        }
    }

    pub fn settings(&self) -> TicTacToeSettings {
        TicTacToeSettings::from(self)
    }
}

impl Validate for TicTacToeOptions {
    fn validate(&self) -> Result<(), String> {
        if !(MIN_SIDE_SIZE..=MAX_SIDE_SIZE).contains(&self.side_size) {
            return Err(format!(
                "side_size must be between {} and {}",
                MIN_SIDE_SIZE, MAX_SIDE_SIZE
            ));
        }
        for (name, symbol) in [
            ("symbol_empty", &self.symbol_empty),
            ("symbol_player1", &self.symbol_player1),
            ("symbol_player2", &self.symbol_player2),
        ] {
            if symbol.is_empty() {
                return Err(format!("{} must not be empty", name));
            }
        }
        if self.symbol_player1 == self.symbol_player2 {
            return Err("symbol_player1 and symbol_player2 must differ".to_string());
        }
        self.minigame.validate()
    }
}

/// The part of the options the engine itself reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeSettings {
    pub side_size: usize,
    pub bot_go_first: bool,
}

impl Default for TicTacToeSettings {
    fn default() -> Self {
        TicTacToeOptions::default().settings()
    }
}

impl From<&TicTacToeOptions> for TicTacToeSettings {
    fn from(options: &TicTacToeOptions) -> Self {
        Self {
            side_size: options.side_size,
            bot_go_first: options.bot_go_first,
        }
    }
}
