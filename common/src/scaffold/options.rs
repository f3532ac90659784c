use serde::{Deserialize, Serialize};

use crate::config::Validate;

pub const MAX_TERMINAL_LINES: usize = 10_000;

/// Container, message box and terminal options shared by every minigame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinigameOptions {
    /// Width of the container in text columns.
    pub width: usize,
    pub show_border: bool,
    pub show_terminal: bool,
    pub terminal_max_lines: usize,
    pub message_prefix: String,
}

impl Default for MinigameOptions {
    fn default() -> Self {
        Self {
            width: 40,
            show_border: false,
            show_terminal: true,
            terminal_max_lines: 100,
            message_prefix: ">> ".to_string(),
        }
    }
}

impl Validate for MinigameOptions {
    fn validate(&self) -> Result<(), String> {
        if self.width < 10 {
            return Err("width must be at least 10 columns".to_string());
        }
        if self.terminal_max_lines == 0 || self.terminal_max_lines > MAX_TERMINAL_LINES {
            return Err(format!(
                "terminal_max_lines must be between 1 and {}",
                MAX_TERMINAL_LINES
            ));
        }
        Ok(())
    }
}
