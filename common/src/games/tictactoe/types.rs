use serde::{Deserialize, Serialize};

/// Content of a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::PlayerOne => Some(Mark::PlayerTwo),
            Mark::PlayerTwo => Some(Mark::PlayerOne),
            Mark::Empty => None,
        }
    }

    pub fn player(&self) -> Option<Player> {
        match self {
            Mark::PlayerOne => Some(Player::Human),
            Mark::PlayerTwo => Some(Player::Bot),
            Mark::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Mark::Empty
    }

    pub fn name(&self) -> &'static str {
        match self.player() {
            Some(player) => player.name(),
            None => "nobody",
        }
    }
}

/// The two seats at the table. The human always plays `Mark::PlayerOne`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Human,
    Bot,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::Human => Player::Bot,
            Player::Bot => Player::Human,
        }
    }

    pub fn mark(self) -> Mark {
        match self {
            Player::Human => Mark::PlayerOne,
            Player::Bot => Mark::PlayerTwo,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Human => "You",
            Player::Bot => "the bot",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    AwaitingMove,
    Won(Player),
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::AwaitingMove)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::Human.other(), Player::Bot);
        assert_eq!(Player::Bot.other(), Player::Human);
    }

    #[test]
    fn test_marks_and_names() {
        assert_eq!(Player::Human.mark(), Mark::PlayerOne);
        assert_eq!(Player::Bot.mark(), Mark::PlayerTwo);
        assert_eq!(Mark::Empty.name(), "nobody");
        assert_eq!(Mark::PlayerOne.name(), "You");
        assert_eq!(Mark::PlayerTwo.name(), "the bot");
        assert_eq!(Mark::PlayerOne.opponent(), Some(Mark::PlayerTwo));
        assert_eq!(Mark::Empty.opponent(), None);
    }

    #[test]
    fn test_status() {
        assert!(!GameStatus::AwaitingMove.is_over());
        assert!(GameStatus::Draw.is_over());
        assert_eq!(GameStatus::Won(Player::Bot).winner(), Some(Player::Bot));
        assert_eq!(GameStatus::Draw.winner(), None);
    }
}
