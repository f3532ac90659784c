use crate::error::MoveError;
use crate::games::tictactoe::Position;

/// Signal names shared by the engine and the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    CellClicked,
    CellPlayed,
    Redraw,
    Message,
    WrongInput,
    Reset,
}

impl EventKind {
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::CellClicked => "cellClicked",
            EventKind::CellPlayed => "cellPlayed",
            EventKind::Redraw => "redraw",
            EventKind::Message => "message",
            EventKind::WrongInput => "wrongInput",
            EventKind::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A cell was picked, by the human or by the bot.
    CellClicked(Position),
    /// A move was accepted and written to the board.
    CellPlayed,
    Redraw,
    Message(String),
    WrongInput { position: Position, reason: MoveError },
    Reset,
}

impl GameEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::CellClicked(_) => EventKind::CellClicked,
            GameEvent::CellPlayed => EventKind::CellPlayed,
            GameEvent::Redraw => EventKind::Redraw,
            GameEvent::Message(_) => EventKind::Message,
            GameEvent::WrongInput { .. } => EventKind::WrongInput,
            GameEvent::Reset => EventKind::Reset,
        }
    }

    pub fn message(text: impl Into<String>) -> Self {
        GameEvent::Message(text.into())
    }

    pub fn as_message(&self) -> Option<&str> {
        match self {
            GameEvent::Message(text) => Some(text),
            _ => None,
        }
    }
}
