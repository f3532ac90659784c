use crate::error::MoveError;
use crate::events::GameEvent;
use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::{calculate_move, calculate_opening_move};
use super::settings::TicTacToeSettings;
use super::types::{GameStatus, Player, Position};
use super::win_detector::{Endgame, detect_endgame};

/// Game engine for one widget instance.
///
/// Every entry point runs the whole synchronous chain a single input causes
/// (move, endgame check, turn switch, bot reply) and returns the signals it
/// produced, in order.
#[derive(Debug)]
pub struct TicTacToeGameState {
    board: Board,
    current_player: Player,
    starting_player: Player,
    status: GameStatus,
    last_move: Option<Position>,
    rng: SessionRng,
}

impl TicTacToeGameState {
    /// Builds the engine and starts the first round. The returned events
    /// include the bot's opening move when it goes first.
    pub fn new(settings: &TicTacToeSettings, rng: SessionRng) -> (Self, Vec<GameEvent>) {
        let first_player = if settings.bot_go_first {
            Player::Bot
        } else {
            Player::Human
        };

        let mut state = Self {
            board: Board::new(settings.side_size),
            current_player: first_player,
            starting_player: first_player,
            status: GameStatus::AwaitingMove,
            last_move: None,
            rng,
        };
        log!(
            "new {0}x{0} game, rng seed {1}",
            settings.side_size,
            state.rng.seed()
        );

        let events = state.start(Some(first_player));
        (state, events)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn starting_player(&self) -> Player {
        self.starting_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Input entry point. A click on a finished game starts a new round.
    pub fn click(&mut self, pos: Position) -> Vec<GameEvent> {
        if self.is_over() {
            self.reset()
        } else {
            self.apply_move(pos)
        }
    }

    /// Plays `pos` for the current player. A rejected move leaves the game
    /// untouched and yields a `WrongInput` event.
    pub fn apply_move(&mut self, pos: Position) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let _ = self.play(pos, &mut events);
        events
    }

    /// Starts a round. `None` hands the first move to whoever did not start
    /// the previous round.
    pub fn start(&mut self, first_player: Option<Player>) -> Vec<GameEvent> {
        let mut events = Vec::new();
        self.start_round(first_player, &mut events);
        events
    }

    pub fn reset(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        self.board.clear();
        self.last_move = None;
        log!("board cleared");

        events.push(GameEvent::Redraw);
        events.push(GameEvent::message("new game started"));
        events.push(GameEvent::Reset);

        self.start_round(None, &mut events);
        events
    }

    /// Re-runs endgame detection on the current board.
    pub fn check_endgame(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        self.detect_endgame(&mut events);
        events
    }

    fn start_round(&mut self, first_player: Option<Player>, events: &mut Vec<GameEvent>) {
        self.status = GameStatus::AwaitingMove;
        self.starting_player = first_player.unwrap_or(self.starting_player.other());
        self.current_player = self.starting_player;
        events.push(GameEvent::message(format!(
            "{} will start this game",
            self.starting_player.name()
        )));

        if self.current_player == Player::Bot {
            let pos = calculate_opening_move(self.board.size(), &mut self.rng);
            log!("bot opens at {}:{}", pos.x, pos.y);
            self.bot_plays(pos, events);
        }
    }

    fn play(&mut self, pos: Position, events: &mut Vec<GameEvent>) -> Result<(), MoveError> {
        let player = self.current_player;
        if let Err(reason) = self.validate_move(pos) {
            log!("rejected move {}:{} by {}: {}", pos.x, pos.y, player.name(), reason);
            let complaint = match reason {
                MoveError::OccupiedCell(_) => Some("occupied cell"),
                MoveError::OutOfBounds { .. } => Some("outside the board at"),
                MoveError::GameOver => None,
            };
            if let Some(complaint) = complaint {
                events.push(GameEvent::message(format!(
                    "!!! {} played {} {}:{}, please play another.",
                    player.name(),
                    complaint,
                    pos.x,
                    pos.y
                )));
            }
            events.push(GameEvent::WrongInput {
                position: pos,
                reason: reason.clone(),
            });
            return Err(reason);
        }

        events.push(GameEvent::message(format!(
            "{} played cell {}:{}",
            player.name(),
            pos.x,
            pos.y
        )));
        self.board.place(pos, player.mark())?;
        self.last_move = Some(pos);
        events.push(GameEvent::Redraw);
        events.push(GameEvent::CellPlayed);

        if !self.detect_endgame(events) {
            self.alternate_turn(events);
        }
        Ok(())
    }

    fn validate_move(&self, pos: Position) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        self.board.is_valid_move(pos)
    }

    /// Returns `true` when the game is over.
    fn detect_endgame(&mut self, events: &mut Vec<GameEvent>) -> bool {
        match detect_endgame(&self.board) {
            Some(Endgame::Win { player, line }) => {
                self.board.mark_winning(&line);
                self.status = GameStatus::Won(player);
                log!("{} won on {:?}", player.name(), line.kind());
                events.push(GameEvent::message(format!(
                    "{} won the game ! click on a cell to start a new match !",
                    player.name()
                )));
                events.push(GameEvent::Redraw);
                true
            }
            Some(Endgame::Draw) => {
                self.status = GameStatus::Draw;
                log!("draw");
                events.push(GameEvent::message("Nobody won, click to start a new game"));
                true
            }
            None => false,
        }
    }

    fn alternate_turn(&mut self, events: &mut Vec<GameEvent>) {
        self.current_player = self.current_player.other();
        if self.current_player == Player::Bot {
            self.bot_turn(events);
        }
    }

    fn bot_turn(&mut self, events: &mut Vec<GameEvent>) {
        match calculate_move(&self.board, &mut self.rng) {
            Ok(pos) => {
                log!("bot picks {}:{}", pos.x, pos.y);
                self.bot_plays(pos, events);
            }
            Err(err) => {
                log!("bot could not move: {}", err);
                events.push(GameEvent::message(format!("error: {}", err)));
            }
        }
    }

    /// The bot's move goes through the same path as a click.
    fn bot_plays(&mut self, pos: Position, events: &mut Vec<GameEvent>) {
        events.push(GameEvent::CellClicked(pos));
        let _ = self.play(pos, events);
    }
}
