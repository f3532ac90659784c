use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::config::Validate;
use crate::error::ConfigError;
use crate::events::{EventBus, EventKind, GameEvent};
use crate::games::SessionRng;
use crate::id_generator::generate_instance_id;
use crate::identifiers::InstanceId;
use crate::log;
use crate::scaffold::{MinigameUi, setup_base_ui};
use super::game_state::TicTacToeGameState;
use super::settings::TicTacToeOptions;
use super::types::Position;
use super::view::render_board;

/// One embeddable tic-tac-toe instance: its own engine, event bus and
/// scaffold. Instances share nothing with each other.
pub struct TicTacToeWidget {
    id: InstanceId,
    options: TicTacToeOptions,
    events: EventBus,
    game: TicTacToeGameState,
    ui: Rc<RefCell<MinigameUi>>,
    redraw_pending: Rc<std::cell::Cell<bool>>,
}

impl TicTacToeWidget {
    pub fn new(options: TicTacToeOptions, rng: SessionRng) -> Result<Self, ConfigError> {
        options.validate().map_err(ConfigError::Validation)?;

        let id = generate_instance_id();
        let mut events = EventBus::new(id.clone());
        let ui = setup_base_ui(&mut events, &options.minigame);

        let redraw_pending = Rc::new(std::cell::Cell::new(true));
        let flag = redraw_pending.clone();
        events.on(EventKind::Redraw, move |_| flag.set(true));

        let (game, startup) = TicTacToeGameState::new(&options.settings(), rng);
        events.send_all(&startup);
        log!("tictactoe instance {} ready", id);

        Ok(Self {
            id,
            options,
            events,
            game,
            ui,
            redraw_pending,
        })
    }

    pub fn id(&self) -> &InstanceId {
        &self.id
    }

    pub fn options(&self) -> &TicTacToeOptions {
        &self.options
    }

    pub fn game(&self) -> &TicTacToeGameState {
        &self.game
    }

    pub fn ui(&self) -> Ref<'_, MinigameUi> {
        self.ui.borrow()
    }

    /// Subscription point for the view layer.
    pub fn events_mut(&mut self) -> &mut EventBus {
        &mut self.events
    }

    /// Feeds a cell click through the bus and the engine, publishing every
    /// resulting signal. Returns those signals.
    pub fn click(&mut self, pos: Position) -> Vec<GameEvent> {
        self.events.send(&GameEvent::CellClicked(pos));
        let produced = self.game.click(pos);
        self.events.send_all(&produced);
        produced
    }

    /// Clears and returns the "board needs repainting" flag.
    pub fn take_redraw(&self) -> bool {
        self.redraw_pending.replace(false)
    }

    pub fn render_board(&self) -> String {
        render_board(self.game.board(), &self.options)
    }

    pub fn render(&self) -> String {
        self.ui.borrow().render(&self.render_board())
    }
}
