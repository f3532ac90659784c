mod event_bus;
mod game_event;

pub use event_bus::EventBus;
pub use game_event::{EventKind, GameEvent};
