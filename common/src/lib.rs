//! Minigame scaffolding and a tic-tac-toe engine with a heuristic bot.
//!
//! - [`games::tictactoe`]: board, line enumeration, engine, bot, widget
//! - [`events`]: per-instance publish/subscribe bus
//! - [`scaffold`]: message box and scrolling terminal
//! - [`config`]: YAML-backed, validated options
//! - [`error`]: typed errors

pub mod config;
pub mod error;
pub mod events;
pub mod games;
pub mod id_generator;
pub mod identifiers;
pub mod logger;
pub mod scaffold;

pub use identifiers::InstanceId;
