//! A terminal snake game.
//!
//! The rules live in [`engine`] and know nothing about the terminal; the
//! [`ticker`] paces the engine, and [`game`] wires it to crossterm input and
//! the renderer in [`term`].

pub mod board;
pub mod config;
pub mod engine;
pub mod game;
pub mod input;
pub mod snake;
pub mod snapshot;
pub mod term;
pub mod ticker;

pub type TermInt = u16;
pub type Coords = (u16, u16);

pub use board::{Board, Cell, CellKind, Position};
pub use config::GameConfig;
pub use engine::{GameEngine, GameObserver};
pub use snake::{Collision, Direction, Status, TickOutcome};
pub use snapshot::GameSnapshot;
pub use ticker::RunController;
