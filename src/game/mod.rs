//! Core Connect Four logic: board representation, player types, and the
//! session-owning game engine (scores, history, undo, lifecycle).

mod board;
mod engine;
mod player;

pub use board::{Board, Cell, COLS, CONNECT, ROWS};
pub use engine::{GameEngine, GameStatus, MoveError, MoveRecord, Scores};
pub use player::Player;
