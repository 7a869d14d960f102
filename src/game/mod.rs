//! Core Connect Four game logic: board representation, player types, and the
//! game state machine.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, Run, COLS, ROWS, RUN_LENGTH};
pub use player::Player;
pub use state::{GameState, GameStatus, MoveError, MoveOutcome};
