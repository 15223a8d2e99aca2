//! Core Connect Four game logic: the grid, the shared line scanner, position
//! analysis, and the host-side board and turn-tracking state.

pub mod analysis;
mod board;
mod grid;
pub mod lines;
mod player;
mod state;

pub use analysis::{apply_move, is_tie, is_won, legal_columns, side_to_move, GameOutcome};
pub use board::{Board, COLS, ROWS};
pub use grid::{Cell, Grid};
pub use lines::has_four_in_a_row;
pub use player::Player;
pub use state::{GameState, MoveError};
