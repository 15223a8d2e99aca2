//! Pure queries over a grid: whose turn it is, which columns are playable,
//! what a move produces, and whether the game is over.

use crate::error::EngineError;

use super::grid::{Cell, Grid};
use super::lines::has_four_in_a_row;
use super::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Player to move next, from piece counts: equal counts mean Red.
///
/// Only meaningful for grids reachable by alternating play from empty.
pub fn side_to_move(grid: &Grid) -> Player {
    if grid.count(Cell::Red) == grid.count(Cell::Yellow) {
        Player::Red
    } else {
        Player::Yellow
    }
}

/// Open columns in ascending order. Empty on a full board.
pub fn legal_columns(grid: &Grid) -> Vec<usize> {
    (0..grid.cols())
        .filter(|&col| grid.is_column_open(col))
        .collect()
}

/// Return a new grid with `player`'s piece dropped into `column`.
///
/// The input grid is never modified.
pub fn apply_move(grid: &Grid, column: usize, player: Player) -> Result<Grid, EngineError> {
    let row = grid
        .next_open_row(column)
        .ok_or(EngineError::InvalidColumn { column })?;
    let mut next = grid.clone();
    next.set(row, column, player.to_cell());
    Ok(next)
}

pub fn is_won(grid: &Grid, player: Player) -> bool {
    has_four_in_a_row(grid, player)
}

/// Full board with no four-in-a-row for either side.
pub fn is_tie(grid: &Grid) -> bool {
    grid.is_full() && !is_won(grid, Player::Red) && !is_won(grid, Player::Yellow)
}

/// Classify a position. Red is checked first if, against the rules, both
/// sides have a line.
pub fn outcome(grid: &Grid) -> Option<GameOutcome> {
    if is_won(grid, Player::Red) {
        Some(GameOutcome::Winner(Player::Red))
    } else if is_won(grid, Player::Yellow) {
        Some(GameOutcome::Winner(Player::Yellow))
    } else if grid.is_full() {
        Some(GameOutcome::Draw)
    } else {
        None
    }
}
