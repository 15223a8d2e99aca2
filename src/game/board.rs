use crate::error::EngineError;

use super::analysis::{self, GameOutcome};
use super::grid::Grid;
use super::lines::has_four_in_a_row;
use super::player::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// The authoritative board owned by the game loop.
///
/// Unlike the search engine, which only ever builds new grids, the host board
/// is mutated in place as moves are played. Win detection goes through the
/// same line scanner the engine uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
}

impl Board {
    /// Empty board of the given size.
    pub fn new(rows: usize, cols: usize) -> Self {
        Board {
            grid: Grid::new(rows, cols),
        }
    }

    pub fn from_grid(grid: Grid) -> Self {
        Board { grid }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// True if there is space for a new piece in `col`
    pub fn is_valid_location(&self, col: usize) -> bool {
        self.grid.is_column_open(col)
    }

    /// The row a piece dropped into `col` would land on
    pub fn next_open_row(&self, col: usize) -> Option<usize> {
        self.grid.next_open_row(col)
    }

    /// Drop `player`'s piece into `col` and report the landing row.
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, EngineError> {
        let row = self
            .grid
            .next_open_row(col)
            .ok_or(EngineError::InvalidColumn { column: col })?;
        self.grid.set(row, col, player.to_cell());
        Ok(row)
    }

    /// True if `player` has four in a row on this board
    pub fn is_winning_position(&self, player: Player) -> bool {
        has_four_in_a_row(&self.grid, player)
    }

    pub fn is_full(&self) -> bool {
        self.grid.is_full()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        analysis::outcome(&self.grid)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(ROWS, COLS)
    }
}
