//! Four-in-a-row detection and window extraction.
//!
//! This is the single implementation of line scanning: the position analyzer,
//! the evaluator and the host [`Board`](super::Board) all go through it.

use super::grid::{Cell, Grid};
use super::player::Player;

/// Length of a winning line and of every scored window.
pub const WINDOW_LEN: usize = 4;

/// The four line directions on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row
    Horizontal,
    /// Bottom to top along a column
    Vertical,
    /// Bottom-left to top-right (/)
    DiagonalUp,
    /// Top-left to bottom-right (\)
    DiagonalDown,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalUp,
        Direction::DiagonalDown,
    ];

    /// (row step, column step) between consecutive cells of a window.
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalUp => (1, 1),
            Direction::DiagonalDown => (-1, 1),
        }
    }

    /// Every (row, col) from which a full window fits on the grid.
    fn starts(self, rows: usize, cols: usize) -> impl Iterator<Item = (usize, usize)> {
        let span = WINDOW_LEN - 1;
        let (row_range, col_range) = match self {
            Direction::Horizontal => (0..rows, 0..cols.saturating_sub(span)),
            Direction::Vertical => (0..rows.saturating_sub(span), 0..cols),
            Direction::DiagonalUp => (0..rows.saturating_sub(span), 0..cols.saturating_sub(span)),
            Direction::DiagonalDown => {
                let rows_range = if rows > span { span..rows } else { 0..0 };
                (rows_range, 0..cols.saturating_sub(span))
            }
        };
        row_range.flat_map(move |r| col_range.clone().map(move |c| (r, c)))
    }
}

/// Four consecutive cells along one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub direction: Direction,
    pub cells: [Cell; WINDOW_LEN],
}

impl Window {
    fn read(grid: &Grid, direction: Direction, row: usize, col: usize) -> Self {
        let (dr, dc) = direction.step();
        let cells = std::array::from_fn(|i| {
            let r = row as isize + dr * i as isize;
            let c = col as isize + dc * i as isize;
            grid.get(r as usize, c as usize)
        });
        Window { direction, cells }
    }

    /// How many cells of the window hold `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn is_filled_by(&self, cell: Cell) -> bool {
        self.cells.iter().all(|&c| c == cell)
    }
}

/// All windows along one direction.
pub fn windows_in(grid: &Grid, direction: Direction) -> impl Iterator<Item = Window> + '_ {
    direction
        .starts(grid.rows(), grid.cols())
        .map(move |(row, col)| Window::read(grid, direction, row, col))
}

/// All overlapping windows along all four directions.
pub fn windows(grid: &Grid) -> impl Iterator<Item = Window> + '_ {
    Direction::ALL
        .into_iter()
        .flat_map(move |direction| windows_in(grid, direction))
}

/// Number of windows a grid of the given size contains.
pub fn window_count(rows: usize, cols: usize) -> usize {
    Direction::ALL
        .iter()
        .map(|d| d.starts(rows, cols).count())
        .sum()
}

/// Check whether `player` owns four consecutive cells anywhere on the grid.
pub fn has_four_in_a_row(grid: &Grid, player: Player) -> bool {
    let cell = player.to_cell();
    windows(grid).any(|w| w.is_filled_by(cell))
}
