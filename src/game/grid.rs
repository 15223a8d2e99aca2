use std::fmt;
use std::str::FromStr;

use crate::error::GridError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// Wire code at the host boundary: 0 empty, 1 red, 2 yellow.
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Red => 1,
            Cell::Yellow => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Cell> {
        match code {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Red),
            2 => Some(Cell::Yellow),
            _ => None,
        }
    }
}

/// A rectangular board of cells. Row 0 is the bottom row.
///
/// Cells are stored row-major in one flat vector so that cloning a grid for a
/// hypothetical move is a single allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Build a grid from host rows, `rows[0]` being the bottom row.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, GridError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if cols == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            for (column, &value) in values.iter().enumerate() {
                let cell =
                    Cell::from_code(value).ok_or(GridError::InvalidCell { row, column, value })?;
                cells.push(cell);
            }
        }

        Ok(Grid {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Host representation: one vector of codes per row, bottom row first.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.cols.max(1))
            .map(|row| row.iter().map(|c| c.code()).collect())
            .collect()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.cols + col] = cell;
    }

    /// A column is open iff its top cell is empty.
    pub fn is_column_open(&self, col: usize) -> bool {
        col < self.cols && self.rows > 0 && self.get(self.rows - 1, col) == Cell::Empty
    }

    /// Lowest empty row of `col`, if any.
    pub fn next_open_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows).find(|&row| self.get(row, col) == Cell::Empty)
    }

    /// Number of cells holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// True when no empty cell remains
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Cells of one column, bottom to top.
    pub fn column(&self, col: usize) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).map(move |row| self.get(row, col))
    }
}

/// Prints the top row first, one line per row, cells as wire codes.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.rows).rev() {
            for col in 0..self.cols {
                write!(f, "{}", self.get(row, col).code())?;
            }
            if row > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Parses the text notation: rows top-first, separated by `/` or whitespace.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = s
            .split(|c: char| c == '/' || c.is_whitespace())
            .filter(|r| !r.is_empty())
            .map(|r| {
                r.chars()
                    .map(|c| {
                        c.to_digit(10)
                            .map(|d| d as u8)
                            .ok_or_else(|| GridError::Parse(format!("unexpected character '{c}'")))
                    })
                    .collect::<Result<Vec<u8>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.reverse();
        Grid::from_rows(&rows)
    }
}
