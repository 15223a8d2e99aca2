use crate::error::EngineError;

use super::analysis::{self, GameOutcome};
use super::board::{Board, COLS, ROWS};
use super::grid::Grid;
use super::player::Player;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("the game is already over")]
    GameOver,

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Turn-tracking game state used by the host loop.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Empty 6x7 board, Red to move.
    pub fn initial() -> Self {
        Self::new(ROWS, COLS)
    }

    pub fn new(rows: usize, cols: usize) -> Self {
        GameState {
            board: Board::new(rows, cols),
            current_player: Player::Red,
            outcome: None,
        }
    }

    /// Resume from an arbitrary position; the side to move is derived from
    /// the piece counts.
    pub fn from_grid(grid: Grid) -> Self {
        let current_player = analysis::side_to_move(&grid);
        let outcome = analysis::outcome(&grid);
        GameState {
            board: Board::from_grid(grid),
            current_player,
            outcome,
        }
    }

    /// Side whose piece the next accepted column will drop.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn grid(&self) -> &Grid {
        self.board.grid()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// A win or a full board ends the game.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Open columns, or none once the game has ended.
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        analysis::legal_columns(self.board.grid())
    }

    /// Play `column` for the side to move on a copy of this state.
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Play `column` for the side to move and hand the turn over.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mover = self.current_player;
        self.board.drop_piece(column, mover)?;

        if self.board.is_winning_position(mover) {
            self.outcome = Some(GameOutcome::Winner(mover));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = mover.other();

        Ok(())
    }
}
