//! Depth-limited minimax with alpha-beta pruning.
//!
//! The engine plays one fixed colour. The root of every search is that
//! colour's ply: callers must only ask for a move when it is actually the
//! engine's turn. The caller's grid is never modified; each explored move
//! produces a fresh grid.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::error::EngineError;
use crate::game::{apply_move, is_won, legal_columns, GameState, Grid, Player};

use super::agent::Agent;
use super::heuristic::{Heuristic, Score, WindowHeuristic};

/// Order in which sibling moves are expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOrdering {
    /// Uniform shuffle at every node. Among equally scored moves the choice
    /// is therefore random unless the engine is seeded.
    Shuffled,
    /// Ascending column order; fully deterministic.
    Ascending,
}

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    pub column: usize,
    pub score: Score,
    /// Nodes visited, leaves included.
    pub nodes: u64,
}

/// Minimax agent with alpha-beta pruning.
pub struct MinimaxAgent {
    depth: usize,
    player: Player,
    rows: usize,
    cols: usize,
    heuristic: Box<dyn Heuristic>,
    ordering: MoveOrdering,
    pruning: bool,
    rng: StdRng,
}

impl MinimaxAgent {
    /// Build an engine for `player` on a `rows` x `cols` board, searching
    /// `depth` plies.
    pub fn new(depth: usize, player: Player, rows: usize, cols: usize) -> Result<Self, EngineError> {
        if depth == 0 {
            return Err(EngineError::InvalidDepth);
        }
        if rows == 0 || cols == 0 {
            return Err(EngineError::InvalidGeometry {
                rows,
                columns: cols,
            });
        }

        Ok(MinimaxAgent {
            depth,
            player,
            rows,
            cols,
            heuristic: Box::new(WindowHeuristic::new(rows, cols)),
            ordering: MoveOrdering::Shuffled,
            pruning: true,
            rng: StdRng::from_os_rng(),
        })
    }

    /// Make sibling ordering reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_ordering(mut self, ordering: MoveOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Disable pruning to run plain minimax (same result, more nodes).
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn with_heuristic(mut self, heuristic: Box<dyn Heuristic>) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn opponent(&self) -> Player {
        self.player.other()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Static evaluation of `grid` from the engine's point of view.
    pub fn score(&self, grid: &Grid) -> Score {
        self.heuristic.evaluate(grid, self.player)
    }

    /// Column to play on `grid`.
    pub fn choose_move(&mut self, grid: &Grid) -> Result<usize, EngineError> {
        self.search(grid).map(|report| report.column)
    }

    /// Run a full search from `grid` and report the chosen column, its score
    /// and the number of nodes visited.
    ///
    /// Fails with [`EngineError::NoLegalMove`] if the position is already
    /// decided or the board is full.
    pub fn search(&mut self, grid: &Grid) -> Result<SearchReport, EngineError> {
        if grid.rows() != self.rows || grid.cols() != self.cols {
            return Err(EngineError::GeometryMismatch {
                rows: self.rows,
                columns: self.cols,
                found_rows: grid.rows(),
                found_columns: grid.cols(),
            });
        }

        let mut nodes = 0;
        let (score, column) =
            self.minimax(grid, 0, true, Score::MIN, Score::MAX, &mut nodes)?;
        let column = column.ok_or(EngineError::NoLegalMove)?;

        debug!(
            player = self.player.name(),
            depth = self.depth,
            column,
            score,
            nodes,
            "search complete"
        );
        Ok(SearchReport {
            column,
            score,
            nodes,
        })
    }

    /// Score of a leaf, or `None` if the node must be expanded.
    ///
    /// Wins are pulled one point toward zero per ply so that a quicker win
    /// (or a slower loss) is preferred over an equal-valued later one.
    fn leaf_score(&self, grid: &Grid, ply: usize, columns: &[usize]) -> Option<Score> {
        let own_win = is_won(grid, self.player);
        let opp_win = is_won(grid, self.player.other());
        if ply < self.depth && !own_win && !opp_win && !columns.is_empty() {
            return None;
        }

        let score = self.heuristic.evaluate(grid, self.player);
        let ply = Score::try_from(ply).unwrap_or(Score::MAX);
        Some(if own_win {
            score.saturating_sub(ply)
        } else if opp_win {
            score.saturating_add(ply)
        } else {
            score
        })
    }

    fn minimax(
        &mut self,
        grid: &Grid,
        ply: usize,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
        nodes: &mut u64,
    ) -> Result<(Score, Option<usize>), EngineError> {
        *nodes += 1;

        // A full board has no open column, so ties are caught here too.
        let mut columns = legal_columns(grid);
        if let Some(score) = self.leaf_score(grid, ply, &columns) {
            return Ok((score, None));
        }

        if self.ordering == MoveOrdering::Shuffled {
            columns.shuffle(&mut self.rng);
        }

        let mover = if maximizing {
            self.player
        } else {
            self.player.other()
        };
        let mut best = if maximizing { Score::MIN } else { Score::MAX };
        let mut best_column = None;

        for column in columns {
            let child = apply_move(grid, column, mover)?;
            let (value, _) = self.minimax(&child, ply + 1, !maximizing, alpha, beta, nodes)?;

            if maximizing {
                if value > best {
                    best = value;
                    best_column = Some(column);
                }
                alpha = alpha.max(best);
            } else {
                if value < best {
                    best = value;
                    best_column = Some(column);
                }
                beta = beta.min(best);
            }

            if self.pruning && beta <= alpha {
                break;
            }
        }

        Ok((best, best_column))
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, EngineError> {
        if state.current_player() != self.player {
            warn!(
                engine = self.player.name(),
                to_move = state.current_player().name(),
                "minimax asked to move out of turn"
            );
        }
        self.choose_move(state.grid())
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
