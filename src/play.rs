//! Host game loop: alternate two agents on a board until the game ends.

use tracing::{debug, info};

use crate::ai::Agent;
use crate::game::{GameOutcome, GameState, MoveError, Player};

/// Moves and result of one finished game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub moves: Vec<usize>,
    pub outcome: GameOutcome,
    pub final_state: GameState,
}

/// Win/loss/draw counts from one player's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchTally {
    pub wins: u64,
    pub losses: u64,
    pub draws: u64,
}

impl MatchTally {
    pub fn record(&mut self, outcome: GameOutcome, perspective: Player) {
        match outcome {
            GameOutcome::Winner(p) if p == perspective => self.wins += 1,
            GameOutcome::Winner(_) => self.losses += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u64 {
        self.wins + self.losses + self.draws
    }
}

/// Play one game from `state`, `red` and `yellow` choosing moves in turn.
pub fn play_game(
    mut state: GameState,
    red: &mut dyn Agent,
    yellow: &mut dyn Agent,
) -> Result<GameRecord, MoveError> {
    let mut moves = Vec::new();

    while !state.is_terminal() {
        let player = state.current_player();
        let column = match player {
            Player::Red => red.select_action(&state)?,
            Player::Yellow => yellow.select_action(&state)?,
        };
        debug!(player = player.name(), column, "move");
        state.apply_move_mut(column)?;
        moves.push(column);
    }

    let outcome = state.outcome().ok_or(MoveError::GameOver)?;
    match outcome {
        GameOutcome::Winner(p) => info!(winner = p.name(), moves = moves.len(), "game over"),
        GameOutcome::Draw => info!(moves = moves.len(), "game drawn"),
    }

    Ok(GameRecord {
        moves,
        outcome,
        final_state: state,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{MinimaxAgent, RandomAgent};
    use crate::error::EngineError;
    use crate::game::Cell;

    /// Plays a fixed list of columns.
    struct Scripted(Vec<usize>);

    impl Agent for Scripted {
        fn select_action(&mut self, _state: &GameState) -> Result<usize, EngineError> {
            if self.0.is_empty() {
                return Err(EngineError::NoLegalMove);
            }
            Ok(self.0.remove(0))
        }

        fn name(&self) -> &str {
            "Scripted"
        }
    }

    #[test]
    fn scripted_game_records_moves_and_winner() {
        let mut red = Scripted(vec![0, 1, 2, 3]);
        let mut yellow = Scripted(vec![0, 1, 2]);
        let record = play_game(GameState::initial(), &mut red, &mut yellow).unwrap();

        assert_eq!(record.moves, vec![0, 0, 1, 1, 2, 2, 3]);
        assert_eq!(record.outcome, GameOutcome::Winner(Player::Red));
        assert!(record.final_state.is_terminal());
    }

    #[test]
    fn illegal_move_propagates() {
        let mut red = Scripted(vec![9]);
        let mut yellow = Scripted(vec![]);
        let err = play_game(GameState::initial(), &mut red, &mut yellow).unwrap_err();
        assert_eq!(err, MoveError::Engine(EngineError::InvalidColumn { column: 9 }));
    }

    #[test]
    fn minimax_vs_random_finishes() {
        let mut red = MinimaxAgent::new(2, Player::Red, 6, 7).unwrap().with_seed(5);
        let mut yellow = RandomAgent::with_seed(6);
        let record = play_game(GameState::initial(), &mut red, &mut yellow).unwrap();
        let empty = record.final_state.grid().count(Cell::Empty);
        assert_eq!(record.moves.len(), 42 - empty);
    }

    #[test]
    fn tally_counts_from_perspective() {
        let mut tally = MatchTally::default();
        tally.record(GameOutcome::Winner(Player::Red), Player::Red);
        tally.record(GameOutcome::Winner(Player::Yellow), Player::Red);
        tally.record(GameOutcome::Draw, Player::Red);
        tally.record(GameOutcome::Winner(Player::Yellow), Player::Yellow);
        assert_eq!(
            tally,
            MatchTally {
                wins: 2,
                losses: 1,
                draws: 1
            }
        );
        assert_eq!(tally.total_games(), 4);
    }
}
