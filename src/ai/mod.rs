//! Automated players: the minimax engine, its evaluator, and a random
//! baseline, all behind the [`Agent`] trait.

mod agent;
pub mod heuristic;
pub mod minimax;
mod random;

pub use agent::Agent;
pub use heuristic::{Heuristic, Score, WindowHeuristic};
pub use minimax::{MinimaxAgent, MoveOrdering, SearchReport};
pub use random::RandomAgent;
