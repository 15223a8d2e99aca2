//! # Connect Four Minimax
//!
//! A Connect Four engine that picks moves with depth-limited minimax and
//! alpha-beta pruning over a heuristic that scores every four-cell window.
//!
//! ## Modules
//!
//! - [`game`]: Grid, line scanning, position analysis and the host game state
//! - [`ai`]: Agent trait, window heuristic, minimax search, random baseline
//! - [`play`]: Headless game loop and match tallies
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod play;
