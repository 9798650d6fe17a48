//! Exhaustive minimax solver for 3x3 Tic-Tac-Toe
//!
//! This crate provides:
//! - An immutable board model with turn, move and terminal-state rules
//! - Full-depth minimax search (optionally root-parallel)
//! - Game-tree enumeration and outcome statistics
//! - Baseline agents and a small CLI driver

pub mod agents;
pub mod cli;
pub mod error;
pub mod game;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use game::{
    actions, initial_state, max_play, min_play, minimax, player, result, terminal, utility, winner,
};
pub use tictactoe::{Action, Board, Cell, Player};
