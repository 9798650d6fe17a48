//! Minimax search over the Tic-Tac-Toe game tree

pub mod config;
pub mod minimax;

pub use config::SearchConfig;
pub use minimax::{Minimax, max_play, min_play, minimax, select_best};
