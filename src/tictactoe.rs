//! Tic-Tac-Toe game implementation

pub mod action;
pub mod board;
pub mod game;
pub mod game_tree;
pub mod lines;
pub mod validation;

pub use action::Action;
pub use board::{Board, Cell, Player};
pub use game::{Game, GameOutcome, Move};
pub use game_tree::{GameCounts, count_games, format_board, reachable_boards, reachable_from};
pub use lines::{LineAnalyzer, WINNING_LINES};
