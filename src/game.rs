//! Functional interface to the game rules and the solver.
//!
//! Thin free functions over [`Board`] methods and the default [`Minimax`](crate::search::Minimax)
//! searcher, for callers that own their own turn loop and board I/O.

use crate::{
    Result,
    tictactoe::{Action, Board, Player},
};

pub use crate::search::{max_play, min_play, minimax};

/// The starting position: nine empty cells
pub fn initial_state() -> Board {
    Board::new()
}

/// The player to move. X when both players have as many marks, O otherwise.
pub fn player(board: &Board) -> Player {
    board.player()
}

/// All empty cells in row-major order
pub fn actions(board: &Board) -> Vec<Action> {
    board.actions()
}

/// The board after the player to move marks `action`.
///
/// # Errors
///
/// Returns [`crate::Error::IllegalMove`] if the cell is occupied.
pub fn result(board: &Board, action: Action) -> Result<Board> {
    board.result(action)
}

/// The player with three in a row, X checked first
pub fn winner(board: &Board) -> Option<Player> {
    board.winner()
}

/// True once someone has three in a row or the board is full
pub fn terminal(board: &Board) -> bool {
    board.is_terminal()
}

/// `1` if X has won, `-1` if O has won, `0` otherwise. Call on terminal boards only.
pub fn utility(board: &Board) -> i32 {
    board.utility()
}
