//! Subcommands of the `ttt` binary

pub mod analyze;
pub mod play;
pub mod solve;

use anyhow::{Context, Result};
use tracing::warn;

use crate::tictactoe::Board;

/// Parse a board argument, warning when it cannot arise in a real game.
pub(crate) fn parse_board(input: &str) -> Result<Board> {
    let board: Board = input
        .parse()
        .with_context(|| format!("could not parse board '{input}'"))?;
    if !board.is_reachable() {
        warn!(board = %board.encode(), "board is not reachable by alternating play");
    }
    Ok(board)
}
