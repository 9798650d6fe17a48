//! Exhaustive enumeration of the Tic-Tac-Toe game tree

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use super::{Player, board::Board};

/// Number of complete games from a position, by outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameCounts {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl GameCounts {
    pub fn total(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Every board reachable from `root` by alternating play, including `root`.
///
/// Expansion stops at terminal boards. Boards are returned in breadth-first
/// order, each exactly once.
pub fn reachable_from(root: Board) -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    let mut boards = Vec::new();

    seen.insert(root);
    queue.push_back(root);

    while let Some(board) = queue.pop_front() {
        boards.push(board);

        if board.is_terminal() {
            continue;
        }

        for (_, next) in board.successors() {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }

    boards
}

/// Every board reachable from the empty board (5,478 positions)
pub fn reachable_boards() -> Vec<Board> {
    reachable_from(Board::new())
}

/// Count every complete game (root-to-leaf path) from a position
pub fn count_games(board: &Board) -> GameCounts {
    fn walk(board: Board, counts: &mut GameCounts) {
        if board.is_terminal() {
            match board.winner() {
                Some(Player::X) => counts.x_wins += 1,
                Some(Player::O) => counts.o_wins += 1,
                None => counts.draws += 1,
            }
            return;
        }

        for (_, next) in board.successors() {
            walk(next, counts);
        }
    }

    let mut counts = GameCounts::default();
    walk(*board, &mut counts);
    counts
}

/// Render a board as a framed 3x3 grid for terminal output
pub fn format_board(board: &Board) -> String {
    let rows: Vec<String> = board
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| format!(" {} ", cell.to_char()))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}
