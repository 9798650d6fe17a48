//! Common test utilities for the solver test suite.

#![allow(dead_code)]

use ttt_minimax::{Action, Board};

/// Parse a board, panicking on malformed test input.
pub fn board(s: &str) -> Board {
    s.parse()
        .unwrap_or_else(|e| panic!("bad test board '{s}': {e}"))
}

/// Shorthand for an in-bounds action.
pub fn at(row: usize, col: usize) -> Action {
    Action::new(row, col).expect("test action in bounds")
}

/// Every syntactically valid board: all 3^9 assignments of X, O and empty.
pub fn all_boards() -> Vec<Board> {
    let mut boards = Vec::with_capacity(3usize.pow(9));
    for index in 0..3usize.pow(9) {
        let mut n = index;
        let mut chars = ['.'; 9];
        for slot in (0..9).rev() {
            chars[slot] = match n % 3 {
                0 => '.',
                1 => 'X',
                _ => 'O',
            };
            n /= 3;
        }
        boards.push(board(&chars.iter().collect::<String>()));
    }
    boards
}

/// Count the cells that differ between two boards.
pub fn cells_changed(a: &Board, b: &Board) -> usize {
    a.rows()
        .iter()
        .flatten()
        .zip(b.rows().iter().flatten())
        .filter(|(x, y)| x != y)
        .count()
}
