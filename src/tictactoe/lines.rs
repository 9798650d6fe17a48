//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning lines as `(row, col)` triples: rows, columns, then diagonals
pub const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)], // rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)], // columns
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)], // diagonals
];

/// Three-in-a-row detection, split into the diagonal, row and column families
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has won by having three in a row.
    ///
    /// Families are checked diagonals first, then rows, then columns.
    pub fn has_won(cells: &[[Cell; 3]; 3], player: Player) -> bool {
        Self::has_diagonal(cells, player)
            || Self::has_row(cells, player)
            || Self::has_column(cells, player)
    }

    /// Main diagonal (0,0)-(2,2) or anti-diagonal (2,0)-(0,2)
    pub fn has_diagonal(cells: &[[Cell; 3]; 3], player: Player) -> bool {
        let target = player.to_cell();
        let main = (0..3).all(|i| cells[i][i] == target);
        let anti = (0..3).all(|i| cells[2 - i][i] == target);
        main || anti
    }

    pub fn has_row(cells: &[[Cell; 3]; 3], player: Player) -> bool {
        let target = player.to_cell();
        cells.iter().any(|row| *row == [target; 3])
    }

    pub fn has_column(cells: &[[Cell; 3]; 3], player: Player) -> bool {
        let target = player.to_cell();
        (0..3).any(|col| [cells[0][col], cells[1][col], cells[2][col]] == [target; 3])
    }

    /// All lines completed by a player
    pub fn winning_lines(cells: &[[Cell; 3]; 3], player: Player) -> Vec<[(usize, usize); 3]> {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .filter(|line| line.iter().all(|&(r, c)| cells[r][c] == target))
            .copied()
            .collect()
    }
}
