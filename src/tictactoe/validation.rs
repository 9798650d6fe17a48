//! Board reachability validation

use super::{
    board::{Board, Player},
    lines::LineAnalyzer,
};

impl Board {
    /// Check if the board could arise from the empty board by alternating play
    /// with X moving first and stopping at the first win.
    pub fn is_reachable(&self) -> bool {
        let count = self.count_pieces();

        // X moves first, so X has as many marks as O or exactly one more
        if !(count.x == count.o || count.x == count.o + 1) {
            return false;
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return false;
        }

        // The winner must have made the last move
        if x_wins && count.x != count.o + 1 {
            return false;
        }
        if o_wins && count.x != count.o {
            return false;
        }

        // Several winning lines can only come from a single final move
        if x_wins && !self.winning_lines_share_cell(Player::X) {
            return false;
        }
        if o_wins && !self.winning_lines_share_cell(Player::O) {
            return false;
        }

        true
    }

    /// Check if all winning lines for a player share at least one cell.
    /// Trivially true with fewer than two lines.
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let lines = LineAnalyzer::winning_lines(self.rows(), player);
        if lines.len() < 2 {
            return true;
        }

        lines[0]
            .iter()
            .any(|cell| lines.iter().all(|line| line.contains(cell)))
    }
}
