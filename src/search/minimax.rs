//! Exhaustive minimax search
//!
//! X is the maximizer and O the minimizer. Values are utilities from X's point of
//! view, so every node of the game tree is labelled with `-1`, `0` or `1`:
//! terminal boards carry their utility, and an internal board carries the maximum
//! (X to move) or minimum (O to move) of its children. There is no pruning and no
//! memoization; each call walks the whole subtree below the board it is given.

use std::sync::atomic::{AtomicU64, Ordering};

use rayon::prelude::*;
use tracing::{debug, instrument};

use super::config::SearchConfig;
use crate::tictactoe::{Action, Board, Player};

/// Minimax searcher.
///
/// Holds a [`SearchConfig`] and counts the positions it visits. The counter is
/// atomic, so one searcher can be shared by the parallel root evaluation.
#[derive(Debug, Default)]
pub struct Minimax {
    config: SearchConfig,
    nodes: AtomicU64,
}

impl Minimax {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            nodes: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Positions evaluated since creation or the last [`Minimax::reset_stats`]
    pub fn nodes_visited(&self) -> u64 {
        self.nodes.load(Ordering::Relaxed)
    }

    pub fn reset_stats(&self) {
        self.nodes.store(0, Ordering::Relaxed);
    }

    /// The optimal action for the player to move, or `None` on a terminal board.
    ///
    /// Actions are tried in row-major order and a later action replaces the
    /// current best only if its value is strictly better, so among equally good
    /// moves the first one in row-major order wins.
    #[instrument(skip(self, board), fields(board = %board.encode()))]
    pub fn choose(&self, board: &Board) -> Option<Action> {
        let evaluated = self.evaluate_actions(board);
        let best = select_best(board.player(), &evaluated);

        if let Some((action, value)) = best {
            debug!(%action, value, nodes = self.nodes_visited(), "selected move");
        }
        best.map(|(action, _)| action)
    }

    /// Every legal action with the minimax value of the board it leads to.
    ///
    /// Returned in row-major action order; empty on a terminal board.
    pub fn evaluate_actions(&self, board: &Board) -> Vec<(Action, i32)> {
        if board.is_terminal() {
            return Vec::new();
        }

        let player = board.player();
        let children: Vec<(Action, Board)> = board.successors().collect();

        let score = |(action, next): &(Action, Board)| {
            let value = match player {
                Player::X => self.min_value(next, 1),
                Player::O => self.max_value(next, 1),
            };
            (*action, value)
        };

        if self.config.parallel {
            children.par_iter().map(score).collect()
        } else {
            children.iter().map(score).collect()
        }
    }

    /// Minimax value of a board for whichever player is to move
    pub fn value(&self, board: &Board) -> i32 {
        match board.player() {
            Player::X => self.max_value(board, 0),
            Player::O => self.min_value(board, 0),
        }
    }

    /// Value of `board` with X to move: the best X can force.
    pub fn max_value(&self, board: &Board, depth: usize) -> i32 {
        self.nodes.fetch_add(1, Ordering::Relaxed);
        if board.is_terminal() {
            return board.utility();
        }
        if self.cut_off(depth) {
            return 0;
        }

        board
            .successors()
            .map(|(_, next)| self.min_value(&next, depth + 1))
            .max()
            .unwrap_or_else(|| board.utility())
    }

    /// Value of `board` with O to move: the best O can force.
    pub fn min_value(&self, board: &Board, depth: usize) -> i32 {
        self.nodes.fetch_add(1, Ordering::Relaxed);
        if board.is_terminal() {
            return board.utility();
        }
        if self.cut_off(depth) {
            return 0;
        }

        board
            .successors()
            .map(|(_, next)| self.max_value(&next, depth + 1))
            .min()
            .unwrap_or_else(|| board.utility())
    }

    fn cut_off(&self, depth: usize) -> bool {
        self.config.max_depth.is_some_and(|limit| depth >= limit)
    }
}

/// Pick the best of a set of evaluated actions for `player`.
///
/// X takes the highest value and O the lowest. A later action replaces the
/// current best only if it is strictly better, so ties go to the earliest entry.
pub fn select_best(player: Player, evaluated: &[(Action, i32)]) -> Option<(Action, i32)> {
    let mut best: Option<(Action, i32)> = None;
    for &(action, value) in evaluated {
        let improves = match best {
            None => true,
            Some((_, best_value)) => match player {
                Player::X => value > best_value,
                Player::O => value < best_value,
            },
        };
        if improves {
            best = Some((action, value));
        }
    }
    best
}

/// The optimal action for the player to move, or `None` if the board is terminal.
pub fn minimax(board: &Board) -> Option<Action> {
    Minimax::default().choose(board)
}

/// Exact value of `board` assuming X is to move and both sides play optimally.
pub fn max_play(board: &Board) -> i32 {
    Minimax::default().max_value(board, 0)
}

/// Exact value of `board` assuming O is to move and both sides play optimally.
pub fn min_play(board: &Board) -> i32 {
    Minimax::default().min_value(board, 0)
}
