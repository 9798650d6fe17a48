//! High-level game management

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{
    action::Action,
    board::{Board, Player},
};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub action: Action,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome of a terminal board, `None` while the game is still running
    pub fn of(board: &Board) -> Option<Self> {
        if let Some(winner) = board.winner() {
            Some(GameOutcome::Win(winner))
        } else if board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}

/// A game played from the empty board, with its move history
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Game {
    current: Board,
    moves: Vec<Move>,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    /// Play a move for whichever player is to move.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the game has ended, or
    /// [`crate::Error::IllegalMove`] if the cell is occupied.
    #[instrument(skip(self), fields(player = %self.current.player()))]
    pub fn play(&mut self, action: Action) -> Result<(), crate::Error> {
        if self.current.is_terminal() {
            return Err(crate::Error::GameOver);
        }

        let player = self.current.player();
        self.current = self.current.result(action)?;
        self.moves.push(Move { action, player });
        Ok(())
    }

    /// Current board state
    pub fn current(&self) -> Board {
        self.current
    }

    pub fn history(&self) -> &[Move] {
        &self.moves
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        GameOutcome::of(&self.current)
    }

    /// Every board of the game, starting with the empty board
    pub fn state_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        let mut state = Board::new();
        states.push(state);

        for mv in &self.moves {
            state = state.result(mv.action)?;
            states.push(state);
        }

        Ok(states)
    }
}
