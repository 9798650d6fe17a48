//! Agents that pick moves, and a match runner that plays them against each other
//!
//! The [`Agent`] trait is the boundary between the game loop and a policy:
//! - [`OptimalAgent`] plays the minimax move
//! - [`RandomAgent`] plays a uniformly random legal move (baseline)

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Error, Result,
    search::{Minimax, SearchConfig},
    tictactoe::{Action, Board, Game, GameOutcome, Player},
};

/// A move-selection policy
pub trait Agent: Send {
    /// Select a move for the player to move on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] if the board is terminal.
    fn select_action(&mut self, board: &Board) -> Result<Action>;

    /// Name used in reports and logs
    fn name(&self) -> &str;
}

/// Plays the minimax move
pub struct OptimalAgent {
    name: String,
    search: Minimax,
}

impl OptimalAgent {
    pub fn new(name: String) -> Self {
        Self::with_config(name, SearchConfig::default())
    }

    pub fn with_config(name: String, config: SearchConfig) -> Self {
        Self {
            name,
            search: Minimax::new(config),
        }
    }

    /// Total positions searched across every move this agent made
    pub fn nodes_visited(&self) -> u64 {
        self.search.nodes_visited()
    }
}

impl Agent for OptimalAgent {
    fn select_action(&mut self, board: &Board) -> Result<Action> {
        self.search.choose(board).ok_or(Error::GameOver)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Random policy (baseline)
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a random agent seeded from the operating system
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a random agent with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, board: &Board) -> Result<Action> {
        if board.is_terminal() {
            return Err(Error::GameOver);
        }
        let actions = board.actions();
        let index = self.rng.random_range(0..actions.len());
        Ok(actions[index])
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Play one game from the empty board, `x` moving first.
pub fn play_game(x: &mut dyn Agent, o: &mut dyn Agent) -> Result<Game> {
    let mut game = Game::new();

    while game.outcome().is_none() {
        let board = game.current();
        let player = board.player();
        let action = match player {
            Player::X => x.select_action(&board)?,
            Player::O => o.select_action(&board)?,
        };
        debug!(%player, %action, "move");
        game.play(action)?;
    }

    Ok(game)
}

/// Win/draw/loss tally over a series of games, from X's point of view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTally {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl MatchTally {
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Player::X) => self.x_wins += 1,
            GameOutcome::Win(Player::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    pub fn games(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimal_self_play_draws() {
        let mut x = OptimalAgent::new("x".to_string());
        let mut o = OptimalAgent::new("o".to_string());
        let game = play_game(&mut x, &mut o).unwrap();
        assert_eq!(game.outcome(), Some(GameOutcome::Draw));
        assert_eq!(game.history().len(), 9);
    }

    #[test]
    fn test_random_agent_is_reproducible() {
        let board = Board::new();
        let mut a = RandomAgent::with_seed("a".to_string(), 7);
        let mut b = RandomAgent::with_seed("b".to_string(), 7);
        for _ in 0..10 {
            assert_eq!(
                a.select_action(&board).unwrap(),
                b.select_action(&board).unwrap()
            );
        }
    }

    #[test]
    fn test_agents_refuse_terminal_boards() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        let mut optimal = OptimalAgent::new("optimal".to_string());
        let mut random = RandomAgent::with_seed("random".to_string(), 1);
        assert!(matches!(optimal.select_action(&board), Err(Error::GameOver)));
        assert!(matches!(random.select_action(&board), Err(Error::GameOver)));
    }

    #[test]
    fn test_tally() {
        let mut tally = MatchTally::default();
        tally.record(GameOutcome::Draw);
        tally.record(GameOutcome::Win(Player::O));
        assert_eq!(tally.games(), 2);
        assert_eq!(tally.o_wins, 1);
    }
}
