//! Configuration for the minimax search.

use serde::{Deserialize, Serialize};

/// Configuration for a [`Minimax`](super::Minimax) searcher.
///
/// The default configuration is the exact, sequential, full-depth search.
///
/// # Examples
///
/// ```
/// use ttt_minimax::search::SearchConfig;
///
/// let config = SearchConfig::new().with_parallel(true).with_max_depth(4);
/// assert!(config.parallel);
/// assert_eq!(config.max_depth, Some(4));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Evaluate the children of the searched position on the rayon thread pool.
    /// The chosen move is identical to the sequential search.
    pub parallel: bool,
    /// Stop descending after this many plies below the searched position;
    /// non-terminal positions at the cut-off score `0`. `None` searches to the end
    /// of the game.
    pub max_depth: Option<usize>,
}

impl SearchConfig {
    /// Create the default (exact, sequential) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable root-parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Limit the search depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Whether the search below this configuration is guaranteed to be exact.
    ///
    /// A game lasts at most nine plies, so any budget of nine or more is exact.
    pub fn is_exact(&self) -> bool {
        self.max_depth.is_none_or(|depth| depth >= 9)
    }
}
