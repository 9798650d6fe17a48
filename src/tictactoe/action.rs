//! Moves addressed by board coordinates

use std::fmt;

use serde::{Deserialize, Serialize};

/// A move on the board: the `(row, col)` of the cell to mark.
///
/// Both coordinates are always in `0..3`; [`Action::new`] rejects anything
/// else, so indexing a board with an `Action` cannot go out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawAction")]
pub struct Action {
    row: usize,
    col: usize,
}

#[derive(Deserialize)]
struct RawAction {
    row: usize,
    col: usize,
}

impl TryFrom<RawAction> for Action {
    type Error = crate::Error;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        Action::new(raw.row, raw.col)
    }
}

impl Action {
    /// Every cell of the board in row-major order
    pub const ALL: [Action; 9] = [
        Action { row: 0, col: 0 },
        Action { row: 0, col: 1 },
        Action { row: 0, col: 2 },
        Action { row: 1, col: 0 },
        Action { row: 1, col: 1 },
        Action { row: 1, col: 2 },
        Action { row: 2, col: 0 },
        Action { row: 2, col: 1 },
        Action { row: 2, col: 2 },
    ];

    /// Create an action, checking that both coordinates are on the board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] if `row` or `col` is 3 or more.
    pub fn new(row: usize, col: usize) -> Result<Self, crate::Error> {
        if row < 3 && col < 3 {
            Ok(Action { row, col })
        } else {
            Err(crate::Error::InvalidPosition { row, col })
        }
    }

    /// Create an action from a row-major cell index (0-8)
    pub fn from_index(index: usize) -> Result<Self, crate::Error> {
        Self::new(index / 3, index % 3)
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major cell index (0-8)
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
