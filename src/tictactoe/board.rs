//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{action::Action, lines::LineAnalyzer};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this mark, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A 3x3 grid of cells.
///
/// `Board` is `Copy` (9 bytes) and never changes after construction: every move
/// produces a new value through [`Board::result`], so sibling branches of a search
/// never alias each other. Whose turn it is is not stored; it is derived from the
/// marks on the board by [`Board::player`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PieceCount {
    pub(crate) x: usize,
    pub(crate) o: usize,
    pub(crate) empty: usize,
}

impl Board {
    /// Create the starting position: nine empty cells
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Create a board from explicit rows.
    ///
    /// No reachability check is performed; see [`Board::is_reachable`].
    pub fn from_rows(cells: [[Cell; 3]; 3]) -> Self {
        Board { cells }
    }

    /// The rows of the board, top to bottom
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Get the cell addressed by an action
    pub fn get(&self, action: Action) -> Cell {
        self.cells[action.row()][action.col()]
    }

    /// Check if the cell addressed by an action is empty
    pub fn is_empty(&self, action: Action) -> bool {
        self.get(action) == Cell::Empty
    }

    pub(crate) fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in self.cells.iter().flatten() {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        9 - self.count_pieces().empty
    }

    /// Check whether every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| cell != Cell::Empty)
    }

    /// The player whose turn it is.
    ///
    /// X moves whenever both players have the same number of marks (including the
    /// empty board), O otherwise. The board is not validated: on a board that
    /// cannot arise from alternating play the answer is defined but meaningless.
    pub fn player(&self) -> Player {
        let count = self.count_pieces();
        if count.x == count.o {
            Player::X
        } else {
            Player::O
        }
    }

    /// All empty cells, in row-major order.
    ///
    /// The order is the canonical tie-break order used by the minimax search.
    pub fn actions(&self) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|&action| self.is_empty(action))
            .collect()
    }

    /// The board that results from the player to move marking `action`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::IllegalMove`] if the cell is already occupied.
    #[must_use = "result returns a new board; the original is unchanged"]
    pub fn result(&self, action: Action) -> Result<Board, crate::Error> {
        if !self.is_empty(action) {
            return Err(crate::Error::IllegalMove {
                row: action.row(),
                col: action.col(),
            });
        }

        Ok(self.place(action, self.player()))
    }

    /// Every legal action paired with the board it produces, in row-major order.
    ///
    /// Children are built only from empty cells, so no move here can be illegal.
    pub fn successors(&self) -> impl Iterator<Item = (Action, Board)> {
        let board = *self;
        let mover = board.player();
        Action::ALL
            .into_iter()
            .filter(move |&action| board.is_empty(action))
            .map(move |action| (action, board.place(action, mover)))
    }

    fn place(&self, action: Action, player: Player) -> Board {
        let mut next = *self;
        next.cells[action.row()][action.col()] = player.to_cell();
        next
    }

    /// Check if a player has three in a row anywhere
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// The winner, if there is one. X is checked before O.
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    /// Outcome from X's perspective: `1` if X won, `-1` if O won, `0` otherwise.
    ///
    /// Only meaningful on terminal boards. A non-terminal board also scores `0`.
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    /// Compact nine-character encoding, row-major (`X`, `O`, `.`)
    pub fn encode(&self) -> String {
        self.cells
            .iter()
            .flatten()
            .map(|&cell| cell.to_char())
            .collect()
    }

    /// Helper: Parse 9 cells from a slice of characters.
    fn parse_cells(chars: &[char], context: &str) -> Result<[[Cell; 3]; 3], crate::Error> {
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: context.to_string(),
            });
        }

        let mut cells = [[Cell::Empty; 3]; 3];
        for (i, &c) in chars.iter().enumerate() {
            cells[i / 3][i % 3] =
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: context.to_string(),
                })?;
        }

        Ok(cells)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    /// Parse a board from nine cell characters.
    ///
    /// Whitespace and `/` row separators are ignored, so `"XO./.X./..O"`,
    /// `"XO. .X. ..O"` and `"XO..X...O"` all describe the same board.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        let cells = Self::parse_cells(&chars, s)?;
        Ok(Board { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            if i < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
