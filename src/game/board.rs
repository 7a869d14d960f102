use std::fmt;

use super::{MoveError, Player};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of aligned pieces needed to win.
pub const RUN_LENGTH: usize = 4;

/// Row/column steps for the four run directions: horizontal, vertical,
/// diagonal down-right, diagonal down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// A run of board coordinates, `(row, col)`.
pub type Run = [(usize, usize); RUN_LENGTH];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Player1,
    Player2,
}

impl Cell {
    /// The player occupying this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Player1 => Some(Player::One),
            Cell::Player2 => Some(Player::Two),
        }
    }

    /// Compact numeric form: 0 for empty, otherwise the player number.
    pub fn as_u8(self) -> u8 {
        self.player().map_or(0, Player::number)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Lowest empty row in `col`, or `None` when the column is full.
    pub fn find_open_row(&self, col: usize) -> Result<Option<usize>, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }

        Ok((0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty))
    }

    /// Record `player` at `(row, col)`. The cell must be empty.
    pub fn place_piece(
        &mut self,
        row: usize,
        col: usize,
        player: Player,
    ) -> Result<(), MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }
        if row >= ROWS {
            return Err(MoveError::InvalidPosition { row, column: col });
        }
        if self.cells[row][col] != Cell::Empty {
            return Err(MoveError::IllegalPlacement { row, column: col });
        }

        self.cells[row][col] = player.to_cell();
        Ok(())
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Number of occupied cells
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Check whether `player` has four in a row anywhere on the board.
    pub fn check_win(&self, player: Player) -> bool {
        self.winning_run(player).is_some()
    }

    /// Scan every cell as the start of a run in each direction and return the
    /// first run fully owned by `player`, in row-major order.
    pub fn winning_run(&self, player: Player) -> Option<Run> {
        let target = player.to_cell();

        for row in 0..ROWS {
            for col in 0..COLS {
                for &(dr, dc) in &DIRECTIONS {
                    if let Some(run) = Self::run_from(row, col, dr, dc) {
                        if run.iter().all(|&(r, c)| self.cells[r][c] == target) {
                            return Some(run);
                        }
                    }
                }
            }
        }

        None
    }

    /// Build the run starting at `(row, col)` stepping by `(dr, dc)`, or `None`
    /// if any coordinate falls off the board.
    fn run_from(row: usize, col: usize, dr: isize, dc: isize) -> Option<Run> {
        let mut run = [(0, 0); RUN_LENGTH];
        for (step, slot) in run.iter_mut().enumerate() {
            let r = row.checked_add_signed(dr * step as isize)?;
            let c = col.checked_add_signed(dc * step as isize)?;
            if r >= ROWS || c >= COLS {
                return None;
            }
            *slot = (r, c);
        }
        Some(run)
    }

    /// Board as rows of `0/1/2`.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|cell| cell.as_u8()).collect())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => ".".to_string(),
                    other => other.as_u8().to_string(),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        let footer: Vec<String> = (0..COLS).map(|col| col.to_string()).collect();
        write!(f, "{}", footer.join(" "))
    }
}
