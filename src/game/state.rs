use serde::Serialize;

use super::{Board, Player, COLS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Tied,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// Caller contract violations. A full column is not one of these; see
/// [`MoveOutcome::ColumnFull`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range (0..{max})", max = COLS)]
    InvalidColumn(usize),

    #[error("position ({row}, {column}) is off the board")]
    InvalidPosition { row: usize, column: usize },

    #[error("cell ({row}, {column}) is already occupied")]
    IllegalPlacement { row: usize, column: usize },

    #[error("game is already over")]
    GameOver,
}

/// Result of a move request that respected the caller contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// A piece landed at `(row, column)`; `status` is the state after it.
    Placed {
        row: usize,
        column: usize,
        status: GameStatus,
    },
    /// The column had no open row. Nothing changed.
    ColumnFull { column: usize },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    moves_played: usize,
}

impl GameState {
    /// Create initial game state
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::One, // Player 1 starts
            status: GameStatus::InProgress,
            moves_played: 0,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// A full column yields [`MoveOutcome::ColumnFull`] and leaves the state
    /// untouched. The player only changes hands when the game continues.
    pub fn play(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let Some(row) = self.board.find_open_row(column)? else {
            return Ok(MoveOutcome::ColumnFull { column });
        };

        let player = self.current_player;
        self.board.place_piece(row, column, player)?;
        self.moves_played += 1;

        // Win takes precedence over a full board
        self.status = if self.board.check_win(player) {
            GameStatus::Won(player)
        } else if self.board.is_full() {
            GameStatus::Tied
        } else {
            GameStatus::InProgress
        };

        if !self.is_terminal() {
            self.current_player = player.other();
        }

        Ok(MoveOutcome::Placed {
            row,
            column,
            status: self.status,
        })
    }

    /// Start over with an empty board and Player 1 to move.
    pub fn reset(&mut self) {
        *self = GameState::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
