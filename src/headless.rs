//! Play a scripted list of columns against a fresh game, without a terminal
//! UI. Full columns are skipped the same way the interactive UI skips them.

use serde::Serialize;

use crate::game::{GameState, GameStatus, MoveError, MoveOutcome};
use crate::ui::end_notice;

/// Result of running a move script.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadlessReport {
    pub moves_played: usize,
    /// Columns that were requested while already full.
    pub ignored_full_columns: Vec<usize>,
    /// Moves left in the script after the game ended.
    pub ignored_after_end: usize,
    pub status: GameStatus,
    pub winner: Option<u8>,
    pub notice: Option<String>,
    /// Rows top to bottom, 0 = empty, otherwise the player number.
    pub board: Vec<Vec<u8>>,
    #[serde(skip)]
    pub final_state: GameState,
}

/// Play `columns` in order, alternating players from Player 1.
///
/// An out-of-range column aborts the script with `MoveError::InvalidColumn`.
pub fn run(columns: &[usize]) -> Result<HeadlessReport, MoveError> {
    let mut state = GameState::new();
    let mut ignored_full_columns = Vec::new();
    let mut ignored_after_end = 0;

    for (index, &column) in columns.iter().enumerate() {
        if state.is_terminal() {
            ignored_after_end = columns.len() - index;
            tracing::debug!(ignored_after_end, "game over, remaining moves ignored");
            break;
        }

        let player = state.current_player();
        match state.play(column)? {
            MoveOutcome::Placed { row, column, status } => {
                tracing::info!(player = player.number(), row, column, ?status, "piece placed");
            }
            MoveOutcome::ColumnFull { column } => {
                tracing::debug!(column, "column full, move ignored");
                ignored_full_columns.push(column);
            }
        }
    }

    let status = state.status();
    let notice = end_notice(status);
    if let Some(notice) = &notice {
        tracing::info!(moves = state.moves_played(), "{notice}");
    }

    Ok(HeadlessReport {
        moves_played: state.moves_played(),
        ignored_full_columns,
        ignored_after_end,
        status,
        winner: status.winner().map(|player| player.number()),
        notice,
        board: state.board().to_rows(),
        final_state: state,
    })
}

impl HeadlessReport {
    /// Plain-text rendering: the board followed by the notice, if any.
    pub fn to_text(&self) -> String {
        let mut text = self.final_state.board().to_string();
        text.push('\n');
        match &self.notice {
            Some(notice) => text.push_str(notice),
            None => text.push_str(&format!(
                "Game in progress, {} to move",
                self.final_state.current_player().name()
            )),
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::fixtures::{LAST_MOVE_WIN_SEQUENCE, TIE_SEQUENCE};
    use crate::game::{Player, COLS};

    #[test]
    fn test_empty_script() {
        let report = run(&[]).unwrap();
        assert_eq!(report.moves_played, 0);
        assert_eq!(report.status, GameStatus::InProgress);
        assert_eq!(report.notice, None);
        assert!(report.to_text().ends_with("Game in progress, Player 1 to move"));
    }

    #[test]
    fn test_win_stops_script() {
        let report = run(&[0, 0, 1, 1, 2, 2, 3, 4, 5]).unwrap();
        assert_eq!(report.status, GameStatus::Won(Player::One));
        assert_eq!(report.winner, Some(1));
        assert_eq!(report.moves_played, 7);
        assert_eq!(report.ignored_after_end, 2);
        assert_eq!(report.notice.as_deref(), Some("Player 1 won!"));
        assert_eq!(report.board[5], vec![1, 1, 1, 1, 0, 0, 0]);
    }

    #[test]
    fn test_full_columns_are_skipped() {
        // The seventh drop into column 2 is ignored, so Player 1 moves again
        let report = run(&[2, 2, 2, 2, 2, 2, 2, 3]).unwrap();
        assert_eq!(report.ignored_full_columns, vec![2]);
        assert_eq!(report.moves_played, 7);
        assert_eq!(report.board[5][3], 1);
    }

    #[test]
    fn test_invalid_column_aborts() {
        assert_eq!(run(&[0, COLS]), Err(MoveError::InvalidColumn(COLS)));
    }

    #[test]
    fn test_tie_script() {
        let report = run(&TIE_SEQUENCE).unwrap();
        assert_eq!(report.status, GameStatus::Tied);
        assert_eq!(report.winner, None);
        assert!(report.to_text().ends_with("Tie game!"));
    }

    #[test]
    fn test_last_move_win_is_not_a_tie() {
        let report = run(&LAST_MOVE_WIN_SEQUENCE).unwrap();
        assert_eq!(report.status, GameStatus::Won(Player::Two));
        assert_eq!(report.notice.as_deref(), Some("Player 2 won!"));
    }

    #[test]
    fn test_report_json() {
        let report = run(&[0, 0, 1, 1, 2, 2, 3]).unwrap();
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();

        assert_eq!(json["moves_played"], 7);
        assert_eq!(json["winner"], 1);
        assert_eq!(json["notice"], "Player 1 won!");
        assert_eq!(json["status"]["Won"], "One");
        assert!(json.get("final_state").is_none());
    }
}
