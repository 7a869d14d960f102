use crate::game::GameStatus;

/// End-of-game announcement, or `None` while the game continues.
pub fn end_notice(status: GameStatus) -> Option<String> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::Won(player) => Some(format!("Player {} won!", player.number())),
        GameStatus::Tied => Some("Tie game!".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    #[test]
    fn test_end_notice() {
        assert_eq!(end_notice(GameStatus::InProgress), None);
        assert_eq!(
            end_notice(GameStatus::Won(Player::One)).as_deref(),
            Some("Player 1 won!")
        );
        assert_eq!(
            end_notice(GameStatus::Won(Player::Two)).as_deref(),
            Some("Player 2 won!")
        );
        assert_eq!(end_notice(GameStatus::Tied).as_deref(), Some("Tie game!"));
    }
}
