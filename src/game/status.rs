use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Outcome of evaluating the board for one player. There is no `Lost`: after
/// a move only the acting player can have completed a combination, so the
/// caller asks about the player that just moved.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Tie,
}

impl GameStatus {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameStatus::InProgress)
    }

    /// `Won` and `Tie` end the session until the board is reset.
    pub fn is_terminal(&self) -> bool {
        !self.is_in_progress()
    }
}

impl Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won => write!(f, "won"),
            GameStatus::Tie => write!(f, "tie"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn terminal_statuses() {
        assert!(GameStatus::InProgress.is_in_progress());
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::Won.is_terminal());
        assert!(GameStatus::Tie.is_terminal());
    }
}
