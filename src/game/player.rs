use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Nought,
    Cross,
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Player {
    /// The glyph the UI renders for this player.
    pub const fn symbol(&self) -> char {
        match self {
            Player::Nought => '◯',
            Player::Cross => '☓',
        }
    }

    /// The opponent. Turn alternation belongs to the caller, this is the
    /// helper it alternates with.
    pub fn other(&self) -> Player {
        match self {
            Player::Nought => Player::Cross,
            Player::Cross => Player::Nought,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn other_alternates() {
        assert_eq!(Player::Nought.other(), Player::Cross);
        assert_eq!(Player::Cross.other(), Player::Nought);
        assert_eq!(Player::Nought.other().other(), Player::Nought);
    }

    #[test]
    fn displays_symbol() {
        assert_eq!(Player::Nought.to_string(), "◯");
        assert_eq!(Player::Cross.to_string(), "☓");
    }

    #[test]
    fn serializes_by_name() {
        assert_eq!(
            serde_json::to_string(&Player::Nought).unwrap(),
            "\"Nought\""
        );
        assert_eq!(
            serde_json::from_str::<Player>("\"Cross\"").unwrap(),
            Player::Cross
        );
    }
}
