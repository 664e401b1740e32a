use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Player;

pub type Coordinates = (usize, usize);

/// Glyph rendered for a cell no player has claimed.
pub const VACANT_SYMBOL: char = '☐';

/// One position on the board. Addressable either by `(row, column)` or by its
/// row-major `index`. Cells are built by the board and only ever change
/// occupant through the board's `occupy` and `reset`.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
    pub index: usize,
    pub occupant: Option<Player>,
}

impl Cell {
    pub(crate) fn new(row: usize, column: usize, index: usize) -> Self {
        Self {
            row,
            column,
            index,
            occupant: None,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        (self.row, self.column)
    }

    pub fn is_vacant(&self) -> bool {
        self.occupant.is_none()
    }

    /// The glyph the UI renders for this cell: the occupant's symbol, or
    /// [`VACANT_SYMBOL`].
    pub fn symbol(&self) -> char {
        match self.occupant {
            Some(player) => player.symbol(),
            None => VACANT_SYMBOL,
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
