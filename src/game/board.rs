use itertools::Itertools;
use log::debug;
use ndarray::Array2;
use std::fmt;

use crate::{Cell, CellObserver, Coordinates, GameStatus, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    CellOccupied,
    OutOfBounds,
}

impl fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMove::CellOccupied => write!(f, "the cell is already occupied"),
            InvalidMove::OutOfBounds => write!(f, "the coordinates are outside the board"),
        }
    }
}

impl std::error::Error for InvalidMove {}

pub struct Board {
    data: Array2<Cell>,
    observers: Vec<Box<dyn CellObserver>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub const SIZE: Coordinates = (3, 3);

    /// The eight ways to win: three rows, three columns, two diagonals, as
    /// row-major cell indices. Fixed for the life of the process.
    pub const WIN_COMBINATIONS: [[usize; 3]; 8] = [
        [0, 1, 2],
        [3, 4, 5],
        [6, 7, 8],
        [0, 3, 6],
        [1, 4, 7],
        [2, 5, 8],
        [0, 4, 8],
        [2, 4, 6],
    ];

    pub fn new() -> Self {
        Self {
            data: Array2::from_shape_fn(Self::SIZE, |(row, column)| {
                Cell::new(row, column, Self::index_of((row, column)))
            }),
            observers: Vec::new(),
        }
    }

    pub const fn coordinates_of(index: usize) -> Coordinates {
        (index / Self::SIZE.1, index % Self::SIZE.1)
    }

    pub const fn index_of(coordinates: Coordinates) -> usize {
        coordinates.0 * Self::SIZE.1 + coordinates.1
    }

    pub fn cell(&self, coordinates: Coordinates) -> Option<&Cell> {
        self.data.get(coordinates)
    }

    pub fn cell_at(&self, index: usize) -> Option<&Cell> {
        self.data.get(Self::coordinates_of(index))
    }

    /// The 9 cells in row-major order, read-only.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.data.iter()
    }

    /// Registers a renderer-side observer. Every successful `occupy` and
    /// every `reset` reports the cells it touched through all observers.
    pub fn add_observer(&mut self, observer: Box<dyn CellObserver>) {
        self.observers.push(observer);
    }

    /// Marks a vacant cell for `player` and returns the status the board has
    /// for that player after the move. A rejected move leaves the board
    /// untouched and notifies nobody.
    ///
    /// Whose turn it is belongs to the caller; the board accepts any player
    /// on any vacant cell.
    pub fn occupy(
        &mut self,
        coordinates: Coordinates,
        player: Player,
    ) -> Result<GameStatus, InvalidMove> {
        if coordinates.0 >= Self::SIZE.0 || coordinates.1 >= Self::SIZE.1 {
            return Err(InvalidMove::OutOfBounds);
        }
        let cell = &mut self.data[coordinates];
        if cell.occupant.is_some() {
            return Err(InvalidMove::CellOccupied);
        }
        cell.occupant = Some(player);

        debug!("{} occupies cell {}", player, Self::index_of(coordinates));
        self.notify(coordinates);

        Ok(self.status(player))
    }

    /// Evaluates the board for the given player.
    ///
    /// A combination fully occupied by `player` wins; otherwise a vacant cell
    /// keeps the game in progress; a full board without a win is a tie.
    ///
    /// ```
    /// use tictactoe::{Board, GameStatus, Player};
    ///
    /// // ◯ ◯ ◯ <-- ◯ wins
    /// // ☓ ☓ ☐
    /// // ☐ ☐ ☐
    /// let mut board = Board::new();
    /// board.occupy((0, 0), Player::Nought).unwrap();
    /// board.occupy((1, 0), Player::Cross).unwrap();
    /// board.occupy((0, 1), Player::Nought).unwrap();
    /// board.occupy((1, 1), Player::Cross).unwrap();
    ///
    /// assert_eq!(board.occupy((0, 2), Player::Nought), Ok(GameStatus::Won));
    /// assert_eq!(board.status(Player::Nought), GameStatus::Won);
    /// assert_eq!(board.status(Player::Cross), GameStatus::InProgress);
    /// ```
    pub fn status(&self, player: Player) -> GameStatus {
        let won = Self::WIN_COMBINATIONS.iter().any(|combination| {
            combination
                .iter()
                .all(|&index| self.data[Self::coordinates_of(index)].occupant == Some(player))
        });

        if won {
            GameStatus::Won
        } else if self.iter().any(Cell::is_vacant) {
            GameStatus::InProgress
        } else {
            GameStatus::Tie
        }
    }

    /// Clears every cell and notifies observers of each, row-major.
    /// Idempotent.
    pub fn reset(&mut self) {
        for coordinates in (0..Self::SIZE.0).cartesian_product(0..Self::SIZE.1) {
            self.data[coordinates].occupant = None;
            self.notify(coordinates);
        }
        debug!("board reset");
    }

    fn notify(&mut self, coordinates: Coordinates) {
        let cell = self.data[coordinates];
        for observer in &mut self.observers {
            observer.cell_changed(&cell);
        }
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = &'a Cell;
    type IntoIter = ndarray::iter::Iter<'a, Cell, ndarray::Ix2>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.rows().into_iter() {
            writeln!(f, "{}", row.iter().map(|cell| cell.symbol()).join(" "))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("data", &self.data)
            .field("observers", &self.observers.len())
            .finish()
    }
}
