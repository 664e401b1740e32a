mod board;
mod cell;
mod observer;
mod player;
mod status;

pub use board::{Board, InvalidMove};
pub use cell::{Cell, Coordinates, VACANT_SYMBOL};
pub use observer::CellObserver;
pub use player::Player;
pub use status::GameStatus;
