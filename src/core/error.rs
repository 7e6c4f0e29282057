use thiserror::Error;

use crate::core::Coordinate;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Position {0} is outside the warehouse")]
    OutOfBounds(Coordinate),
    #[error("Level has no mover")]
    NoMover,
    #[error("Level has more than one mover, at {first} and {second}")]
    MultipleMovers {
        first: Coordinate,
        second: Coordinate,
    },
    #[error("Level has no rows")]
    EmptyLevel,
}

pub type Result<T> = core::result::Result<T, GameError>;
