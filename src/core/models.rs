use serde::{Deserialize, Serialize};

/// One cell of the warehouse. Boxes and the mover carry whether the cell they
/// occupy is a goal, since a goal under an occupant is not stored separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Floor,
    Goal,
    Wall,
    Box { on_goal: bool },
    Mover { on_goal: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserAction {
    Move(Direction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// The move was not legal; nothing changed.
    Rejected,
    Stepped,
    Pushed { onto_goal: bool },
}
