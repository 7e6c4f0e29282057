mod consts;
mod error;
mod grid;
mod model_helpers;
mod models;
mod score;
mod session;
mod update;
mod win_checker;

pub use consts::*;
pub use error::{GameError, Result};
pub use grid::Grid;
pub use models::{Coordinate, Direction, MoveOutcome, Tile, UserAction};
pub use score::{ScoreSnapshot, ScoreTracker};
pub use session::Session;
pub use update::{apply_move, can_move, step};
pub use win_checker::is_won;
