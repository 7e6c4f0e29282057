use crate::core::{
    apply_move, can_move, is_won, step, Coordinate, Direction, GameError, Grid, MoveOutcome,
    Result, ScoreSnapshot, ScoreTracker, Tile, UserAction,
};

/// One loaded level being played: the grid, where the mover stands, and the score.
#[derive(Clone, Debug)]
pub struct Session {
    pub(super) grid: Grid,
    pub(super) mover: Coordinate,
    pub(super) score: ScoreTracker,
}

impl Session {
    /// Starts a session on `grid`, which must hold exactly one mover.
    pub fn new(grid: Grid, player_name: impl Into<String>) -> Result<Self> {
        let mover = find_single_mover(&grid)?;
        Ok(Session {
            grid,
            mover,
            score: ScoreTracker::new(player_name),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn mover(&self) -> Coordinate {
        self.mover
    }

    pub fn mover_on_goal(&self) -> bool {
        self.grid[&self.mover].is_goal_cell()
    }

    pub fn score(&self) -> &ScoreTracker {
        &self.score
    }

    pub fn snapshot(&self) -> ScoreSnapshot {
        self.score.snapshot()
    }

    pub fn can_move(&self, direction: Direction) -> bool {
        can_move(&self.grid, self.mover, direction)
    }

    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        apply_move(self, direction)
    }

    pub fn step(&mut self, action: UserAction) -> MoveOutcome {
        step(self, action)
    }

    pub fn is_won(&self) -> bool {
        is_won(&self.grid)
    }
}

fn find_single_mover(grid: &Grid) -> Result<Coordinate> {
    let mut movers = grid
        .cells()
        .filter(|(_, tile)| matches!(tile, Tile::Mover { .. }))
        .map(|(pos, _)| pos);

    let first = movers.next().ok_or(GameError::NoMover)?;
    if let Some(second) = movers.next() {
        return Err(GameError::MultipleMovers { first, second });
    }
    Ok(first)
}
