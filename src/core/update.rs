use log::{debug, info, trace};

use crate::core::{Coordinate, Direction, Grid, MoveOutcome, Session, Tile, UserAction};

/// Whether the mover standing at `mover` can step (or push) towards `direction`.
pub fn can_move(grid: &Grid, mover: Coordinate, direction: Direction) -> bool {
    let next = mover.towards(direction, 1);
    let Ok(next_tile) = grid.at(next) else {
        return false;
    };

    match next_tile {
        Tile::Floor | Tile::Goal => true,
        Tile::Box { .. } => {
            let box_next = next.towards(direction, 1);
            grid.at(box_next).is_ok_and(Tile::is_occupiable)
        }
        Tile::Wall | Tile::Mover { .. } => false,
    }
}

/// Moves the mover one cell, pushing a box if one is ahead. A move that is
/// not legal changes nothing and returns [`MoveOutcome::Rejected`].
pub fn apply_move(session: &mut Session, direction: Direction) -> MoveOutcome {
    let mover = session.mover;
    if !can_move(&session.grid, mover, direction) {
        trace!("Rejected move {:?} from {}", direction, mover);
        return MoveOutcome::Rejected;
    }

    let grid = &mut session.grid;
    let next = mover.towards(direction, 1);
    let next_tile = grid[&next];

    let mut outcome = MoveOutcome::Stepped;
    if next_tile.is_box() {
        let box_next = next.towards(direction, 1);
        let onto_goal = grid[&box_next] == Tile::Goal;

        grid[&next] = Tile::Floor;
        grid[&box_next] = Tile::Box { on_goal: onto_goal };
        if onto_goal {
            session.score.record_box_on_goal();
            info!(
                "Box pushed onto goal at {}, score is now {}",
                box_next,
                session.score.points()
            );
        }
        outcome = MoveOutcome::Pushed { onto_goal };
    }

    // The goal under the mover survives it leaving
    let vacated = if grid[&mover].is_goal_cell() {
        Tile::Goal
    } else {
        Tile::Floor
    };
    grid[&mover] = vacated;

    grid[&next] = Tile::Mover {
        on_goal: next_tile.is_goal_cell(),
    };
    session.mover = next;
    session.score.record_move();

    debug!("Moved {:?} to {} ({:?})", direction, next, outcome);
    outcome
}

pub fn step(session: &mut Session, action: UserAction) -> MoveOutcome {
    match action {
        UserAction::Move(direction) => apply_move(session, direction),
    }
}
