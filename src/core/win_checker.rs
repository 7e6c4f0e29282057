use crate::core::{Grid, Tile};

/// True when no box is left off a goal. A grid without boxes is won.
pub fn is_won(grid: &Grid) -> bool {
    for row in grid.rows() {
        for tile in row {
            if *tile == (Tile::Box { on_goal: false }) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod test {
    use super::*;
    use Tile::*;

    #[test]
    fn no_boxes_is_won() {
        let grid = Grid::from_rows(vec![vec![Wall, Mover { on_goal: false }, Goal]]);
        assert!(is_won(&grid));
    }

    #[test]
    fn one_loose_box_is_not_won() {
        let grid = Grid::from_rows(vec![
            vec![Box { on_goal: true }, Mover { on_goal: false }],
            vec![Box { on_goal: false }, Goal],
        ]);
        assert!(!is_won(&grid));
    }

    #[test]
    fn uncovered_goals_do_not_matter() {
        let grid = Grid::from_rows(vec![vec![Box { on_goal: true }, Goal, Mover { on_goal: true }]]);
        assert!(is_won(&grid));
    }
}
