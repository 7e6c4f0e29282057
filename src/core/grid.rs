use crate::core::{Coordinate, GameError, Result, Tile};

/// The warehouse floor plan. Rows may have different lengths; a coordinate is
/// inside the grid only if its row exists and is long enough.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: Vec<Vec<Tile>>,
}

impl Grid {
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Self {
        Grid { rows }
    }

    pub fn height(&self) -> i32 {
        to_coord(self.rows.len())
    }

    /// Length of the longest row.
    pub fn width(&self) -> i32 {
        to_coord(self.rows.iter().map(|row| row.len()).max().unwrap_or(0))
    }

    pub fn contains(&self, pos: &Coordinate) -> bool {
        if pos.x < 0 || pos.y < 0 {
            return false;
        }
        self.rows
            .get(pos.y as usize)
            .is_some_and(|row| (pos.x as usize) < row.len())
    }

    pub fn get(&self, pos: &Coordinate) -> Option<Tile> {
        if !self.contains(pos) {
            return None;
        }
        Some(self[pos])
    }

    pub fn at(&self, pos: Coordinate) -> Result<Tile> {
        self.get(&pos).ok_or(GameError::OutOfBounds(pos))
    }

    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.rows
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, Tile)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &tile)| (Coordinate::new(to_coord(x), to_coord(y)), tile))
        })
    }

    pub fn count_boxes(&self) -> usize {
        self.cells().filter(|(_, tile)| tile.is_box()).count()
    }

    pub fn count_boxes_on_goals(&self) -> usize {
        self.cells()
            .filter(|(_, tile)| matches!(tile, Tile::Box { on_goal: true }))
            .count()
    }

    pub fn to_xsb_string(&self) -> String {
        let mut result = String::new();
        for row in &self.rows {
            for tile in row {
                result.push(tile.xsb_char());
            }
            result.push('\n');
        }
        result
    }
}

/// Grids larger than `i32::MAX` cells on a side report `i32::MAX`.
fn to_coord(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

impl std::ops::Index<&Coordinate> for Grid {
    type Output = Tile;

    fn index(&self, index: &Coordinate) -> &Self::Output {
        &self.rows[index.y as usize][index.x as usize]
    }
}

impl std::ops::IndexMut<&Coordinate> for Grid {
    fn index_mut(&mut self, index: &Coordinate) -> &mut Self::Output {
        &mut self.rows[index.y as usize][index.x as usize]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use Tile::*;

    fn ragged() -> Grid {
        Grid::from_rows(vec![
            vec![Wall, Wall, Wall],
            vec![Wall, Mover { on_goal: false }],
            vec![Wall, Floor, Goal, Box { on_goal: false }],
        ])
    }

    #[test]
    fn contains_respects_ragged_rows() {
        let grid = ragged();
        assert!(grid.contains(&Coordinate::new(1, 1)));
        assert!(!grid.contains(&Coordinate::new(2, 1)));
        assert!(grid.contains(&Coordinate::new(3, 2)));
        assert!(!grid.contains(&Coordinate::new(0, 3)));
        assert!(!grid.contains(&Coordinate::new(-1, 0)));
        assert!(!grid.contains(&Coordinate::new(0, -1)));
    }

    #[test]
    fn at_reports_out_of_bounds_instead_of_wrapping() {
        let grid = ragged();
        assert_eq!(grid.at(Coordinate::new(2, 2)), Ok(Goal));
        let outside = Coordinate::new(2, 1);
        assert_eq!(grid.at(outside), Err(GameError::OutOfBounds(outside)));

        let far = Coordinate::new(1, 1).towards(crate::core::Direction::Right, i32::MAX);
        assert_eq!(grid.at(far), Err(GameError::OutOfBounds(far)));
    }

    #[test]
    fn oversized_lengths_clamp_to_i32_max() {
        assert_eq!(to_coord(7), 7);
        assert_eq!(to_coord(i32::MAX as usize), i32::MAX);
        assert_eq!(to_coord(usize::MAX), i32::MAX);
    }

    #[test]
    fn dimensions_use_longest_row() {
        let grid = ragged();
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.width(), 4);
    }

    #[test]
    fn cells_are_row_major() {
        let grid = ragged();
        let coords: Vec<_> = grid.cells().map(|(c, _)| (c.x, c.y)).collect();
        assert_eq!(
            coords,
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (0, 2), (1, 2), (2, 2), (3, 2)]
        );
    }
}
