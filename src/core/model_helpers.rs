use crate::core::{Coordinate, Direction, MoveOutcome, Tile, UserAction};

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Coordinate { x, y }
    }

    /// The coordinate `offset` cells away in `direction`.
    ///
    /// `Coordinate::new(3, 4).towards(Direction::Right, 2) == Coordinate::new(5, 4)`
    ///
    /// `offset` is expected to be positive. Results clamp at the `i32` range,
    /// which is always outside any grid.
    pub fn towards(self, direction: Direction, offset: i32) -> Coordinate {
        let delta = direction.delta();
        Coordinate {
            x: self.x.saturating_add(delta.x.saturating_mul(offset)),
            y: self.y.saturating_add(delta.y.saturating_mul(offset)),
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    fn delta(self) -> Coordinate {
        match self {
            Direction::Up => Coordinate { x: 0, y: -1 },
            Direction::Down => Coordinate { x: 0, y: 1 },
            Direction::Left => Coordinate { x: -1, y: 0 },
            Direction::Right => Coordinate { x: 1, y: 0 },
        }
    }
}

impl Tile {
    /// Nothing is standing here, a box or the mover may enter.
    pub const fn is_occupiable(self) -> bool {
        matches!(self, Tile::Floor | Tile::Goal)
    }

    pub const fn is_movable_entity(self) -> bool {
        matches!(self, Tile::Box { .. } | Tile::Mover { .. })
    }

    pub const fn blocks_everything(self) -> bool {
        matches!(self, Tile::Wall)
    }

    pub const fn is_box(self) -> bool {
        matches!(self, Tile::Box { .. })
    }

    /// Whether the cell is conceptually a goal, whatever stands on it.
    pub const fn is_goal_cell(self) -> bool {
        match self {
            Tile::Goal => true,
            Tile::Box { on_goal } | Tile::Mover { on_goal } => on_goal,
            Tile::Floor | Tile::Wall => false,
        }
    }

    /// Tile for one character of an XSB level row. Unknown characters are floor.
    pub const fn from_xsb_char(ch: char) -> Tile {
        match ch {
            '#' => Tile::Wall,
            '@' => Tile::Mover { on_goal: false },
            '+' => Tile::Mover { on_goal: true },
            '$' => Tile::Box { on_goal: false },
            '*' => Tile::Box { on_goal: true },
            '.' => Tile::Goal,
            _ => Tile::Floor,
        }
    }

    pub const fn xsb_char(self) -> char {
        match self {
            Tile::Floor => ' ',
            Tile::Goal => '.',
            Tile::Wall => '#',
            Tile::Box { on_goal: false } => '$',
            Tile::Box { on_goal: true } => '*',
            Tile::Mover { on_goal: false } => '@',
            Tile::Mover { on_goal: true } => '+',
        }
    }
}

impl UserAction {
    pub fn all_actions() -> Vec<UserAction> {
        Direction::ALL.iter().map(|&d| UserAction::Move(d)).collect()
    }
}

impl MoveOutcome {
    pub const fn is_accepted(self) -> bool {
        !matches!(self, MoveOutcome::Rejected)
    }
}
