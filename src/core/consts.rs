/// Points awarded each time a box arrives on a goal cell.
pub const BOX_ON_GOAL_POINTS: u32 = 100;

pub const DEFAULT_PLAYER_NAME: &str = "User";
