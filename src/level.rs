use crate::core::{GameError, Grid, Result, Session, Tile};

/// Builds a grid from XSB rows, one tile per character. Rows keep their own
/// length.
pub fn parse_rows<S: AsRef<str>>(rows: &[S]) -> Grid {
    let rows = rows
        .iter()
        .map(|row| row.as_ref().chars().map(Tile::from_xsb_char).collect())
        .collect();
    Grid::from_rows(rows)
}

/// Parses a multi-line XSB level. Blank lines are skipped, so a level can be
/// written as an indented raw string.
pub fn parse_level(s: &str) -> Result<Grid> {
    let rows: Vec<&str> = s
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .collect();
    if rows.is_empty() {
        return Err(GameError::EmptyLevel);
    }
    Ok(parse_rows(&rows))
}

pub fn load_session(s: &str, player_name: impl Into<String>) -> Result<Session> {
    let grid = parse_level(s)?;
    Session::new(grid, player_name)
}
