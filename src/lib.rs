//! Headless Sokoban warehouse engine plus a terminal frontend.
//!
//! Tiles: '#' wall, '@' mover, '$' box, '.' goal, '*' box on goal, '+' mover on goal,
//! ' ' or '-' floor.

pub mod config;
pub mod console_interface;
pub mod core;
pub mod level;
pub mod levels;
pub mod models;
pub mod score_history;

#[cfg(test)]
mod test;
