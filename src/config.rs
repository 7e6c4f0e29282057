//! Command-line configuration for the warehouse binary.

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::core::DEFAULT_PLAYER_NAME;

/// Push every box onto a goal.
#[derive(Parser, Debug)]
#[command(name = "warehouse")]
#[command(about = "Terminal Sokoban warehouse", long_about = None)]
#[command(version)]
pub struct Args {
    /// Name recorded in the score history
    #[arg(short, long, default_value = DEFAULT_PLAYER_NAME)]
    pub player: String,

    /// Index of the built-in level to play
    #[arg(short, long, default_value_t = 2)]
    pub level: usize,

    /// Play a level from an XSB text file instead of a built-in one
    #[arg(long)]
    pub level_file: Option<PathBuf>,

    /// JSON file that won sessions are appended to
    #[arg(long, default_value = "jeu.json")]
    pub scores: PathBuf,

    /// Print the score history and exit
    #[arg(long)]
    pub show_scores: bool,

    /// Raise the log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["warehouse"]);
        assert_eq!(args.player, DEFAULT_PLAYER_NAME);
        assert_eq!(args.level, 2);
        assert_eq!(args.scores, PathBuf::from("jeu.json"));
        assert!(args.level_file.is_none());
        assert_eq!(args.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn verbosity_counts() {
        let args = Args::parse_from(["warehouse", "-vv", "--player", "Alice", "--level", "0"]);
        assert_eq!(args.log_level(), LevelFilter::Debug);
        assert_eq!(args.player, "Alice");
        assert_eq!(args.level, 0);
    }
}
