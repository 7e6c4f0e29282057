// Terminal Sokoban warehouse
// Controls: W/A/S/D or arrow keys (immediate response). Q to quit.
// Tiles: '#' wall, '@' mover, '$' box, '.' goal, '*' box on goal, '+' mover on goal, ' ' floor.

use clap::Parser;
use log::{error, info};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;

use warehouse_engine::config::Args;
use warehouse_engine::console_interface::ConsoleInput::*;
use warehouse_engine::console_interface::{cleanup_terminal, handle_input, render_game, setup_terminal};
use warehouse_engine::core::{MoveOutcome, ScoreSnapshot, Session};
use warehouse_engine::level::load_session;
use warehouse_engine::levels::{BUILTIN_LEVELS, builtin_level};
use warehouse_engine::models::GameRenderState;
use warehouse_engine::score_history::ScoreHistory;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    if args.show_scores {
        let history = ScoreHistory::load(&args.scores)?;
        for record in history.records() {
            println!("{}", record);
        }
        return Ok(());
    }

    let level_text = match &args.level_file {
        Some(path) => std::fs::read_to_string(path)?,
        None => builtin_level(args.level)
            .ok_or_else(|| {
                format!(
                    "No built-in level {}, there are {}",
                    args.level,
                    BUILTIN_LEVELS.len()
                )
            })?
            .to_string(),
    };
    let session = load_session(&level_text, args.player.as_str())?;
    info!("Loaded level for player {}", args.player);

    let mut terminal = setup_terminal()?;
    let result = run_interactive(session, &args, &mut terminal);
    cleanup_terminal()?;

    if let Some(snapshot) = result? {
        println!("{}", snapshot);
    }
    Ok(())
}

/// Plays until the player quits or wins. Returns the final score when won.
fn run_interactive(
    mut session: Session,
    args: &Args,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<Option<ScoreSnapshot>, Box<dyn std::error::Error>> {
    // A level can be loaded already solved
    let first_render = render_state(&session, None, args);
    render_game(terminal, session.grid(), &first_render)?;
    if first_render.won {
        wait_for_any_key();
        return Ok(Some(session.snapshot()));
    }

    loop {
        match handle_input() {
            Ok(Quit) => return Ok(None),
            Ok(UserAction(user_action)) => {
                let outcome = session.step(user_action);
                let to_render = render_state(&session, Some(outcome), args);
                render_game(terminal, session.grid(), &to_render)?;

                if to_render.won {
                    wait_for_any_key();
                    return Ok(Some(session.snapshot()));
                }
            }
            Ok(_) => {
                // No input, continue polling
            }
            Err(err) => {
                error!("error reading input: {}", err);
                return Ok(None);
            }
        }
    }
}

/// Builds the frame for `session`, saving the score when the level is won.
fn render_state(session: &Session, last_outcome: Option<MoveOutcome>, args: &Args) -> GameRenderState {
    let mut to_render = GameRenderState::from_session(session, last_outcome);
    // The board is finished even if the history cannot be written
    match ScoreHistory::record_if_won(&args.scores, session) {
        Ok(Some(_)) => info!("Level won: {}", to_render.score),
        Ok(None) => {}
        Err(err) => {
            error!("Could not save score: {}", err);
            to_render.error = Some(err.to_string());
        }
    }
    to_render
}

// Keep showing the win screen until user inputs
fn wait_for_any_key() {
    loop {
        match handle_input() {
            Ok(Timeout) => {}
            Ok(_) => break,
            Err(err) => {
                error!("error reading input: {}", err);
                break;
            }
        }
    }
}
