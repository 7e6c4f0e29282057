use serde::{Deserialize, Serialize};

use crate::core::BOX_ON_GOAL_POINTS;

/// One finished (or in-progress) session as it is written to the score history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    pub player_name: String,
    pub player_score: u32,
    #[serde(rename = "player_deplacement")]
    pub player_moves: u32,
}

impl std::fmt::Display for ScoreSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player: {}, Score: {}, Moves: {}",
            self.player_name, self.player_score, self.player_moves
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreTracker {
    player_name: String,
    points: u32,
    moves: u32,
}

impl ScoreTracker {
    pub fn new(player_name: impl Into<String>) -> Self {
        ScoreTracker {
            player_name: player_name.into(),
            points: 0,
            moves: 0,
        }
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub(crate) fn record_move(&mut self) {
        self.moves = self.moves.saturating_add(1);
    }

    pub(crate) fn record_box_on_goal(&mut self) {
        self.points = self.points.saturating_add(BOX_ON_GOAL_POINTS);
    }

    pub fn snapshot(&self) -> ScoreSnapshot {
        ScoreSnapshot {
            player_name: self.player_name.clone(),
            player_score: self.points,
            player_moves: self.moves,
        }
    }
}
