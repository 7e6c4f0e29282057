use crate::core::{MoveOutcome, ScoreSnapshot, Session};

pub struct GameRenderState {
    pub score: ScoreSnapshot,
    pub boxes_on_goals: usize,
    pub total_boxes: usize,
    pub won: bool,
    pub error: Option<String>,
    pub last_outcome: Option<MoveOutcome>,
}

impl GameRenderState {
    pub fn from_session(session: &Session, last_outcome: Option<MoveOutcome>) -> Self {
        GameRenderState {
            score: session.snapshot(),
            boxes_on_goals: session.grid().count_boxes_on_goals(),
            total_boxes: session.grid().count_boxes(),
            won: session.is_won(),
            error: None,
            last_outcome,
        }
    }
}
