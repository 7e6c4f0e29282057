pub use dissimilar::diff as __diff;
use crate::core::{Direction, MoveOutcome, Session, UserAction};
use crate::level::load_session;

#[macro_export]
macro_rules! assert_eq_text {
    ($left:expr, $right:expr) => {
        assert_eq_text!($left, $right,)
    };
    ($left:expr, $right:expr, $($tt:tt)*) => {{
        let left = $left;
        let right = $right;
        if left != right {
            if left.trim() == right.trim() {
                std::eprintln!("Left:\n{:?}\n\nRight:\n{:?}\n\nWhitespace difference\n", left, right);
            } else {
                let diff = $crate::test::test_util::__diff(left, right);
                std::eprintln!("Left:\n{}\n\nRight:\n{}\n\nDiff:\n{}\n", left, right, $crate::test::test_util::format_diff(diff));
            }
            std::eprintln!($($tt)*);
            panic!("text differs");
        }
    }};
}

pub fn format_diff(chunks: Vec<dissimilar::Chunk>) -> String {
    let mut buf = String::new();
    for chunk in chunks {
        let formatted = match chunk {
            dissimilar::Chunk::Equal(text) => text.into(),
            dissimilar::Chunk::Delete(text) => format!("\x1b[41m{}\x1b[0m", text),
            dissimilar::Chunk::Insert(text) => format!("\x1b[42m{}\x1b[0m", text),
        };
        buf.push_str(&formatted);
    }
    buf
}

pub struct GameTestState {
    pub session: Session,
}

impl GameTestState {
    pub fn new(level: &str) -> Self {
        let session = load_session(level, "tester").unwrap();
        Self { session }
    }

    pub fn game_to_string(&self) -> String {
        self.session.grid().to_xsb_string().trim_matches('\n').into()
    }

    pub fn assert_move(&mut self, direction: Direction) -> MoveOutcome {
        self.assert_step(UserAction::Move(direction))
    }

    pub fn assert_moves(&mut self, directions: &[Direction]) {
        for &dir in directions {
            self.assert_move(dir);
        }
    }

    pub fn assert_step(&mut self, action: UserAction) -> MoveOutcome {
        let before = self.game_to_string();
        let outcome = self.session.step(action);
        if !outcome.is_accepted() {
            panic!("Expected {:?} to be accepted, in map\n{}", action, before);
        }
        outcome
    }

    /// Applies a move that must be rejected, and checks nothing changed.
    pub fn assert_rejected(&mut self, direction: Direction) {
        let before = self.session.clone();
        assert!(!self.session.can_move(direction), "{:?} should not be legal", direction);

        let outcome = self.session.apply_move(direction);
        assert_eq!(outcome, MoveOutcome::Rejected);
        assert_eq!(self.session.grid(), before.grid());
        assert_eq!(self.session.mover(), before.mover());
        assert_eq!(self.session.score(), before.score());
    }

    pub fn assert_matches(&self, expected: &str) {
        let actual = self.game_to_string();
        assert_eq_text!(expected.trim_matches('\n'), actual.as_str().trim_matches('\n'));
    }

    pub fn points(&self) -> u32 {
        self.session.score().points()
    }

    pub fn moves(&self) -> u32 {
        self.session.score().moves()
    }
}
