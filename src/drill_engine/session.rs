use chrono::{DateTime, Duration, Utc};
use log::debug;
use serde::Serialize;

use crate::drill_engine::models::GameMode;

/// Progress of one drill: score, answer counts and when it started.
///
/// Counters only ever go up, and `current_question` always equals
/// `correct_count + wrong_count`. Once `total_questions` answers have been
/// recorded the session is complete and further answers are not counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    mode: GameMode,
    level: u32,
    score: u32,
    correct_count: u32,
    wrong_count: u32,
    total_questions: u32,
    current_question: u32,
    started_at: DateTime<Utc>,
}

impl Session {
    /// Start a session now. `level` and `total_questions` are at least 1.
    pub fn new(mode: GameMode, level: u32, total_questions: u32) -> Self {
        Self::started_at_time(mode, level, total_questions, Utc::now())
    }

    /// Start a session with an explicit start time.
    pub fn started_at_time(
        mode: GameMode,
        level: u32,
        total_questions: u32,
        started_at: DateTime<Utc>,
    ) -> Self {
        let session = Session {
            mode,
            level: level.max(1),
            score: 0,
            correct_count: 0,
            wrong_count: 0,
            total_questions: total_questions.max(1),
            current_question: 0,
            started_at,
        };
        debug!(
            "session started: mode={} level={} total={}",
            session.mode, session.level, session.total_questions
        );
        session
    }

    /// Count a correct answer worth `points`.
    ///
    /// Returns `false` (and changes nothing) if the session is already complete.
    pub fn record_correct(&mut self, points: u32) -> bool {
        if self.is_complete() {
            return false;
        }
        self.score = self.score.saturating_add(points);
        self.correct_count += 1;
        self.current_question += 1;
        true
    }

    /// Count a wrong answer. Returns `false` if the session is already complete.
    pub fn record_wrong(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.wrong_count += 1;
        self.current_question += 1;
        true
    }

    pub fn is_complete(&self) -> bool {
        self.current_question >= self.total_questions
    }

    /// Correct answers over answered questions; 0 before the first answer.
    pub fn accuracy(&self) -> f64 {
        let answered = self.correct_count + self.wrong_count;
        if answered == 0 {
            return 0.0;
        }
        f64::from(self.correct_count) / f64::from(answered)
    }

    pub fn remaining(&self) -> u32 {
        self.total_questions - self.current_question
    }

    pub fn elapsed_at(&self, now: DateTime<Utc>) -> Duration {
        now - self.started_at
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed_at(Utc::now())
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    pub fn wrong_count(&self) -> u32 {
        self.wrong_count
    }

    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    pub fn current_question(&self) -> u32 {
        self.current_question
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

/// Free-function form of [`Session::new`].
pub fn create_session(mode: GameMode, level: u32, total_questions: u32) -> Session {
    Session::new(mode, level, total_questions)
}
