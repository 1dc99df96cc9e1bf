//! Turning answers and engine outcomes into session progress.

use log::trace;

use crate::drill_engine::{
    config::TimeoutPolicy,
    models::{MemoryOutcome, PairOutcome, WhackOutcome},
    session::Session,
};

/// Default points for a correct quiz answer.
pub const DEFAULT_POINTS: u32 = 10;

/// Compare by value and record the result. Returns whether they were equal.
pub fn check_answer<T>(session: &mut Session, submitted: &T, expected: &T, points: u32) -> bool
where
    T: PartialEq + ?Sized,
{
    let correct = submitted == expected;
    if correct {
        session.record_correct(points);
    } else {
        session.record_wrong();
    }
    trace!("answer checked: correct={correct} question={}", session.current_question());
    correct
}

/// A confirmed pair counts as a correct answer; reveals and mismatches don't
/// touch the session.
pub fn apply_pair_outcome(session: &mut Session, outcome: &PairOutcome, points: u32) {
    if let PairOutcome::Match { .. } = outcome {
        session.record_correct(points);
    }
}

pub fn apply_memory_outcome<T>(session: &mut Session, outcome: &MemoryOutcome<T>, points: u32) {
    if let MemoryOutcome::Match { .. } = outcome {
        session.record_correct(points);
    }
}

/// Each resolved whack round is one question on the session.
pub fn apply_whack_outcome(
    session: &mut Session,
    outcome: &WhackOutcome,
    policy: TimeoutPolicy,
    points: u32,
) {
    match outcome {
        WhackOutcome::Hit { .. } => {
            session.record_correct(points);
        }
        WhackOutcome::WrongHit { .. } | WhackOutcome::Miss { .. } => {
            session.record_wrong();
        }
        WhackOutcome::Timeout if policy == TimeoutPolicy::PenalizeAsMiss => {
            session.record_wrong();
        }
        WhackOutcome::Timeout | WhackOutcome::Ignore => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drill_engine::models::GameMode;

    #[test]
    fn matching_answer_scores() {
        let mut s = Session::new(GameMode::Quiz, 1, 10);
        assert!(check_answer(&mut s, "B", "B", DEFAULT_POINTS));
        assert_eq!((s.score(), s.correct_count(), s.current_question()), (10, 1, 1));
        assert_eq!(s.accuracy(), 1.0);
    }

    #[test]
    fn value_equality_not_identity() {
        let mut s = Session::new(GameMode::Listen, 1, 10);
        let submitted = String::from("月");
        let expected = "月".to_string();
        assert!(check_answer(&mut s, &submitted, &expected, 5));
        assert!(!check_answer(&mut s, &submitted, &"日".to_string(), 5));
        assert_eq!((s.score(), s.wrong_count()), (5, 1));
    }

    #[test]
    fn whack_timeouts_follow_policy() {
        let mut s = Session::new(GameMode::Whack, 1, 10);
        apply_whack_outcome(&mut s, &WhackOutcome::Timeout, TimeoutPolicy::Ignore, 10);
        assert_eq!(s.current_question(), 0);
        apply_whack_outcome(&mut s, &WhackOutcome::Timeout, TimeoutPolicy::PenalizeAsMiss, 10);
        apply_whack_outcome(&mut s, &WhackOutcome::Hit { position: 2 }, TimeoutPolicy::Ignore, 10);
        apply_whack_outcome(&mut s, &WhackOutcome::Ignore, TimeoutPolicy::PenalizeAsMiss, 10);
        assert_eq!((s.correct_count(), s.wrong_count(), s.score()), (1, 1, 10));
    }

    #[test]
    fn only_matches_count_for_card_games() {
        let mut s = Session::new(GameMode::Match, 1, 3);
        apply_pair_outcome(&mut s, &PairOutcome::Flip { index: 0 }, 10);
        apply_pair_outcome(&mut s, &PairOutcome::NoMatch { indices: [0, 1] }, 10);
        apply_pair_outcome(&mut s, &PairOutcome::Match { indices: [0, 2], complete: false }, 10);
        apply_memory_outcome(&mut s, &MemoryOutcome::FirstFlip { index: 1, value: 'x' }, 10);
        apply_memory_outcome::<char>(&mut s, &MemoryOutcome::Match { indices: [1, 3], complete: false }, 10);
        assert_eq!((s.correct_count(), s.wrong_count()), (2, 0));
    }
}
