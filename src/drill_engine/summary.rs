use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};

use crate::drill_engine::{
    models::GameMode,
    scoring::Praise,
    session::Session,
};

/// End-of-round numbers for the results screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundSummary {
    pub mode: GameMode,
    pub level: u32,
    pub score: u32,
    pub correct: u32,
    pub wrong: u32,
    pub total: u32,
    pub accuracy: f64,
    pub stars: u8,
    pub praise: Praise,
    pub elapsed_ms: i64,
}

impl RoundSummary {
    pub fn from_session(session: &Session, now: DateTime<Utc>) -> Self {
        let accuracy = session.accuracy();
        let praise = Praise::for_accuracy(accuracy);
        RoundSummary {
            mode: session.mode(),
            level: session.level(),
            score: session.score(),
            correct: session.correct_count(),
            wrong: session.wrong_count(),
            total: session.total_questions(),
            accuracy,
            stars: praise.stars(),
            praise,
            elapsed_ms: session.elapsed_at(now).num_milliseconds().max(0),
        }
    }

    /// Card games only put matches on the session, so their rating comes
    /// from pairs found against pairs tried instead.
    pub fn for_card_game(session: &Session, matched: u32, attempts: u32, now: DateTime<Utc>) -> Self {
        let accuracy = if attempts == 0 {
            0.0
        } else {
            f64::from(matched) / f64::from(attempts)
        };
        let praise = Praise::for_accuracy(accuracy);
        RoundSummary {
            correct: matched,
            wrong: attempts.saturating_sub(matched),
            accuracy,
            stars: praise.stars(),
            praise,
            ..Self::from_session(session, now)
        }
    }

    /// Percent rounded to a whole number, as shown to the player.
    pub fn accuracy_percent(&self) -> u32 {
        (self.accuracy * 100.0).round() as u32
    }

    /// Payload the results screen renders from.
    pub fn to_json(&self) -> Value {
        json!({
            "mode": self.mode,
            "title": self.mode.to_string(),
            "level": self.level,
            "score": self.score,
            "correct": self.correct,
            "wrong": self.wrong,
            "total": self.total,
            "accuracy_percent": self.accuracy_percent(),
            "stars": self.stars,
            "message": self.praise.message(),
            "elapsed_seconds": self.elapsed_ms / 1000,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn summary_reflects_session() {
        let start = Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap();
        let mut s = Session::started_at_time(GameMode::Compare, 2, 4, start);
        s.record_correct(10);
        s.record_correct(10);
        s.record_correct(10);
        s.record_wrong();

        let summary = RoundSummary::from_session(&s, start + Duration::seconds(75));
        assert_eq!(summary.accuracy_percent(), 75);
        assert_eq!(summary.stars, 2);
        assert_eq!(summary.praise, Praise::Great);

        let v = summary.to_json();
        assert_eq!(v["mode"], "compare");
        assert_eq!(v["score"], 30);
        assert_eq!(v["elapsed_seconds"], 75);
        assert_eq!(v["message"], Praise::Great.message());
    }

    #[test]
    fn card_game_rating_counts_misses() {
        let start = Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap();
        let mut s = Session::started_at_time(GameMode::Memory, 1, 6, start);
        for _ in 0..6 {
            s.record_correct(10);
        }
        assert_eq!(s.accuracy(), 1.0);

        let summary = RoundSummary::for_card_game(&s, 6, 26, start);
        assert_eq!((summary.correct, summary.wrong, summary.total), (6, 20, 6));
        assert_eq!(summary.score, 60);
        assert_eq!(summary.stars, 0);
        assert_eq!(summary.praise, Praise::KeepTrying);

        let clean = RoundSummary::for_card_game(&s, 6, 6, start);
        assert_eq!((clean.stars, clean.accuracy_percent()), (3, 100));
        assert_eq!(RoundSummary::for_card_game(&s, 0, 0, start).accuracy, 0.0);
    }
}
