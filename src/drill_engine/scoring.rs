use serde::{Deserialize, Serialize};

use crate::drill_engine::session::Session;

/// End-of-round praise tier, from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Praise {
    Perfect,
    Great,
    Good,
    KeepTrying,
}

impl Praise {
    /// Tier for an accuracy in `0.0..=1.0`. Boundaries are inclusive.
    pub fn for_accuracy(accuracy: f64) -> Self {
        if accuracy >= 0.9 {
            Praise::Perfect
        } else if accuracy >= 0.7 {
            Praise::Great
        } else if accuracy >= 0.5 {
            Praise::Good
        } else {
            Praise::KeepTrying
        }
    }

    pub fn stars(self) -> u8 {
        match self {
            Praise::Perfect    => 3,
            Praise::Great      => 2,
            Praise::Good       => 1,
            Praise::KeepTrying => 0,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Praise::Perfect    => "Amazing! You're a superstar!",
            Praise::Great      => "Great job! Keep it up!",
            Praise::Good       => "Good work! You're getting there!",
            Praise::KeepTrying => "Nice try! Let's practice some more!",
        }
    }
}

pub fn stars_for_accuracy(accuracy: f64) -> u8 {
    Praise::for_accuracy(accuracy).stars()
}

/// 0-3 stars from the session's accuracy.
pub fn stars_for(session: &Session) -> u8 {
    stars_for_accuracy(session.accuracy())
}

pub fn praise_for(accuracy: f64) -> &'static str {
    Praise::for_accuracy(accuracy).message()
}
