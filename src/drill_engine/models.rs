use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Game modes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    Flashcard,
    Quiz,
    Listen,
    Match,
    Whack,
    Memory,
    Pattern,
    Category,
    Compare,
    Addition,
    Challenge,
}

impl GameMode {
    pub const ALL: [GameMode; 11] = [
        GameMode::Flashcard,
        GameMode::Quiz,
        GameMode::Listen,
        GameMode::Match,
        GameMode::Whack,
        GameMode::Memory,
        GameMode::Pattern,
        GameMode::Category,
        GameMode::Compare,
        GameMode::Addition,
        GameMode::Challenge,
    ];

    /// Which engine drives a screen running this mode.
    ///
    /// Every question/answer style mode shares the plain session flow; only
    /// the three mini-games carry their own state machine.
    pub fn engine_kind(self) -> EngineKind {
        match self {
            GameMode::Match  => EngineKind::PairMatch,
            GameMode::Whack  => EngineKind::Whack,
            GameMode::Memory => EngineKind::Memory,
            GameMode::Flashcard
            | GameMode::Quiz
            | GameMode::Listen
            | GameMode::Pattern
            | GameMode::Category
            | GameMode::Compare
            | GameMode::Addition
            | GameMode::Challenge => EngineKind::Quiz,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameMode::Flashcard => "Flashcards",
            GameMode::Quiz      => "Quiz",
            GameMode::Listen    => "Listen & Pick",
            GameMode::Match     => "Pair Match",
            GameMode::Whack     => "Whack-a-Mole",
            GameMode::Memory    => "Memory Flip",
            GameMode::Pattern   => "Patterns",
            GameMode::Category  => "Sort by Category",
            GameMode::Compare   => "Compare",
            GameMode::Addition  => "Addition",
            GameMode::Challenge => "Challenge",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineKind {
    Quiz,
    PairMatch,
    Whack,
    Memory,
}

// ---------------------------------------------------------------------------
// Audio cues
// ---------------------------------------------------------------------------

/// Fire-and-forget sound the caller may play for an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cue {
    Flip,
    Praise,
    Encourage,
    Complete,
    Silent,
}

impl Cue {
    /// Name the audio subsystem is keyed by. `Silent` has none.
    pub fn as_str(self) -> Option<&'static str> {
        match self {
            Cue::Flip      => Some("flip"),
            Cue::Praise    => Some("praise"),
            Cue::Encourage => Some("encourage"),
            Cue::Complete  => Some("complete"),
            Cue::Silent    => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Cards
// ---------------------------------------------------------------------------

/// Which representation of a pair a card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardFace {
    Symbol,
    Picture,
    /// Both cards of the pair look the same.
    Twin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchCard<T> {
    /// Grouping key: the two cards of a pair share it.
    pub id: usize,
    pub face: CardFace,
    pub value: T,
    pub revealed: bool,
    pub matched: bool,
}

// ---------------------------------------------------------------------------
// Engine outcomes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairOutcome {
    /// Redundant tap; nothing changed.
    Ignore,
    Flip { index: usize },
    Match { indices: [usize; 2], complete: bool },
    /// The caller re-hides `indices` via `reset_flipped` after its delay.
    NoMatch { indices: [usize; 2] },
}

impl PairOutcome {
    pub fn cue(&self) -> Cue {
        match self {
            PairOutcome::Ignore                          => Cue::Silent,
            PairOutcome::Flip { .. }                     => Cue::Flip,
            PairOutcome::Match { complete: true, .. }    => Cue::Complete,
            PairOutcome::Match { .. }                    => Cue::Praise,
            PairOutcome::NoMatch { .. }                  => Cue::Encourage,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WhackOutcome {
    /// Tap outside a live round.
    Ignore,
    Hit { position: usize },
    WrongHit { position: usize },
    Miss { position: usize },
    /// The round ran out of time without being resolved.
    Timeout,
}

impl WhackOutcome {
    pub fn cue(&self) -> Cue {
        match self {
            WhackOutcome::Ignore         => Cue::Silent,
            WhackOutcome::Hit { .. }     => Cue::Praise,
            WhackOutcome::WrongHit { .. }
            | WhackOutcome::Miss { .. }
            | WhackOutcome::Timeout      => Cue::Encourage,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MemoryOutcome<T> {
    Ignore,
    FirstFlip { index: usize, value: T },
    Match { indices: [usize; 2], complete: bool },
    /// The caller hides `indices` via `hide_cards` after its delay.
    NoMatch { indices: [usize; 2] },
}

impl<T> MemoryOutcome<T> {
    pub fn cue(&self) -> Cue {
        match self {
            MemoryOutcome::Ignore                       => Cue::Silent,
            MemoryOutcome::FirstFlip { .. }             => Cue::Flip,
            MemoryOutcome::Match { complete: true, .. } => Cue::Complete,
            MemoryOutcome::Match { .. }                 => Cue::Praise,
            MemoryOutcome::NoMatch { .. }               => Cue::Encourage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_three_mini_games_get_their_own_engine() {
        let own: Vec<GameMode> = GameMode::ALL
            .iter()
            .copied()
            .filter(|m| m.engine_kind() != EngineKind::Quiz)
            .collect();
        assert_eq!(own, vec![GameMode::Match, GameMode::Whack, GameMode::Memory]);
    }

    #[test]
    fn game_mode_serialises_snake_case() {
        let json = serde_json::to_string(&GameMode::Flashcard).unwrap();
        assert_eq!(json, "\"flashcard\"");
        let back: GameMode = serde_json::from_str("\"addition\"").unwrap();
        assert_eq!(back, GameMode::Addition);
    }

    #[test]
    fn cues_map_to_audio_names() {
        assert_eq!(PairOutcome::Flip { index: 0 }.cue().as_str(), Some("flip"));
        assert_eq!(WhackOutcome::Timeout.cue().as_str(), Some("encourage"));
        assert_eq!(
            MemoryOutcome::<char>::Match { indices: [0, 1], complete: true }.cue().as_str(),
            Some("complete")
        );
        assert_eq!(MemoryOutcome::<char>::Ignore.cue().as_str(), None);
    }
}
