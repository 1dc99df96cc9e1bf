//! Core drill engine: sessions, option sets, and the mini-game state machines.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: game modes, cards, engine outcomes, audio cues |
//! | `session`    | Score, answer counts and timing for one drill |
//! | `options`    | Shuffled multiple-choice sets with the answer exactly once |
//! | `checker`    | Answer checking and outcome-to-session wiring |
//! | `deck`       | Distinct sampling and pair/doubled deck construction |
//! | `pair_match` | Two-card reveal matching with caller-driven re-hide |
//! | `whack`      | Hole grid, one target per round, hit/wrong/miss/timeout |
//! | `memory`     | Doubled deck, first flip + second flip resolution |
//! | `scoring`    | Stars and praise tiers from accuracy |
//! | `summary`    | End-of-round summary and its JSON payload |
//! | `schedule`   | Logical-clock queue for the caller's delayed actions |
//! | `content`    | Read-only content tables keyed by category and level |
//! | `config`     | Engine tunables, JSON loading and validation |
//! | `generator`  | `start_drill()`: picks the engine for a mode and drives it |
//! | `error`      | Precondition violations |

pub mod checker;
pub mod config;
pub mod content;
pub mod deck;
pub mod error;
pub mod generator;
pub mod memory;
pub mod models;
pub mod options;
pub mod pair_match;
pub mod schedule;
pub mod scoring;
pub mod session;
pub mod summary;
pub mod whack;

pub use checker::{
    apply_memory_outcome, apply_pair_outcome, apply_whack_outcome, check_answer, DEFAULT_POINTS,
};
pub use config::{EngineConfig, MemoryConfig, PairMatchConfig, TimeoutPolicy, WhackConfig};
pub use content::{Catalogue, Category, ContentItem, StaticCatalogue};
pub use error::{EngineError, Result};
pub use generator::{rng_from_seed, start_drill, Drill, DrillRequest, Game};
pub use memory::MemoryFlip;
pub use models::{
    CardFace, Cue, EngineKind, GameMode, MatchCard, MemoryOutcome, PairOutcome, WhackOutcome,
};
pub use options::generate_options;
pub use pair_match::PairMatch;
pub use schedule::{DeferredAction, Schedule, TaskId};
pub use scoring::{praise_for, stars_for, stars_for_accuracy, Praise};
pub use session::{create_session, Session};
pub use summary::RoundSummary;
pub use whack::Whack;
