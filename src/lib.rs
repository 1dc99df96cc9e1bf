//! # kids_drill_engine
//!
//! A synchronous, UI-agnostic state engine for children's learning drills.
//!
//! The crate tracks a drill session's progress and score, builds
//! multiple-choice option sets that always contain the right answer exactly
//! once, and runs three mini-game state machines: pair matching, timed
//! whack-a-mole, and two-flip memory. Rendering, audio and the content tables
//! live with the caller; the engine only takes plain values in and hands
//! structured outcomes back.
//!
//! ## How it works
//!
//! 1. Create a [`DrillRequest`] with a game mode, level and optional RNG seed.
//! 2. Call [`start_drill`] with the items for that level and an
//!    [`EngineConfig`]. The mode picks the engine (see
//!    [`GameMode::engine_kind`]) and the session is sized to match.
//! 3. Forward taps into the drill (`answer`, `flip_card`, `whack`, `flip`, ...)
//!    and render the returned outcomes. Delays such as re-hiding mismatched
//!    cards or expiring a whack round are queued by the caller on a
//!    [`Schedule`]; the engines themselves never wait.
//! 4. When [`Drill::is_complete`] turns true, [`Drill::summary`] gives the
//!    stars, praise message and accuracy for the results screen.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the same
//!   decks, option orders and mole layouts.
//! - **Idempotent taps**: re-flipping a settled card or tapping after a round
//!   resolved is an `Ignore` outcome and never double-counts.
//! - **Caller-owned timing**: no timers, threads or I/O inside the engine.
//!
//! ## Quick start
//!
//! ```rust
//! use kids_drill_engine::{
//!     start_drill, DrillRequest, EngineConfig, GameMode, WhackOutcome,
//! };
//!
//! let numbers: Vec<String> = (1..=10).map(|n| n.to_string()).collect();
//! let config = EngineConfig::default();
//! let mut drill = start_drill(
//!     DrillRequest { mode: GameMode::Whack, level: 1, rng_seed: Some(42) },
//!     &numbers,
//!     &config,
//! )
//! .unwrap();
//!
//! let target_hole = drill.spawn_moles().unwrap();
//! assert_eq!(drill.whack(target_hole).unwrap(), WhackOutcome::Hit { position: target_hole });
//! assert_eq!(drill.session.score(), 10);
//! ```

pub mod drill_engine;

// Convenience re-exports so callers can use `kids_drill_engine::start_drill`
// directly without reaching into `drill_engine::`.
pub use drill_engine::{
    apply_memory_outcome, apply_pair_outcome, apply_whack_outcome, check_answer,
    create_session, generate_options, praise_for, rng_from_seed, start_drill, stars_for,
    stars_for_accuracy, CardFace, Catalogue, Category, ContentItem, Cue, DeferredAction,
    Drill, DrillRequest, EngineConfig, EngineError, EngineKind, Game, GameMode, MatchCard,
    MemoryConfig, MemoryFlip, MemoryOutcome, PairMatch, PairMatchConfig, PairOutcome, Praise,
    RoundSummary, Schedule, Session, StaticCatalogue, TaskId, TimeoutPolicy, Whack,
    WhackConfig, WhackOutcome, DEFAULT_POINTS,
};
