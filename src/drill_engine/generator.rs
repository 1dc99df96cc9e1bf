use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::drill_engine::{
    checker::{apply_memory_outcome, apply_pair_outcome, apply_whack_outcome, check_answer},
    config::EngineConfig,
    error::{EngineError, Result},
    memory::MemoryFlip,
    models::{EngineKind, GameMode, MemoryOutcome, PairOutcome, WhackOutcome},
    options::generate_options,
    pair_match::PairMatch,
    session::Session,
    summary::RoundSummary,
    whack::Whack,
};

/// Seeded RNG for reproducible decks and layouts; entropy when `None`.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillRequest {
    pub mode: GameMode,
    pub level: u32,
    pub rng_seed: Option<u64>,
}

impl DrillRequest {
    /// Level 1, entropy seed.
    pub fn new(mode: GameMode) -> Self {
        DrillRequest { mode, level: 1, rng_seed: None }
    }
}

/// Engine state for the running drill; one variant per engine.
#[derive(Debug, Clone)]
pub enum Game<T> {
    Quiz,
    PairMatch(PairMatch<T>),
    Whack(Whack<T>),
    Memory(MemoryFlip<T>),
}

impl<T> Game<T> {
    pub fn kind(&self) -> EngineKind {
        match self {
            Game::Quiz         => EngineKind::Quiz,
            Game::PairMatch(_) => EngineKind::PairMatch,
            Game::Whack(_)     => EngineKind::Whack,
            Game::Memory(_)    => EngineKind::Memory,
        }
    }
}

/// A session plus the engine its mode calls for.
///
/// The outcome-producing methods feed every result into the session, so the
/// caller only has to render outcomes and schedule the follow-up actions.
#[derive(Debug, Clone)]
pub struct Drill<T> {
    pub session: Session,
    pub game: Game<T>,
    config: EngineConfig,
    rng: StdRng,
}

fn wrong_engine<T>(expected: EngineKind, game: &Game<T>) -> EngineError {
    EngineError::WrongEngine { expected, actual: game.kind() }
}

/// Build the session and engine for `request` from `items`.
pub fn start_drill<T: Clone + PartialEq>(
    request: DrillRequest,
    items: &[T],
    config: &EngineConfig,
) -> Result<Drill<T>> {
    config.validate()?;
    let mut rng = rng_from_seed(request.rng_seed);

    let (game, total) = match request.mode.engine_kind() {
        EngineKind::Quiz => (Game::Quiz, config.questions_per_session),
        EngineKind::PairMatch => {
            let pairs = config.pair_match.pairs;
            (Game::PairMatch(PairMatch::new(items, pairs, &mut rng)?), pairs as u32)
        }
        EngineKind::Whack => (
            Game::Whack(Whack::with_config(items, &config.whack)),
            config.whack.max_rounds,
        ),
        EngineKind::Memory => {
            let pairs = config.memory.pairs;
            (Game::Memory(MemoryFlip::new(items, pairs, &mut rng)?), pairs as u32)
        }
    };

    debug!("drill started: {} ({:?})", request.mode, game.kind());
    Ok(Drill {
        session: Session::new(request.mode, request.level, total),
        game,
        config: config.clone(),
        rng,
    })
}

impl<T: Clone + PartialEq> Drill<T> {
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Option set for the next question, sized by `option_count`.
    pub fn options_for(&mut self, correct: &T, pool: &[T]) -> Vec<T> {
        generate_options(correct, pool, self.config.option_count, &mut self.rng)
    }

    pub fn answer(&mut self, submitted: &T, expected: &T) -> bool {
        check_answer(&mut self.session, submitted, expected, self.config.points_per_correct)
    }

    pub fn flip_card(&mut self, index: usize) -> Result<PairOutcome> {
        let game = match &mut self.game {
            Game::PairMatch(game) => game,
            other => return Err(wrong_engine(EngineKind::PairMatch, other)),
        };
        let outcome = game.flip_card(index)?;
        apply_pair_outcome(&mut self.session, &outcome, self.config.points_per_correct);
        Ok(outcome)
    }

    pub fn reset_flipped(&mut self) -> Result<Vec<usize>> {
        match &mut self.game {
            Game::PairMatch(game) => Ok(game.reset_flipped()),
            other => Err(wrong_engine(EngineKind::PairMatch, other)),
        }
    }

    /// Start the next whack round with `moles_per_round` moles.
    ///
    /// A round still live at this point is expired first, so it reaches the
    /// session under the timeout policy.
    pub fn spawn_moles(&mut self) -> Result<usize> {
        self.expire_round()?;
        let count = self.config.whack.moles_per_round;
        match &mut self.game {
            Game::Whack(game) => game.spawn_moles(count, &mut self.rng),
            other => Err(wrong_engine(EngineKind::Whack, other)),
        }
    }

    pub fn whack(&mut self, position: usize) -> Result<WhackOutcome> {
        let game = match &mut self.game {
            Game::Whack(game) => game,
            other => return Err(wrong_engine(EngineKind::Whack, other)),
        };
        let outcome = game.whack(position)?;
        let w = &self.config.whack;
        apply_whack_outcome(&mut self.session, &outcome, w.timeout_policy, w.points_per_hit);
        Ok(outcome)
    }

    pub fn expire_round(&mut self) -> Result<Option<WhackOutcome>> {
        let game = match &mut self.game {
            Game::Whack(game) => game,
            other => return Err(wrong_engine(EngineKind::Whack, other)),
        };
        let outcome = game.expire_round();
        if let Some(outcome) = &outcome {
            let w = &self.config.whack;
            apply_whack_outcome(&mut self.session, outcome, w.timeout_policy, w.points_per_hit);
        }
        Ok(outcome)
    }

    pub fn flip(&mut self, index: usize) -> Result<MemoryOutcome<T>> {
        let game = match &mut self.game {
            Game::Memory(game) => game,
            other => return Err(wrong_engine(EngineKind::Memory, other)),
        };
        let outcome = game.flip(index)?;
        apply_memory_outcome(&mut self.session, &outcome, self.config.points_per_correct);
        Ok(outcome)
    }

    pub fn hide_cards(&mut self, indices: &[usize]) -> Result<()> {
        match &mut self.game {
            Game::Memory(game) => game.hide_cards(indices),
            other => Err(wrong_engine(EngineKind::Memory, other)),
        }
    }

    /// Session finished, or the engine has nothing left to play.
    pub fn is_complete(&self) -> bool {
        if self.session.is_complete() {
            return true;
        }
        match &self.game {
            Game::Quiz         => false,
            Game::PairMatch(g) => g.is_complete(),
            Game::Whack(g)     => g.is_over(),
            Game::Memory(g)    => g.is_complete(),
        }
    }

    /// Results for the end screen. Card games are rated on pairs found per
    /// pair of cards turned, so mismatches lower the stars.
    pub fn summary(&self, now: chrono::DateTime<chrono::Utc>) -> RoundSummary {
        match &self.game {
            Game::PairMatch(g) => {
                RoundSummary::for_card_game(&self.session, g.matched_pairs(), g.moves(), now)
            }
            Game::Memory(g) => {
                RoundSummary::for_card_game(&self.session, g.matched_pairs(), g.attempts(), now)
            }
            Game::Quiz | Game::Whack(_) => RoundSummary::from_session(&self.session, now),
        }
    }
}
