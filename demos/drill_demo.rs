//! Walk-through of every engine with a fixed seed.
//!
//! Run with: `RUST_LOG=debug cargo run --example drill_demo`
//!
//! 1. **Quiz**: option sets from a character table, one wrong answer.
//! 2. **Pair match**: every pair found, with one mismatch re-hidden on a timer.
//! 3. **Whack**: ten rounds, odd rounds left to time out.
//! 4. **Memory**: a mismatch hidden after the delay, then the board cleared.
//!
//! Timers are simulated with a `Schedule` the way a screen would drive them
//! from its frame loop.

use chrono::Utc;
use kids_drill_engine::{
    start_drill, Catalogue, Category, ContentItem, DeferredAction, Drill, DrillRequest,
    EngineConfig, Game, GameMode, Schedule, StaticCatalogue,
};

const TABLES: &str = r#"[
    { "category": "characters", "level": 1, "items": [
        { "display": "日", "pronunciation": "rì",   "usage": "日子", "icon": "sun" },
        { "display": "月", "pronunciation": "yuè",  "usage": "月亮", "icon": "moon" },
        { "display": "山", "pronunciation": "shān", "usage": "大山", "icon": "mountain" },
        { "display": "水", "pronunciation": "shuǐ", "usage": "喝水", "icon": "water" },
        { "display": "火", "pronunciation": "huǒ",  "usage": "火车", "icon": "fire" },
        { "display": "木", "pronunciation": "mù",   "usage": "木头", "icon": "tree" }
    ] },
    { "category": "vehicles", "level": 1, "items": [
        { "display": "car",   "pronunciation": "car",   "usage": "a red car",      "icon": "car" },
        { "display": "bus",   "pronunciation": "bus",   "usage": "ride the bus",   "icon": "bus" },
        { "display": "train", "pronunciation": "train", "usage": "a long train",   "icon": "train" },
        { "display": "boat",  "pronunciation": "boat",  "usage": "a sailing boat", "icon": "boat" },
        { "display": "plane", "pronunciation": "plane", "usage": "a fast plane",   "icon": "plane" },
        { "display": "bike",  "pronunciation": "bike",  "usage": "ride a bike",    "icon": "bike" }
    ] }
]"#;

fn print_summary(title: &str, drill: &Drill<String>) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{title}]");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    let summary = drill.summary(Utc::now());
    let stars = "★".repeat(summary.stars as usize);
    println!("  {stars:<3}  {}", summary.praise.message());
    match serde_json::to_string_pretty(&summary.to_json()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("could not render summary: {e}"),
    }
    println!();
}

fn quiz(chars: &[String], config: &EngineConfig) -> kids_drill_engine::drill_engine::Result<()> {
    let request = DrillRequest { mode: GameMode::Quiz, level: 1, rng_seed: Some(1001) };
    let mut drill = start_drill(request, chars, config)?;
    let mut q = 0;
    while !drill.is_complete() {
        let correct = chars[q % chars.len()].clone();
        let options = drill.options_for(&correct, chars);
        // the third question gets answered wrong
        let pick = if q == 2 {
            options.iter().find(|o| **o != correct).cloned().unwrap_or_else(|| correct.clone())
        } else {
            correct.clone()
        };
        let ok = drill.answer(&pick, &correct);
        println!("  Q{}: {:?} picked {pick} -> {}", q + 1, options, if ok { "✓" } else { "✗" });
        q += 1;
    }
    print_summary("Quiz", &drill);
    Ok(())
}

fn pair_match(items: &[String], config: &EngineConfig) -> kids_drill_engine::drill_engine::Result<()> {
    let request = DrillRequest { mode: GameMode::Match, level: 1, rng_seed: Some(2002) };
    let mut drill = start_drill(request, items, config)?;
    let mut schedule = Schedule::new();
    let ids: Vec<usize> = match &drill.game {
        Game::PairMatch(g) => g.cards().iter().map(|c| c.id).collect(),
        _ => Vec::new(),
    };

    // one deliberate miss first
    if let Some(odd) = (1..ids.len()).find(|&i| ids[i] != ids[0]) {
        drill.flip_card(0)?;
        let outcome = drill.flip_card(odd)?;
        println!("  flip 0, flip {odd}: {outcome:?} ({:?})", outcome.cue().as_str());
        schedule.schedule(config.pair_match.hide_delay_ms, DeferredAction::ResetPairFlips);
        for action in schedule.advance(config.pair_match.hide_delay_ms) {
            if action == DeferredAction::ResetPairFlips {
                println!("  re-hid {:?}", drill.reset_flipped()?);
            }
        }
    }

    let mut done = vec![false; ids.len()];
    for i in 0..ids.len() {
        if done[i] {
            continue;
        }
        if let Some(j) = (i + 1..ids.len()).find(|&j| ids[j] == ids[i]) {
            drill.flip_card(i)?;
            let outcome = drill.flip_card(j)?;
            println!("  flip {i}, flip {j}: {outcome:?}");
            done[i] = true;
            done[j] = true;
        }
    }
    print_summary("Pair Match", &drill);
    Ok(())
}

fn whack(config: &EngineConfig) -> kids_drill_engine::drill_engine::Result<()> {
    let numbers: Vec<String> = (1..=10).map(|n| n.to_string()).collect();
    let request = DrillRequest { mode: GameMode::Whack, level: 1, rng_seed: Some(3003) };
    let mut drill = start_drill(request, &numbers, config)?;
    let mut schedule = Schedule::new();
    let budget = config.whack.round_budget_ms;

    let mut round = 0;
    while !drill.is_complete() {
        round += 1;
        let target = drill.spawn_moles()?;
        let expiry = schedule.schedule(budget, DeferredAction::ExpireWhackRound { round });
        if round % 2 == 0 {
            schedule.advance(budget / 3);
            schedule.cancel(expiry);
            println!("  round {round:>2}: {:?}", drill.whack(target)?);
        } else {
            for action in schedule.advance(budget) {
                if let DeferredAction::ExpireWhackRound { .. } = action {
                    println!("  round {round:>2}: {:?}", drill.expire_round()?);
                }
            }
        }
        schedule.advance(config.whack.advance_delay_ms);
    }
    print_summary("Whack-a-Mole", &drill);
    Ok(())
}

fn memory(items: &[String], config: &EngineConfig) -> kids_drill_engine::drill_engine::Result<()> {
    let request = DrillRequest { mode: GameMode::Memory, level: 1, rng_seed: Some(4004) };
    let mut drill = start_drill(request, items, config)?;
    let mut schedule = Schedule::new();
    let cards: Vec<String> = match &drill.game {
        Game::Memory(g) => g.cards().to_vec(),
        _ => Vec::new(),
    };

    for i in 0..cards.len() {
        let matched = matches!(&drill.game, Game::Memory(g) if g.is_matched(i));
        if matched {
            continue;
        }
        // try a wrong card once before finding the twin
        if i == 0 {
            if let Some(odd) = (1..cards.len()).find(|&j| cards[j] != cards[0]) {
                drill.flip(0)?;
                let outcome = drill.flip(odd)?;
                println!("  flip 0, flip {odd}: {outcome:?}");
                schedule.schedule(config.memory.hide_delay_ms, DeferredAction::HideMemoryCards([0, odd]));
                for action in schedule.advance(config.memory.hide_delay_ms) {
                    if let DeferredAction::HideMemoryCards(indices) = action {
                        drill.hide_cards(&indices)?;
                    }
                }
            }
        }
        if let Some(twin) = (0..cards.len()).find(|&j| j != i && cards[j] == cards[i]) {
            drill.flip(i)?;
            println!("  flip {i}, flip {twin}: {:?}", drill.flip(twin)?);
        }
    }
    print_summary("Memory Flip", &drill);
    Ok(())
}

fn main() {
    pretty_env_logger::init();

    let catalogue = match StaticCatalogue::from_json_str(TABLES) {
        Ok(c) => c,
        Err(e) => {
            log::error!("could not load content tables: {e}");
            return;
        }
    };
    let chars = ContentItem::displays(catalogue.items(Category::Characters, 1));
    let vehicles = ContentItem::displays(catalogue.items(Category::Vehicles, 1));
    let config = EngineConfig { questions_per_session: 5, ..EngineConfig::default() };

    let runs = [
        quiz(&chars, &config),
        pair_match(&vehicles, &config),
        whack(&config),
        memory(&vehicles, &config),
    ];
    for result in runs {
        if let Err(e) = result {
            log::error!("drill failed: {e}");
        }
    }
}
