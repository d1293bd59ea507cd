//! Driving loop tests: thinking delay, cancellation, full matches.

use highcard::ai::{MatchDriver, RegularFirstPolicy};
use highcard::{GameMode, GameRng, MatchConfig, MatchEngine, PlayerId};

const DELAY: u64 = 1500;

fn engine(mode: GameMode, seed: u64) -> MatchEngine {
    MatchEngine::create(mode, true, "Ada", &mut GameRng::new(seed)).unwrap()
}

fn human_card(driver: &MatchDriver<impl highcard::OpponentPolicy>) -> highcard::CardId {
    driver
        .engine()
        .state()
        .player(&PlayerId::human())
        .unwrap()
        .hand
        .cards()[0]
        .id
}

/// AI seats play after the delay, independently of the human.
#[test]
fn test_ai_plays_after_delay() {
    let mut driver = MatchDriver::new(engine(GameMode::TwoVsTwo, 1), GameRng::new(2), 0);

    assert!(driver.tick(DELAY - 1).unwrap().is_idle());
    let outcome = driver.tick(DELAY).unwrap();
    assert_eq!(outcome.played.len(), 3);
    assert!(outcome.played.iter().all(|(_, card)| card.is_regular()));
    assert!(!driver.engine().is_round_complete());

    driver.submit_human(human_card(&driver)).unwrap();
    assert!(driver.engine().is_round_complete());
}

/// The human may play first; the AI turn still fires once.
#[test]
fn test_human_first() {
    let mut driver = MatchDriver::new(engine(GameMode::OneVsOne, 3), GameRng::new(4), 100);
    driver.submit_human(human_card(&driver)).unwrap();

    let outcome = driver.tick(100 + DELAY).unwrap();
    assert_eq!(outcome.played.len(), 1);
    assert!(driver.engine().is_round_complete());
}

/// A canceled turn never plays.
#[test]
fn test_cancel_before_due() {
    let mut driver = MatchDriver::new(engine(GameMode::OneVsOne, 5), GameRng::new(6), 0);
    assert!(driver.cancel_pending());
    assert!(driver.tick(10 * DELAY).unwrap().is_idle());
    assert!(driver.engine().state().played.is_empty());
}

/// Teardown hands back the match with nothing pending.
#[test]
fn test_teardown() {
    let mut driver = MatchDriver::new(engine(GameMode::OneVsOne, 7), GameRng::new(8), 0);
    driver.submit_human(human_card(&driver)).unwrap();
    let engine = driver.teardown();
    assert_eq!(engine.state().played.len(), 1);
}

/// Finishing a round schedules the next turn from the given time.
#[test]
fn test_finish_round_reschedules() {
    let mut driver = MatchDriver::new(engine(GameMode::OneVsOne, 9), GameRng::new(10), 0);
    driver.tick(DELAY).unwrap();
    driver.submit_human(human_card(&driver)).unwrap();

    let result = driver.finish_round(2_000).unwrap();
    assert_eq!(result.round, 1);
    let pending = driver.pending().unwrap();
    assert_eq!(pending.round, 2);
    assert_eq!(pending.due_at_ms, 2_000 + DELAY);
}

/// AI seats run out of regular cards in round 9 and report it.
#[test]
fn test_regular_only_policy_stalls() {
    let mut driver = MatchDriver::new(engine(GameMode::OneVsOne, 11), GameRng::new(12), 0);
    let mut now = 0;
    for _ in 0..8 {
        now += DELAY;
        driver.tick(now).unwrap();
        driver.submit_human(human_card(&driver)).unwrap();
        driver.finish_round(now).unwrap();
    }

    now += DELAY;
    let outcome = driver.tick(now).unwrap();
    assert!(outcome.played.is_empty());
    assert_eq!(outcome.stalled, vec![PlayerId::ai_opponent()]);
    assert_eq!(driver.stats().stalled_seats, 1);
    assert!(!driver.engine().is_complete());
}

/// With the fallback policy a full 2v2 match runs to completion and no
/// turn is scheduled afterwards.
#[test]
fn test_full_match_with_fallback_policy() {
    let mut driver =
        MatchDriver::with_policy(engine(GameMode::TwoVsTwo, 13), RegularFirstPolicy, GameRng::new(14), 0);
    let mut now = 0;

    while !driver.engine().is_complete() {
        now += DELAY;
        let outcome = driver.tick(now).unwrap();
        assert!(outcome.stalled.is_empty());
        driver.submit_human(human_card(&driver)).unwrap();
        driver.finish_round(now).unwrap();
    }

    assert_eq!(driver.engine().current_round(), 11);
    assert!(driver.pending().is_none());
    assert!(driver.tick(now + 10 * DELAY).unwrap().is_idle());

    let stats = driver.stats();
    assert_eq!(stats.turns_scheduled, 10);
    assert_eq!(stats.turns_fired, 10);
    assert_eq!(stats.ai_cards_played, 30);
}

/// The delay comes from the match configuration.
#[test]
fn test_configured_delay() {
    let config = MatchConfig::new().with_ai_think_delay_ms(0);
    let engine = MatchEngine::create_with_config(
        config,
        GameMode::OneVsOne,
        false,
        "Ada",
        &mut GameRng::new(15),
    )
    .unwrap();
    let mut driver = MatchDriver::new(engine, GameRng::new(16), 50);
    assert_eq!(driver.pending().unwrap().due_at_ms, 50);
    assert_eq!(driver.tick(50).unwrap().played.len(), 1);
}
