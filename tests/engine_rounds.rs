use assert_matches::assert_matches;

use gridle::engine::{GameEngine, GameMode, RoundOutcome, RoundPhase};
use gridle::evaluate::LetterEvaluation;
use gridle::timer::TimerState;
use gridle::words::WordStore;
use gridle::MAX_ATTEMPTS;

// Multi-round scenarios against a single-solution store, so every round's
// target is known to be "apple".

fn known_game(mode: GameMode) -> GameEngine {
    let words = WordStore::from_lists(
        vec!["apple".to_string()],
        vec![
            "crane".to_string(),
            "slate".to_string(),
            "poppy".to_string(),
            "paper".to_string(),
        ],
    );
    GameEngine::new(words, mode).unwrap()
}

fn submit(engine: &mut GameEngine, word: &str) {
    for c in word.chars() {
        engine.add_letter(c);
    }
    engine.submit_guess();
}

#[test]
fn streaks_build_across_rounds_and_fall_on_a_loss() {
    let mut game = known_game(GameMode::Untimed);

    // three straight wins
    for expected in 1..=3u32 {
        submit(&mut game, "apple");
        assert_eq!(game.streak(GameMode::Untimed), expected);
        game.reset_game().unwrap();
    }

    // burn all six attempts
    for _ in 0..MAX_ATTEMPTS {
        submit(&mut game, "crane");
    }
    assert_matches!(
        game.phase(),
        RoundPhase::Over(r) if r.outcome == RoundOutcome::LostAttempts
    );
    assert_eq!(game.streak(GameMode::Untimed), 0);

    // and the loss does not poison the next round
    game.reset_game().unwrap();
    submit(&mut game, "apple");
    assert_eq!(game.streak(GameMode::Untimed), 1);
}

#[test]
fn each_mode_keeps_its_own_streak_across_switches() {
    let mut game = known_game(GameMode::Untimed);

    submit(&mut game, "apple");
    assert_eq!(game.streak(GameMode::Untimed), 1);

    game.set_mode(GameMode::Timed).unwrap();
    submit(&mut game, "apple");
    assert_eq!(game.streak(GameMode::Timed), 1);
    assert_eq!(game.streak(GameMode::Untimed), 1);

    // timed loss leaves the untimed streak alone
    game.reset_game().unwrap();
    for _ in 0..MAX_ATTEMPTS {
        submit(&mut game, "crane");
    }
    assert_eq!(game.streak(GameMode::Timed), 0);
    assert_eq!(game.streak(GameMode::Untimed), 1);

    game.set_mode(GameMode::Untimed).unwrap();
    assert_eq!(game.streak(GameMode::Untimed), 1);
}

#[test]
fn switching_modes_discards_the_round_in_progress() {
    let mut game = known_game(GameMode::Untimed);
    submit(&mut game, "crane");
    for c in "sl".chars() {
        game.add_letter(c);
    }

    game.set_mode(GameMode::Timed).unwrap();

    assert_eq!(game.attempts_used(), 0);
    assert_eq!(game.current_guess(), "");
    assert!(game.keyboard().is_empty());
    assert_matches!(game.timer_state(), TimerState::Running { elapsed: 0 });

    game.set_mode(GameMode::Untimed).unwrap();
    assert_matches!(game.timer_state(), TimerState::Idle);
}

#[test]
fn stale_tick_from_the_previous_round_cannot_touch_a_fresh_one() {
    let mut game = known_game(GameMode::Timed);
    let old = game.timer_token();
    for _ in 0..10 {
        game.on_timer_tick(old);
    }
    assert_eq!(game.clock(), "00:10");

    game.reset_game().unwrap();

    // the pre-reset token is dead, a fresh one counts
    game.on_timer_tick(old);
    assert_eq!(game.clock(), "00:00");
    let live = game.timer_token();
    game.on_timer_tick(live);
    assert_eq!(game.clock(), "00:01");

    // and the dead token stays dead
    game.on_timer_tick(old);
    assert_eq!(game.clock(), "00:01");
}

#[test]
fn keyboard_knowledge_accumulates_within_a_round_and_resets_between() {
    let mut game = known_game(GameMode::Untimed);

    submit(&mut game, "poppy");
    assert_eq!(game.keyboard().status('p'), Some(LetterEvaluation::Correct));
    assert_eq!(game.keyboard().status('y'), Some(LetterEvaluation::NoMatch));

    // weaker later evidence does not downgrade 'p'
    submit(&mut game, "paper");
    assert_eq!(game.keyboard().status('p'), Some(LetterEvaluation::Correct));

    game.reset_game().unwrap();
    assert_eq!(game.keyboard().status('p'), None);
}

#[test]
fn guard_conditions_are_silent_no_ops() {
    let mut game = known_game(GameMode::Untimed);

    // overtyping a full guess
    for c in "cranee".chars() {
        game.add_letter(c);
    }
    assert_eq!(game.current_guess(), "crane");

    // submitting a short guess
    game.remove_letter();
    game.submit_guess();
    assert_eq!(game.attempts_used(), 0);
    assert_eq!(game.current_guess(), "cran");

    // backspacing an empty guess
    for _ in 0..6 {
        game.remove_letter();
    }
    assert_eq!(game.current_guess(), "");

    // everything after game over
    submit(&mut game, "apple");
    game.add_letter('q');
    game.submit_guess();
    assert_eq!(game.current_guess(), "");
    assert_matches!(game.phase(), RoundPhase::Over(r) if r.outcome == RoundOutcome::Won);
}

#[test]
fn round_result_messages_reveal_the_target() {
    let mut game = known_game(GameMode::Untimed);
    submit(&mut game, "apple");

    match game.phase() {
        RoundPhase::Over(result) => {
            assert!(result.message().contains("APPLE"));
        }
        RoundPhase::InProgress => panic!("round should be over"),
    }
}
