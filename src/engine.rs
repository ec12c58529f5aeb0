use std::collections::VecDeque;

use clap::ValueEnum;

use crate::board::{BoardState, Cell};
use crate::evaluate::evaluate;
use crate::keyboard::KeyboardFeedback;
use crate::timer::{RoundTimer, TickOutcome, TimerState, TimerToken};
use crate::util::{format_clock, normalize_letter};
use crate::words::{WordStore, WordStoreError};
use crate::{MAX_ATTEMPTS, TIME_LIMIT_SECS};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, strum_macros::Display)]
pub enum GameMode {
    Untimed,
    Timed,
}

impl GameMode {
    pub fn toggled(self) -> GameMode {
        match self {
            GameMode::Untimed => GameMode::Timed,
            GameMode::Timed => GameMode::Untimed,
        }
    }
}

/// Consecutive-win counters, independent per mode. A loss only zeroes the
/// mode it happened in; the counters survive resets and mode switches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreakTable {
    untimed: u32,
    timed: u32,
}

impl StreakTable {
    pub fn get(&self, mode: GameMode) -> u32 {
        match mode {
            GameMode::Untimed => self.untimed,
            GameMode::Timed => self.timed,
        }
    }

    fn record_win(&mut self, mode: GameMode) {
        match mode {
            GameMode::Untimed => self.untimed += 1,
            GameMode::Timed => self.timed += 1,
        }
    }

    fn record_loss(&mut self, mode: GameMode) {
        match mode {
            GameMode::Untimed => self.untimed = 0,
            GameMode::Timed => self.timed = 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    Won,
    LostAttempts,
    LostTimeout,
}

/// Terminal outcome of a round, carrying the revealed target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundResult {
    pub outcome: RoundOutcome,
    pub target: String,
}

impl RoundResult {
    pub fn message(&self) -> String {
        let target = self.target.to_uppercase();
        match self.outcome {
            RoundOutcome::Won => format!("🎉 You guessed it! The word was '{target}'"),
            RoundOutcome::LostAttempts => {
                format!("❌ Out of attempts! The word was '{target}'")
            }
            RoundOutcome::LostTimeout => format!("⌛ Time's up! The word was '{target}'"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    InProgress,
    Over(RoundResult),
}

/// Notifications pushed after each state transition and drained by the
/// presentation layer alongside the snapshot accessors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineEvent {
    RoundStarted,
    GuessRejected(String),
    GuessScored { row: usize },
    Clock { elapsed: u32 },
    ModeChanged(GameMode),
    RoundOver(RoundResult),
}

/// Owns the whole game state and serializes every mutation behind small
/// guarded intent methods. Illegal intents (letters after game over, short
/// submits, stale ticks) are silent no-ops; the only fallible operations
/// are the ones that must draw a fresh target.
#[derive(Debug)]
pub struct GameEngine {
    words: WordStore,
    board: BoardState,
    keyboard: KeyboardFeedback,
    timer: RoundTimer,
    streaks: StreakTable,
    mode: GameMode,
    phase: RoundPhase,
    target: String,
    error_message: Option<String>,
    events: VecDeque<EngineEvent>,
}

impl GameEngine {
    /// Starts the first round. An empty word store is refused here with
    /// [`WordStoreError::Empty`] rather than papered over with a default
    /// word.
    pub fn new(mut words: WordStore, mode: GameMode) -> Result<Self, WordStoreError> {
        let target = words.next_target()?;
        let mut engine = Self {
            words,
            board: BoardState::new(),
            keyboard: KeyboardFeedback::new(),
            timer: RoundTimer::new(TIME_LIMIT_SECS),
            streaks: StreakTable::default(),
            mode,
            phase: RoundPhase::InProgress,
            target,
            error_message: None,
            events: VecDeque::new(),
        };
        if engine.mode == GameMode::Timed {
            engine.timer.start();
        }
        engine.push(EngineEvent::RoundStarted);
        Ok(engine)
    }

    // --- intents --------------------------------------------------------

    /// Append a letter to the in-progress guess. Non-letters, full guesses,
    /// and finished rounds are ignored.
    pub fn add_letter(&mut self, letter: char) {
        if !matches!(self.phase, RoundPhase::InProgress) {
            return;
        }
        let Some(letter) = normalize_letter(letter) else {
            return;
        };
        if self.board.add_letter(letter) {
            self.error_message = None;
        }
    }

    /// Drop the last letter of the in-progress guess.
    pub fn remove_letter(&mut self) {
        if !matches!(self.phase, RoundPhase::InProgress) {
            return;
        }
        if self.board.remove_letter() {
            self.error_message = None;
        }
    }

    /// Score the in-progress guess. Short guesses are ignored; words the
    /// dictionary rejects set a transient message and do not consume the
    /// attempt; accepted guesses are committed and may end the round.
    pub fn submit_guess(&mut self) {
        if !matches!(self.phase, RoundPhase::InProgress) || !self.board.is_full_guess() {
            return;
        }
        let guess = self.board.current_guess().to_string();
        if !self.words.is_accepted_guess(&guess) {
            let message = String::from("Not a valid word!");
            self.error_message = Some(message.clone());
            self.push(EngineEvent::GuessRejected(message));
            return;
        }
        self.error_message = None;

        let evaluations = evaluate(&guess, &self.target);
        for (letter, evaluation) in guess.chars().zip(evaluations.iter()) {
            self.keyboard.record(letter, *evaluation);
        }
        self.board.commit_row(&evaluations);
        self.push(EngineEvent::GuessScored {
            row: self.board.current_row() - 1,
        });

        if guess == self.target {
            self.finish(RoundOutcome::Won);
        } else if self.board.current_row() >= MAX_ATTEMPTS {
            self.finish(RoundOutcome::LostAttempts);
        }
    }

    /// Funnel entry for clock ticks. Only a live token in an in-progress
    /// timed round advances the countdown; expiry terminates the round in
    /// the same call.
    pub fn on_timer_tick(&mut self, token: TimerToken) {
        if !matches!(self.phase, RoundPhase::InProgress) {
            return;
        }
        match self.timer.tick(token) {
            TickOutcome::Advanced(elapsed) => self.push(EngineEvent::Clock { elapsed }),
            TickOutcome::Expired => self.finish(RoundOutcome::LostTimeout),
            TickOutcome::Stale | TickOutcome::Idle => {}
        }
    }

    /// Start a fresh round: new target, cleared board/keyboard/error, timer
    /// restarted iff the mode is timed. Streaks are untouched.
    pub fn reset_game(&mut self) -> Result<(), WordStoreError> {
        self.timer.stop();
        self.target = self.words.next_target()?;
        self.board.reset();
        self.keyboard.reset();
        self.error_message = None;
        self.phase = RoundPhase::InProgress;
        if self.mode == GameMode::Timed {
            self.timer.start();
        }
        self.push(EngineEvent::RoundStarted);
        Ok(())
    }

    /// Switch modes and reset the round so a stale board/timer combination
    /// can never survive the switch. Streaks persist; they are keyed per
    /// mode.
    pub fn set_mode(&mut self, mode: GameMode) -> Result<(), WordStoreError> {
        if self.mode != mode {
            self.mode = mode;
            self.push(EngineEvent::ModeChanged(mode));
        }
        self.reset_game()
    }

    pub fn toggle_mode(&mut self) -> Result<(), WordStoreError> {
        self.set_mode(self.mode.toggled())
    }

    // --- snapshots ------------------------------------------------------

    pub fn rows(&self) -> &[Vec<Cell>] {
        self.board.rows()
    }

    pub fn current_guess(&self) -> &str {
        self.board.current_guess()
    }

    pub fn attempts_used(&self) -> usize {
        self.board.current_row()
    }

    pub fn keyboard(&self) -> &KeyboardFeedback {
        &self.keyboard
    }

    pub fn phase(&self) -> &RoundPhase {
        &self.phase
    }

    pub fn is_round_over(&self) -> bool {
        matches!(self.phase, RoundPhase::Over(_))
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn streak(&self, mode: GameMode) -> u32 {
        self.streaks.get(mode)
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Elapsed round time as MM:SS.
    pub fn clock(&self) -> String {
        format_clock(self.timer.elapsed())
    }

    pub fn timer_state(&self) -> TimerState {
        self.timer.state()
    }

    pub fn timer_token(&self) -> TimerToken {
        self.timer.token()
    }

    /// Drain the notifications accumulated since the last call.
    pub fn take_events(&mut self) -> Vec<EngineEvent> {
        self.events.drain(..).collect()
    }

    // --- internals ------------------------------------------------------

    fn finish(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::Won => self.streaks.record_win(self.mode),
            RoundOutcome::LostAttempts | RoundOutcome::LostTimeout => {
                self.streaks.record_loss(self.mode)
            }
        }
        // a timeout already expired (and self-cancelled) the timer; leave
        // it in Expired so the clock keeps showing the full limit
        if outcome != RoundOutcome::LostTimeout {
            self.timer.stop();
        }
        let result = RoundResult {
            outcome,
            target: self.target.clone(),
        };
        self.phase = RoundPhase::Over(result.clone());
        self.push(EngineEvent::RoundOver(result));
    }

    fn push(&mut self, event: EngineEvent) {
        self.events.push_back(event);
    }
}
