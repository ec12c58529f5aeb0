//! Countdown state machine for timed rounds.
//!
//! The timer never reads the wall clock. The runtime funnel delivers one
//! tick per second, and every tick carries the [`TimerToken`] that was
//! current when the caller went to sleep. Starting, stopping, and expiring
//! all bump the generation, so a tick raced against any of those arrives
//! with a dead token and is dropped here instead of mutating a fresh round.

/// Opaque generation stamp handed out by [`RoundTimer::token`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerToken(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running { elapsed: u32 },
    Expired,
}

/// What a delivered tick amounted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Token from a dead generation; nothing happened.
    Stale,
    /// Live token but no countdown to advance.
    Idle,
    /// The countdown moved forward to this many elapsed seconds.
    Advanced(u32),
    /// The limit was reached on this tick. Fires exactly once per round;
    /// the generation is bumped so no later tick can observe `Running`.
    Expired,
}

#[derive(Debug)]
pub struct RoundTimer {
    state: TimerState,
    generation: u64,
    time_limit: u32,
}

impl RoundTimer {
    pub fn new(time_limit: u32) -> Self {
        Self {
            state: TimerState::Idle,
            generation: 0,
            time_limit,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn token(&self) -> TimerToken {
        TimerToken(self.generation)
    }

    /// Seconds counted so far; pinned to the limit once expired.
    pub fn elapsed(&self) -> u32 {
        match self.state {
            TimerState::Idle => 0,
            TimerState::Running { elapsed } => elapsed,
            TimerState::Expired => self.time_limit,
        }
    }

    /// Begin counting from zero. No-op while already running.
    pub fn start(&mut self) {
        if let TimerState::Running { .. } = self.state {
            return;
        }
        self.generation += 1;
        self.state = TimerState::Running { elapsed: 0 };
    }

    /// Cancel the countdown. Idempotent; outstanding tokens die with it.
    pub fn stop(&mut self) {
        if self.state == TimerState::Idle {
            return;
        }
        self.generation += 1;
        self.state = TimerState::Idle;
    }

    pub fn tick(&mut self, token: TimerToken) -> TickOutcome {
        if token.0 != self.generation {
            return TickOutcome::Stale;
        }
        match self.state {
            TimerState::Running { elapsed } => {
                let elapsed = elapsed + 1;
                if elapsed >= self.time_limit {
                    self.generation += 1;
                    self.state = TimerState::Expired;
                    TickOutcome::Expired
                } else {
                    self.state = TimerState::Running { elapsed };
                    TickOutcome::Advanced(elapsed)
                }
            }
            TimerState::Idle | TimerState::Expired => TickOutcome::Idle,
        }
    }
}
