// Library surface for headless/integration tests and the gridle binary.
// The presentation layer (ui.rs) lives bin-side and only reads from here.
pub mod board;
pub mod config;
pub mod engine;
pub mod evaluate;
pub mod keyboard;
pub mod runtime;
pub mod timer;
pub mod util;
pub mod words;

/// Letters per word. The board, the evaluator, and the word lists all agree
/// on this; it is not runtime-configurable.
pub const WORD_LENGTH: usize = 5;

/// Rows on the board, one per submitted guess.
pub const MAX_ATTEMPTS: usize = 6;

/// Seconds granted per round in timed mode.
pub const TIME_LIMIT_SECS: u32 = 60;

/// Interval between clock ticks delivered by the runtime funnel. One tick
/// advances the round timer by one second.
pub const TICK_RATE_MS: u64 = 1000;
