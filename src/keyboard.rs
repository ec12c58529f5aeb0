use std::collections::HashMap;

use crate::evaluate::LetterEvaluation;

/// Best-known evaluation per letter, as shown on the on-screen keyboard.
///
/// Entries only ever improve within a round (NoMatch < Misplaced <
/// Correct); an absent entry is weaker than anything recorded.
#[derive(Debug, Default)]
pub struct KeyboardFeedback {
    statuses: HashMap<char, LetterEvaluation>,
}

impl KeyboardFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, letter: char, evaluation: LetterEvaluation) {
        self.statuses
            .entry(letter)
            .and_modify(|current| *current = (*current).max(evaluation))
            .or_insert(evaluation);
    }

    pub fn status(&self, letter: char) -> Option<LetterEvaluation> {
        self.statuses.get(&letter).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    pub fn reset(&mut self) {
        self.statuses.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterEvaluation::{Correct, Misplaced, NoMatch};

    #[test]
    fn first_recording_always_sets_the_entry() {
        let mut keys = KeyboardFeedback::new();
        assert_eq!(keys.status('a'), None);

        keys.record('a', NoMatch);
        assert_eq!(keys.status('a'), Some(NoMatch));
    }

    #[test]
    fn stronger_evaluations_upgrade() {
        let mut keys = KeyboardFeedback::new();
        keys.record('e', NoMatch);
        keys.record('e', Misplaced);
        assert_eq!(keys.status('e'), Some(Misplaced));

        keys.record('e', Correct);
        assert_eq!(keys.status('e'), Some(Correct));
    }

    #[test]
    fn weaker_evaluations_never_downgrade() {
        let mut keys = KeyboardFeedback::new();
        keys.record('s', Correct);

        keys.record('s', Misplaced);
        keys.record('s', NoMatch);
        assert_eq!(keys.status('s'), Some(Correct));
    }

    #[test]
    fn reset_forgets_the_round() {
        let mut keys = KeyboardFeedback::new();
        keys.record('q', Misplaced);
        assert!(!keys.is_empty());

        keys.reset();
        assert!(keys.is_empty());
        assert_eq!(keys.status('q'), None);
    }
}
