use crate::WORD_LENGTH;

/// Per-position feedback for a submitted guess. Variant order doubles as
/// the strength order used by the keyboard map: NoMatch < Misplaced <
/// Correct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterEvaluation {
    NoMatch,
    Misplaced,
    Correct,
}

/// Score a guess against the target, position by position.
///
/// Two passes. The first marks exact matches and consumes their target
/// letters. The second walks the remaining guess positions left to right,
/// consuming one unclaimed target occurrence per `Misplaced` mark, so a
/// letter repeated more often in the guess than in the target gets
/// `NoMatch` for the surplus occurrences.
///
/// Both words must be `WORD_LENGTH` lowercase ASCII letters; the word store
/// and board normalize input before it reaches here.
pub fn evaluate(guess: &str, target: &str) -> [LetterEvaluation; WORD_LENGTH] {
    let guess = guess.as_bytes();
    let target = target.as_bytes();
    debug_assert_eq!(guess.len(), WORD_LENGTH);
    debug_assert_eq!(target.len(), WORD_LENGTH);

    let mut evaluations = [LetterEvaluation::NoMatch; WORD_LENGTH];
    let mut remaining = [0u8; 26];

    for i in 0..WORD_LENGTH {
        if guess[i] == target[i] {
            evaluations[i] = LetterEvaluation::Correct;
        } else {
            remaining[(target[i] - b'a') as usize] += 1;
        }
    }

    for i in 0..WORD_LENGTH {
        if evaluations[i] == LetterEvaluation::Correct {
            continue;
        }
        let slot = (guess[i] - b'a') as usize;
        if remaining[slot] > 0 {
            remaining[slot] -= 1;
            evaluations[i] = LetterEvaluation::Misplaced;
        }
    }

    evaluations
}
