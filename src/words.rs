use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use include_dir::{include_dir, Dir};
use itertools::Itertools;
use rand::seq::SliceRandom;

use crate::WORD_LENGTH;

static WORDLIST_DIR: Dir = include_dir!("src/wordlists");

const SOLUTIONS_FILE: &str = "valid_solutions.txt";
const GUESSES_FILE: &str = "valid_guesses.txt";

/// The solution list is empty or could not be loaded. A round cannot start
/// without a drawable target; there is deliberately no fallback word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordStoreError {
    Empty,
}

impl fmt::Display for WordStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordStoreError::Empty => write!(f, "no solution words are available"),
        }
    }
}

impl std::error::Error for WordStoreError {}

/// Immutable solution and allowed-guess sets, plus the memory of the last
/// target issued so back-to-back rounds never repeat a word. The last-word
/// memory is instance state: independent stores draw independently.
#[derive(Debug)]
pub struct WordStore {
    solutions: Vec<String>,
    solution_set: HashSet<String>,
    allowed: HashSet<String>,
    last_word: Option<String>,
}

impl WordStore {
    /// Build from the word lists compiled into the binary. A missing or
    /// unreadable resource parses to an empty list, which `next_target`
    /// reports as [`WordStoreError::Empty`].
    pub fn embedded() -> Self {
        Self::from_lists(
            parse_word_list(embedded_contents(SOLUTIONS_FILE)),
            parse_word_list(embedded_contents(GUESSES_FILE)),
        )
    }

    /// Build from newline-delimited files on disk.
    pub fn from_files<P: AsRef<Path>>(solutions: P, guesses: P) -> io::Result<Self> {
        Ok(Self::from_lists(
            parse_word_list(&fs::read_to_string(solutions)?),
            parse_word_list(&fs::read_to_string(guesses)?),
        ))
    }

    pub fn from_lists(solutions: Vec<String>, allowed: Vec<String>) -> Self {
        let solution_set = solutions.iter().cloned().collect();
        Self {
            solutions,
            solution_set,
            allowed: allowed.into_iter().collect(),
            last_word: None,
        }
    }

    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }

    /// Draw a uniformly random target, never the same word twice in a row.
    /// A single-word list has no alternative and returns that word.
    pub fn next_target(&mut self) -> Result<String, WordStoreError> {
        let mut rng = rand::thread_rng();
        let word = loop {
            match self.solutions.choose(&mut rng) {
                None => return Err(WordStoreError::Empty),
                Some(w)
                    if self.solutions.len() > 1
                        && Some(w.as_str()) == self.last_word.as_deref() =>
                {
                    continue;
                }
                Some(w) => break w.clone(),
            }
        };
        self.last_word = Some(word.clone());
        Ok(word)
    }

    /// Solutions are always valid guesses, even when the allowed list does
    /// not repeat them.
    pub fn is_accepted_guess(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.allowed.contains(&word) || self.solution_set.contains(&word)
    }
}

fn embedded_contents(name: &str) -> &'static str {
    WORDLIST_DIR
        .get_file(name)
        .and_then(|f| f.contents_utf8())
        .unwrap_or("")
}

/// Normalize a newline-delimited list: trim, lowercase, drop anything that
/// is not exactly `WORD_LENGTH` ASCII letters, and dedupe while keeping
/// first-seen order.
pub fn parse_word_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|w| w.len() == WORD_LENGTH && w.bytes().all(|b| b.is_ascii_lowercase()))
        .unique()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(solutions: &[&str], allowed: &[&str]) -> WordStore {
        WordStore::from_lists(
            solutions.iter().map(|s| s.to_string()).collect(),
            allowed.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn parse_keeps_only_clean_five_letter_words() {
        let parsed = parse_word_list("crane\n SLATE \nhi\ntoolong\nap1le\ncrane\n\n");
        assert_eq!(parsed, vec!["crane".to_string(), "slate".to_string()]);
    }

    #[test]
    fn empty_store_refuses_to_draw() {
        let mut empty = store(&[], &["crane"]);
        assert_eq!(empty.next_target(), Err(WordStoreError::Empty));
    }

    #[test]
    fn single_word_list_falls_back_to_that_word() {
        let mut single = store(&["apple"], &[]);
        assert_eq!(single.next_target().unwrap(), "apple");
        // and again, despite the no-repeat rule
        assert_eq!(single.next_target().unwrap(), "apple");
    }

    #[test]
    fn consecutive_draws_never_repeat() {
        let mut words = store(&["apple", "crane"], &[]);
        let mut previous = words.next_target().unwrap();
        for _ in 0..20 {
            let next = words.next_target().unwrap();
            assert_ne!(next, previous);
            previous = next;
        }
    }

    #[test]
    fn solutions_are_always_accepted_guesses() {
        let words = store(&["apple"], &["crane"]);
        assert!(words.is_accepted_guess("apple"));
        assert!(words.is_accepted_guess("APPLE"));
        assert!(words.is_accepted_guess("crane"));
        assert!(!words.is_accepted_guess("zzzzz"));
    }

    #[test]
    fn embedded_lists_are_present_and_clean() {
        let words = WordStore::embedded();
        assert!(words.solution_count() > 0);
        assert!(words.is_accepted_guess("apple"));
        assert!(words.is_accepted_guess("crane"));
    }

    #[test]
    fn embedded_store_draws_targets() {
        let mut words = WordStore::embedded();
        let target = words.next_target().unwrap();
        assert_eq!(target.len(), WORD_LENGTH);
        assert!(target.bytes().all(|b| b.is_ascii_lowercase()));
    }
}
