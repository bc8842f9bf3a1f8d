//! Hangman word representation
//!
//! A `GameWord` stores a lowercase alphabetic word along with its set of
//! distinct letters for fast membership checks.

use rustc_hash::FxHashSet;
use std::fmt;

/// A validated hangman word
///
/// Always lowercase and ASCII-alphabetic. Keeps a letter set so reveal
/// checks don't rescan the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameWord {
    text: String,
    letters: FxHashSet<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NotAlphabetic(String),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NotAlphabetic(word) => {
                write!(f, "Word '{word}' must contain only letters")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl GameWord {
    /// Create a new `GameWord` from a string
    ///
    /// Input is trimmed and lowercase-normalized.
    ///
    /// # Errors
    /// Returns `WordError` if the trimmed input is empty or contains
    /// anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::GameWord;
    ///
    /// let word = GameWord::new("Bicycle").unwrap();
    /// assert_eq!(word.text(), "bicycle");
    ///
    /// assert!(GameWord::new("").is_err());
    /// assert!(GameWord::new("b1cycle").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::NotAlphabetic(text));
        }

        let letters = text.chars().collect();

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True only for the degenerate case; constructed words are never empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Iterate the word's letters in spelling order
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars()
    }

    /// Count letter occurrences not yet present in `guessed`
    ///
    /// Duplicate letters count once per occurrence; this drives the
    /// whole-word bonus.
    #[must_use]
    pub fn hidden_letter_count(&self, guessed: &[char]) -> usize {
        self.text.chars().filter(|c| !guessed.contains(c)).count()
    }

    /// Distinct letters of the word not yet present in `guessed`,
    /// in first-occurrence order
    #[must_use]
    pub fn unguessed_letters(&self, guessed: &[char]) -> Vec<char> {
        let mut seen = FxHashSet::default();
        self.text
            .chars()
            .filter(|c| !guessed.contains(c) && seen.insert(*c))
            .collect()
    }

    /// True once every letter of the word appears in `guessed`
    #[must_use]
    pub fn is_fully_revealed(&self, guessed: &[char]) -> bool {
        self.letters.iter().all(|c| guessed.contains(c))
    }
}

impl fmt::Display for GameWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
