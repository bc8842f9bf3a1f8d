//! Round state for a single playthrough
//!
//! Tracks the target word, guesses made so far, wrong-guess count, score,
//! and whether the one-shot hint has been spent. All mutation goes through
//! the guess engine in [`crate::core::guess`] or [`RoundState::take_hint`].

use rand::Rng;
use rand::seq::IndexedRandom;

use super::word::GameWord;

/// Wrong guesses allowed before the round is lost
pub const MAX_WRONG: u8 = 6;

/// Score every round starts from
pub const STARTING_SCORE: i32 = 100;

/// Points for a correct letter, and the penalty for any wrong guess
pub(crate) const GUESS_POINTS: i32 = 10;

/// Points deducted for an accepted hint
pub(crate) const HINT_PENALTY: i32 = 5;

/// Where a round currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    InProgress,
    Won,
    Lost,
}

/// Mutable state of one hangman round
#[derive(Debug, Clone)]
pub struct RoundState {
    target: GameWord,
    guessed_letters: Vec<char>,
    word_attempts: Vec<String>,
    wrong_count: u8,
    score: i32,
    hint_used: bool,
    phase: RoundPhase,
}

impl RoundState {
    /// Start a round with a word picked uniformly from `words`
    ///
    /// Returns `None` if the list is empty.
    pub fn start_round<R: Rng + ?Sized>(words: &[GameWord], rng: &mut R) -> Option<Self> {
        words.choose(rng).cloned().map(Self::with_target)
    }

    /// Start a round against a known target (deterministic entry point)
    #[must_use]
    pub fn with_target(target: GameWord) -> Self {
        Self {
            target,
            guessed_letters: Vec::new(),
            word_attempts: Vec::new(),
            wrong_count: 0,
            score: STARTING_SCORE,
            hint_used: false,
            phase: RoundPhase::InProgress,
        }
    }

    /// The word being guessed
    #[inline]
    #[must_use]
    pub fn target(&self) -> &GameWord {
        &self.target
    }

    /// Letters guessed so far, in the order they were tried
    #[inline]
    #[must_use]
    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed_letters
    }

    /// Whole-word guesses already tried, in order
    #[inline]
    #[must_use]
    pub fn word_attempts(&self) -> &[String] {
        &self.word_attempts
    }

    /// Wrong guesses so far (0..=6)
    #[inline]
    #[must_use]
    pub fn wrong_count(&self) -> u8 {
        self.wrong_count
    }

    /// Current score
    #[inline]
    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Whether the one-time hint was taken
    #[inline]
    #[must_use]
    pub fn hint_used(&self) -> bool {
        self.hint_used
    }

    /// Current phase of the round
    #[inline]
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// True once the round reached Won or Lost
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase != RoundPhase::InProgress
    }

    /// The hint is offered exactly at the three-wrong threshold,
    /// and only while unspent
    #[must_use]
    pub fn hint_available(&self) -> bool {
        self.phase == RoundPhase::InProgress && self.wrong_count == 3 && !self.hint_used
    }

    /// Reveal one random unguessed letter for a 5-point penalty
    ///
    /// Marks the hint spent and re-checks the win condition. Returns `None`
    /// without touching any state when every letter is already guessed or
    /// the round is over.
    pub fn take_hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<char> {
        if self.is_over() {
            return None;
        }

        let candidates = self.target.unguessed_letters(&self.guessed_letters);
        let letter = *candidates.choose(rng)?;

        self.guessed_letters.push(letter);
        self.hint_used = true;
        self.score -= HINT_PENALTY;
        self.check_win();
        Some(letter)
    }

    pub(crate) fn note_letter(&mut self, letter: char) {
        self.guessed_letters.push(letter);
    }

    pub(crate) fn note_word_attempt(&mut self, word: String) {
        self.word_attempts.push(word);
    }

    pub(crate) fn add_score(&mut self, delta: i32) {
        self.score += delta;
    }

    /// Count a wrong guess; at the sixth the score is forced to 0
    /// and the round is lost
    pub(crate) fn record_wrong(&mut self) {
        self.wrong_count += 1;
        self.score -= GUESS_POINTS;
        if self.wrong_count >= MAX_WRONG {
            self.score = 0;
            self.phase = RoundPhase::Lost;
        }
    }

    pub(crate) fn mark_won(&mut self) {
        self.phase = RoundPhase::Won;
    }

    /// Flip to Won once every target letter has been guessed
    pub(crate) fn check_win(&mut self) {
        if self.phase == RoundPhase::InProgress
            && self.target.is_fully_revealed(&self.guessed_letters)
        {
            self.phase = RoundPhase::Won;
        }
    }
}
