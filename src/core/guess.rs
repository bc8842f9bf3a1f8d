//! Guess classification and state transitions
//!
//! Pure logic: given a round and one raw input token, decide what kind of
//! guess it is, apply the scoring rules, and report the outcome for display.

use super::round::{GUESS_POINTS, RoundState};

/// What a single guess turned out to be
///
/// Produced and consumed within one turn; carries everything the
/// presentation layer needs to describe the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Empty input or a non-alphabetic single character
    InvalidInput,
    /// Letter already guessed this round
    DuplicateLetter(char),
    /// Whole word already attempted this round
    DuplicateWord(String),
    /// Letter occurs in the target; flat +10 regardless of occurrences
    CorrectLetter(char),
    /// Letter absent from the target; -10 and one step toward the gallows
    WrongLetter(char),
    /// Exact word match; bonus is 10 per still-hidden letter occurrence
    CorrectWord { bonus: i32 },
    /// Whole-word miss; same penalty as a wrong letter
    WrongWord(String),
}

impl GuessOutcome {
    /// True for the rejected inputs that leave the round untouched
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput | Self::DuplicateLetter(_) | Self::DuplicateWord(_)
        )
    }
}

/// Classify one raw guess and apply it to the round
///
/// Input is trimmed and lowercased first. Rejected inputs (empty,
/// non-alphabetic single characters, duplicates) mutate nothing and carry
/// no penalty. Multi-character input is a whole-word attempt; a single
/// character is a letter guess. Wrong letters and wrong words share the
/// same -10 penalty and both count toward the six-guess limit.
///
/// After any novel letter is recorded the win condition is re-checked, so
/// a correct letter that completes the word ends the round immediately.
pub fn apply_guess(state: &mut RoundState, raw: &str) -> GuessOutcome {
    if state.is_over() {
        return GuessOutcome::InvalidInput;
    }

    let guess = raw.trim().to_lowercase();
    let mut chars = guess.chars();
    let Some(first) = chars.next() else {
        return GuessOutcome::InvalidInput;
    };

    if chars.next().is_some() {
        apply_word_guess(state, guess)
    } else {
        apply_letter_guess(state, first)
    }
}

fn apply_word_guess(state: &mut RoundState, guess: String) -> GuessOutcome {
    if state.word_attempts().contains(&guess) {
        return GuessOutcome::DuplicateWord(guess);
    }
    state.note_word_attempt(guess.clone());

    if guess == state.target().text() {
        let hidden = state.target().hidden_letter_count(state.guessed_letters());
        let bonus = GUESS_POINTS * hidden as i32;
        state.add_score(bonus);
        state.mark_won();
        GuessOutcome::CorrectWord { bonus }
    } else {
        state.record_wrong();
        GuessOutcome::WrongWord(guess)
    }
}

fn apply_letter_guess(state: &mut RoundState, letter: char) -> GuessOutcome {
    if !letter.is_ascii_alphabetic() {
        return GuessOutcome::InvalidInput;
    }
    if state.guessed_letters().contains(&letter) {
        return GuessOutcome::DuplicateLetter(letter);
    }
    state.note_letter(letter);

    let outcome = if state.target().has_letter(letter) {
        state.add_score(GUESS_POINTS);
        GuessOutcome::CorrectLetter(letter)
    } else {
        state.record_wrong();
        GuessOutcome::WrongLetter(letter)
    };
    state.check_win();
    outcome
}
