//! Text formatting for the game loop
//!
//! String-returning formatters so the session can write them to any sink.

use colored::Colorize;

use crate::core::{GameWord, GuessOutcome, MAX_WRONG, RoundState};

/// Masked rendering of the target: guessed letters shown, the rest `_`
///
/// # Examples
/// ```
/// use hangman::core::GameWord;
/// use hangman::output::masked_word;
///
/// let word = GameWord::new("card").unwrap();
/// assert_eq!(masked_word(&word, &['c', 'a']), "c a _ _");
/// ```
#[must_use]
pub fn masked_word(target: &GameWord, guessed: &[char]) -> String {
    let mut out = String::with_capacity(target.len() * 2);
    for letter in target.chars() {
        if !out.is_empty() {
            out.push(' ');
        }
        if guessed.contains(&letter) {
            out.push(letter);
        } else {
            out.push('_');
        }
    }
    out
}

/// Comma-joined guess list, or "None" before the first guess
#[must_use]
pub fn guessed_list(letters: &[char]) -> String {
    if letters.is_empty() {
        "None".to_string()
    } else {
        letters
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// The status block printed before each turn
#[must_use]
pub fn status_block(state: &RoundState) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\nCurrent word: {}\n",
        masked_word(state.target(), state.guessed_letters())
    ));
    out.push_str(&format!(
        "Guessed letters: {}\n",
        guessed_list(state.guessed_letters())
    ));
    if !state.word_attempts().is_empty() {
        out.push_str(&format!(
            "Word attempts: {}\n",
            state.word_attempts().join(", ")
        ));
    }
    out.push_str(&format!(
        "Wrong guesses: {}/{MAX_WRONG}\n",
        state.wrong_count()
    ));
    out.push_str(&format!("Current score: {}\n", state.score()));
    out
}

/// One-or-two-line description of a guess outcome
#[must_use]
pub fn outcome_lines(outcome: &GuessOutcome, state: &RoundState) -> String {
    let remaining = MAX_WRONG - state.wrong_count();
    match outcome {
        GuessOutcome::InvalidInput => "Please enter a valid letter or word.".to_string(),
        GuessOutcome::DuplicateLetter(letter) => {
            format!("You've already guessed the letter '{letter}'.")
        }
        GuessOutcome::DuplicateWord(word) => {
            format!("You've already tried the word '{word}'.")
        }
        GuessOutcome::CorrectLetter(letter) => format!(
            "{}\n+10 points! Current score: {}",
            format!("Good guess! The letter '{letter}' appears in the word.").green(),
            state.score()
        ),
        GuessOutcome::WrongLetter(_) => format!(
            "{}\n-10 points! Current score: {}",
            format!("Wrong guess! {remaining} attempts remaining.").red(),
            state.score()
        ),
        GuessOutcome::CorrectWord { bonus } => format!(
            "{}\nYou earned {bonus} bonus points for the hidden letters!",
            format!(
                "Congratulations! You've guessed the word correctly: {}",
                state.target()
            )
            .bright_green()
            .bold()
        ),
        GuessOutcome::WrongWord(word) => format!(
            "{}\n-10 points! Current score: {}",
            format!("'{word}' is not the correct word. {remaining} attempts remaining.").red(),
            state.score()
        ),
    }
}

/// Banner for a lost round: full gallows, the reveal, the zeroed score
#[must_use]
pub fn loss_lines(state: &RoundState) -> String {
    format!(
        "{}\n{}\nThe word was: {}\nYour final score is set to 0.",
        super::gallows::stage(state.wrong_count()),
        "Game Over! You lost.".red().bold(),
        state.target()
    )
}

/// Closing line for a won round
#[must_use]
pub fn win_lines(state: &RoundState) -> String {
    format!(
        "{}\nFinal score: {}",
        format!("Congratulations! You've guessed the word: {}", state.target())
            .bright_green()
            .bold(),
        state.score()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::apply_guess;

    fn round(target: &str) -> RoundState {
        RoundState::with_target(GameWord::new(target).unwrap())
    }

    #[test]
    fn masked_word_hides_unguessed_letters() {
        let word = GameWord::new("milk").unwrap();
        assert_eq!(masked_word(&word, &[]), "_ _ _ _");
        assert_eq!(masked_word(&word, &['m', 'k']), "m _ _ k");
        assert_eq!(masked_word(&word, &['m', 'i', 'l', 'k']), "m i l k");
    }

    #[test]
    fn masked_word_repeats_revealed_duplicates() {
        let word = GameWord::new("tree").unwrap();
        assert_eq!(masked_word(&word, &['e']), "_ _ e e");
    }

    #[test]
    fn guessed_list_none_placeholder() {
        assert_eq!(guessed_list(&[]), "None");
        assert_eq!(guessed_list(&['a', 'z']), "a, z");
    }

    #[test]
    fn status_block_shows_word_attempts_only_when_present() {
        let mut state = round("milk");
        assert!(!status_block(&state).contains("Word attempts"));

        apply_guess(&mut state, "mild");
        let block = status_block(&state);
        assert!(block.contains("Word attempts: mild"));
        assert!(block.contains("Wrong guesses: 1/6"));
    }

    #[test]
    fn outcome_lines_report_score_changes() {
        let mut state = round("milk");
        let outcome = apply_guess(&mut state, "m");
        let lines = outcome_lines(&outcome, &state);
        assert!(lines.contains("+10 points"));
        assert!(lines.contains("110"));

        let outcome = apply_guess(&mut state, "z");
        let lines = outcome_lines(&outcome, &state);
        assert!(lines.contains("-10 points"));
        assert!(lines.contains("5 attempts remaining"));
    }

    #[test]
    fn loss_lines_reveal_the_word() {
        let mut state = round("milk");
        for letter in ["z", "x", "q", "w", "v", "b"] {
            apply_guess(&mut state, letter);
        }
        let lines = loss_lines(&state);
        assert!(lines.contains("The word was: milk"));
        assert!(lines.contains("score is set to 0"));
    }

    #[test]
    fn win_lines_include_final_score() {
        let mut state = round("milk");
        apply_guess(&mut state, "milk");
        let lines = win_lines(&state);
        assert!(lines.contains("milk"));
        assert!(lines.contains("140"));
    }
}
