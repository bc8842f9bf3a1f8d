//! Interactive game session
//!
//! Drives the main menu, difficulty selection, custom-list editing, and the
//! round loop. Reads from any `BufRead` and writes to any `Write` so a
//! scripted session can exercise the whole flow in tests.
//!
//! Flow: MainMenu -> Playing -> RoundEnd, where RoundEnd either returns to
//! the menu (play again) or exits. Nothing in normal play is fatal; the
//! only exit paths are menu choice 3, declining play-again, or end of
//! input.

use std::io::{BufRead, Write};

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::warn;

use crate::core::{
    GameWord, GuessOutcome, RoundPhase, RoundState, STARTING_SCORE, apply_guess,
};
use crate::output::{gallows, loss_lines, masked_word, outcome_lines, status_block, win_lines};
use crate::wordlists::store::WordListStore;
use crate::wordlists::{CustomListError, Difficulty, WordCollection};

/// One interactive hangman session
pub struct Session<R, W> {
    input: R,
    out: W,
    store: WordListStore,
    rules: String,
    rng: StdRng,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session over the given I/O endpoints
    ///
    /// `rules` is the rules text loaded once at startup; it lives for the
    /// whole session rather than in any global.
    pub fn new(store: WordListStore, rules: String, input: R, out: W) -> Self {
        Self::with_rng(store, rules, input, out, StdRng::from_os_rng())
    }

    /// Create a session with a caller-supplied RNG (deterministic in tests)
    pub fn with_rng(store: WordListStore, rules: String, input: R, out: W, rng: StdRng) -> Self {
        Self {
            input,
            out,
            store,
            rules,
            rng,
        }
    }

    /// Run the menu loop until the player exits
    ///
    /// # Errors
    /// Only I/O errors on the session's endpoints propagate; game-level
    /// problems are recovered in place.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "Welcome to Hangman!")?;
        writeln!(self.out, "-------------------")?;

        loop {
            writeln!(self.out, "\nMenu Options:")?;
            writeln!(self.out, "1. View Rules")?;
            writeln!(self.out, "2. Play Game")?;
            writeln!(self.out, "3. Exit")?;

            let Some(choice) = self.prompt("Enter your choice (1-3)")? else {
                break;
            };
            match choice.as_str() {
                "1" => self.show_rules()?,
                "2" => {
                    if !self.play()? {
                        break;
                    }
                }
                "3" => break,
                _ => writeln!(self.out, "Invalid choice. Please enter 1, 2, or 3.")?,
            }
        }

        writeln!(self.out, "Thanks for playing! Goodbye.")?;
        Ok(())
    }

    fn show_rules(&mut self) -> Result<()> {
        writeln!(self.out, "\n--- GAME RULES ---")?;
        writeln!(self.out, "{}", self.rules)?;
        self.pause()
    }

    /// One trip through difficulty selection and a round
    ///
    /// Returns `false` when the player is done with the program entirely.
    fn play(&mut self) -> Result<bool> {
        let mut collection = self.store.load();
        let Some(words) = self.select_words(&mut collection)? else {
            return Ok(true);
        };
        let Some(mut state) = RoundState::start_round(&words, &mut self.rng) else {
            return Ok(true);
        };

        writeln!(self.out, "Starting score: {STARTING_SCORE} points")?;

        loop {
            // cosmetic screen clear between turns
            writeln!(self.out, "\n")?;
            writeln!(self.out, "{}", gallows::stage(state.wrong_count()))?;
            write!(self.out, "{}", status_block(&state))?;

            // letter and hint wins surface here, after the reveal is drawn
            if state.phase() == RoundPhase::Won {
                writeln!(self.out, "\n{}", win_lines(&state))?;
                break;
            }

            if state.hint_available() && self.offer_hint(&mut state)? {
                continue;
            }

            let Some(guess) = self.prompt("\nGuess a letter or the whole word")? else {
                return Ok(false);
            };
            let outcome = apply_guess(&mut state, &guess);
            writeln!(self.out, "{}", outcome_lines(&outcome, &state))?;

            if let GuessOutcome::CorrectWord { .. } = outcome {
                writeln!(self.out, "Final score: {}", state.score())?;
                break;
            }
            if state.phase() == RoundPhase::Lost {
                writeln!(self.out, "\n{}", loss_lines(&state))?;
                break;
            }
        }

        let Some(again) = self.prompt("\nWould you like to play again? (y/n)")? else {
            return Ok(false);
        };
        Ok(again.eq_ignore_ascii_case("y"))
    }

    /// Resolve a difficulty choice to a non-empty word list
    ///
    /// Custom selection first runs the clear/add editing flow. Returns
    /// `None` (back to the menu) on an unknown difficulty or an empty tier.
    fn select_words(&mut self, collection: &mut WordCollection) -> Result<Option<Vec<GameWord>>> {
        let Some(raw) =
            self.prompt("Please choose a difficulty easy, medium, hard, custom (e, m, h, c)")?
        else {
            return Ok(None);
        };
        let Some(tier) = Difficulty::parse(&raw) else {
            writeln!(self.out, "That's not an option")?;
            return Ok(None);
        };

        if tier == Difficulty::Custom {
            self.edit_custom(collection)?;
        }

        let words = collection.words(tier);
        if words.is_empty() {
            writeln!(
                self.out,
                "The selected word list is empty. Please choose another difficulty or add words to custom."
            )?;
            return Ok(None);
        }
        Ok(Some(words.to_vec()))
    }

    /// Clear/add flow for the custom tier; saves after each mutation
    fn edit_custom(&mut self, collection: &mut WordCollection) -> Result<()> {
        let custom = collection.words(Difficulty::Custom);
        if custom.is_empty() {
            writeln!(self.out, "Your custom word list is currently empty.")?;
        } else {
            writeln!(
                self.out,
                "Your custom word list contains: {}",
                join_words(custom)
            )?;
            if self.confirm("Would you like to clear your custom word list? (y/n)")? {
                collection.clear_custom();
                writeln!(self.out, "Custom word list has been cleared.")?;
                self.persist(collection);
            }
        }

        if self.confirm("Would you like to add words to your custom list? (y/n)")? {
            loop {
                let Some(raw) = self.prompt("Enter a word to add (or type 'done' to finish)")?
                else {
                    break;
                };
                if raw.eq_ignore_ascii_case("done") {
                    break;
                }
                match collection.add_custom(&raw) {
                    Ok(word) => writeln!(self.out, "Added '{word}' to your custom list.")?,
                    Err(CustomListError::Invalid(_)) => {
                        writeln!(self.out, "Please enter a valid word.")?;
                    }
                    Err(err @ CustomListError::Duplicate(_)) => writeln!(self.out, "{err}")?,
                }
            }
            writeln!(
                self.out,
                "Your custom word list now contains: {}",
                join_words(collection.words(Difficulty::Custom))
            )?;
            self.persist(collection);
        }

        Ok(())
    }

    /// Hint offer at the three-wrong threshold
    ///
    /// Returns `true` when a letter was revealed and the board should be
    /// redrawn before the next guess.
    fn offer_hint(&mut self, state: &mut RoundState) -> Result<bool> {
        writeln!(
            self.out,
            "\n*** You have 3 lives remaining! Would you like a hint? ***"
        )?;
        if !self.confirm("Take a hint? This will reveal a letter but cost 5 points. (y/n)")? {
            return Ok(false);
        }

        match state.take_hint(&mut self.rng) {
            Some(letter) => {
                writeln!(self.out, "\nHINT: The letter '{letter}' is in the word!")?;
                writeln!(
                    self.out,
                    "Updated word: {}",
                    masked_word(state.target(), state.guessed_letters())
                )?;
                writeln!(
                    self.out,
                    "-5 points for using hint. Current score: {}",
                    state.score()
                )?;
                self.pause()?;
                Ok(true)
            }
            None => {
                writeln!(
                    self.out,
                    "No hint available - you've already guessed most letters!"
                )?;
                Ok(false)
            }
        }
    }

    /// Save failures are reported but never interrupt play
    fn persist(&mut self, collection: &WordCollection) {
        if let Err(err) = self.store.save(collection) {
            warn!("Error saving word lists: {err:#}");
        }
    }

    /// Write a prompt and read one trimmed line; `None` on end of input
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.out, "{message}: ")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// A y/n prompt; end of input counts as no
    fn confirm(&mut self, message: &str) -> Result<bool> {
        Ok(self
            .prompt(message)?
            .is_some_and(|answer| answer.eq_ignore_ascii_case("y")))
    }

    fn pause(&mut self) -> Result<()> {
        write!(self.out, "Press Enter to continue...")?;
        self.out.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        writeln!(self.out)?;
        Ok(())
    }
}

fn join_words(words: &[GameWord]) -> String {
    words
        .iter()
        .map(GameWord::text)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::store::WORD_LISTS_FILE;
    use std::path::Path;
    use tempfile::{TempDir, tempdir};

    const RULES: &str = "Guess the word before the figure is complete.";

    /// Run a scripted session against a store seeded with `custom` words
    fn run_script(script: &str, custom: &[&str]) -> (String, TempDir) {
        let dir = tempdir().unwrap();
        seed_store(dir.path(), custom);
        let output = run_script_in(script, dir.path());
        (output, dir)
    }

    fn seed_store(dir: &Path, custom: &[&str]) {
        let store = WordListStore::new(dir.join(WORD_LISTS_FILE));
        let mut collection = WordCollection::defaults();
        for word in custom {
            collection.add_custom(word).unwrap();
        }
        store.save(&collection).unwrap();
    }

    fn run_script_in(script: &str, dir: &Path) -> String {
        let store = WordListStore::new(dir.join(WORD_LISTS_FILE));
        let mut out = Vec::new();
        let mut session = Session::with_rng(
            store,
            RULES.to_string(),
            script.as_bytes(),
            &mut out,
            StdRng::seed_from_u64(42),
        );
        session.run().unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn menu_exit_immediately() {
        let (output, _dir) = run_script("3\n", &[]);
        assert!(output.contains("Welcome to Hangman!"));
        assert!(output.contains("1. View Rules"));
        assert!(output.contains("Thanks for playing! Goodbye."));
    }

    #[test]
    fn end_of_input_exits_gracefully() {
        let (output, _dir) = run_script("", &[]);
        assert!(output.contains("Thanks for playing! Goodbye."));
    }

    #[test]
    fn rules_are_shown_on_demand() {
        let (output, _dir) = run_script("1\n\n3\n", &[]);
        assert!(output.contains("--- GAME RULES ---"));
        assert!(output.contains(RULES));
    }

    #[test]
    fn invalid_menu_choice_reprompts() {
        let (output, _dir) = run_script("9\n3\n", &[]);
        assert!(output.contains("Invalid choice. Please enter 1, 2, or 3."));
        assert!(output.contains("Thanks for playing! Goodbye."));
    }

    #[test]
    fn unknown_difficulty_returns_to_menu() {
        let (output, _dir) = run_script("2\nx\n3\n", &[]);
        assert!(output.contains("That's not an option"));
        assert!(output.contains("Thanks for playing! Goodbye."));
    }

    #[test]
    fn empty_custom_tier_aborts_round() {
        // custom tier empty: no clear prompt, decline adding, abort to menu
        let (output, _dir) = run_script("2\nc\nn\n3\n", &[]);
        assert!(output.contains("Your custom word list is currently empty."));
        assert!(output.contains("The selected word list is empty."));
    }

    #[test]
    fn winning_round_by_word_guess() {
        // single-word custom tier makes the target deterministic
        let (output, _dir) = run_script("2\nc\nn\nn\nmilk\nn\n", &["milk"]);
        assert!(output.contains("Starting score: 100 points"));
        assert!(output.contains("Current word: _ _ _ _"));
        assert!(output.contains("You've guessed the word correctly: milk"));
        assert!(output.contains("You earned 40 bonus points"));
        assert!(output.contains("Final score: 140"));
    }

    #[test]
    fn winning_round_by_letters_shows_banner_after_redraw() {
        let (output, _dir) = run_script("2\nc\nn\nn\nm\ni\nl\nk\nn\n", &["milk"]);
        assert!(output.contains("Current word: m i l k"));
        assert!(output.contains("You've guessed the word: milk"));
        assert!(output.contains("Final score: 140"));
    }

    #[test]
    fn losing_round_reveals_word_and_zeroes_score() {
        // six wrong letters; hint offered after the third is declined
        let script = "2\nc\nn\nn\nz\nx\nq\nn\nw\nv\nb\nn\n";
        let (output, _dir) = run_script(script, &["milk"]);
        assert!(output.contains("Game Over! You lost."));
        assert!(output.contains("The word was: milk"));
        assert!(output.contains("Your final score is set to 0."));
    }

    #[test]
    fn hint_offered_at_three_wrong_and_costs_five() {
        // three wrong guesses, accept the hint, then solve by word
        let script = "2\nc\nn\nn\nz\nx\nq\ny\n\nmilk\nn\n";
        let (output, _dir) = run_script(script, &["milk"]);
        assert!(output.contains("*** You have 3 lives remaining!"));
        assert!(output.contains("is in the word!"));
        assert!(output.contains("-5 points for using hint. Current score: 65"));
        assert!(output.contains("You've guessed the word correctly: milk"));
    }

    #[test]
    fn duplicate_guesses_are_rejected_without_penalty() {
        let script = "2\nc\nn\nn\nm\nm\nmilk\nn\n";
        let (output, _dir) = run_script(script, &["milk"]);
        assert!(output.contains("You've already guessed the letter 'm'."));
        // one +10 for the letter, then 30 for the three still-hidden letters
        assert!(output.contains("Final score: 140"));
    }

    #[test]
    fn custom_add_rejects_duplicates_and_persists() {
        let script = "2\nc\ny\nzebra\nzebra\n\ndone\nzebra\nn\n";
        let (output, dir) = run_script(script, &[]);
        assert!(output.contains("Added 'zebra' to your custom list."));
        assert!(output.contains("'zebra' is already in the custom list"));
        assert!(output.contains("Please enter a valid word."));
        assert!(output.contains("Your custom word list now contains: zebra"));

        // the saved document carries exactly one zebra
        let store = WordListStore::new(dir.path().join(WORD_LISTS_FILE));
        let collection = store.load();
        assert_eq!(collection.words(Difficulty::Custom).len(), 1);
    }

    #[test]
    fn clearing_custom_list_persists() {
        let script = "2\nc\ny\nn\n3\n";
        let (output, dir) = run_script(script, &["zebra", "otter"]);
        assert!(output.contains("Your custom word list contains: zebra, otter"));
        assert!(output.contains("Custom word list has been cleared."));
        assert!(output.contains("The selected word list is empty."));

        let store = WordListStore::new(dir.path().join(WORD_LISTS_FILE));
        assert!(store.load().words(Difficulty::Custom).is_empty());
    }

    #[test]
    fn play_again_returns_to_menu() {
        let script = "2\nc\nn\nn\nmilk\ny\n3\n";
        let (output, _dir) = run_script(script, &["milk"]);
        // menu rendered twice: once at startup, once after the round
        let menus = output.matches("Menu Options:").count();
        assert_eq!(menus, 2);
    }

    #[test]
    fn fixed_tiers_start_round_from_seed_lists() {
        // end of input at the guess prompt exits the session
        let (output, _dir) = run_script("2\ne\n", &[]);
        // an easy word was chosen and masked; all seeds are 4 letters
        assert!(output.contains("Current word: _ _ _ _"));
    }
}
