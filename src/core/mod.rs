//! Core domain types for hangman
//!
//! This module contains the fundamental game types with no I/O.
//! All types here are pure and directly testable.

mod guess;
mod round;
mod word;

pub use guess::{GuessOutcome, apply_guess};
pub use round::{MAX_WRONG, RoundPhase, RoundState, STARTING_SCORE};
pub use word::{GameWord, WordError};
