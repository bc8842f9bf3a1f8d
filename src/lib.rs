//! Hangman
//!
//! A menu-driven hangman game with difficulty-tiered word lists, a
//! persisted custom list, scoring with penalties and bonuses, and a
//! one-time hint.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GameWord, RoundState, apply_guess};
//!
//! let target = GameWord::new("milk").unwrap();
//! let mut round = RoundState::with_target(target);
//!
//! apply_guess(&mut round, "m");
//! assert_eq!(round.score(), 110);
//! ```

// Core game types and the guess engine
pub mod core;

// Tiered word lists and persistence
pub mod wordlists;

// Terminal output formatting
pub mod output;

// Interactive menu-driven session
pub mod session;
