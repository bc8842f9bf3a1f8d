//! Terminal output formatting
//!
//! Gallows art and string formatters for the round loop.

pub mod display;
pub mod gallows;

pub use display::{guessed_list, loss_lines, masked_word, outcome_lines, status_block, win_lines};
pub use gallows::stage;
