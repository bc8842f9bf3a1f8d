//! Gallows ASCII art
//!
//! Pure lookup: one stage per wrong-guess count, clamped at the final
//! figure.

/// The seven gallows stages, from empty frame to complete figure
const STAGES: [&str; 7] = [
    r"
   -----
   |   |
       |
       |
       |
       |
",
    r"
   -----
   |   |
   O   |
       |
       |
       |
",
    r"
   -----
   |   |
   O   |
   |   |
       |
       |
",
    r"
   -----
   |   |
   O   |
  /|   |
       |
       |
",
    r"
   -----
   |   |
   O   |
  /|\  |
       |
       |
",
    r"
   -----
   |   |
   O   |
  /|\  |
  /    |
       |
",
    r"
   -----
   |   |
   O   |
  /|\  |
  / \  |
       |
",
];

/// Gallows art for the given wrong-guess count, clamped to the last stage
#[must_use]
pub fn stage(wrong_count: u8) -> &'static str {
    let index = usize::from(wrong_count).min(STAGES.len() - 1);
    STAGES[index]
}
