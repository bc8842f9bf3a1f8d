//! Difficulty-tiered word lists
//!
//! `WordCollection` holds the four tiers; the custom tier is the only one
//! that mutates at runtime. Persistence lives in [`store`].

pub mod store;

use std::fmt;

use crate::core::{GameWord, WordError};

/// Difficulty tiers, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Custom,
}

impl Difficulty {
    /// All tiers, in menu order
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Custom];

    /// Parse the menu shorthand (`e`/`m`/`h`/`c`) or a full tier name
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "e" | "easy" => Some(Self::Easy),
            "m" | "medium" => Some(Self::Medium),
            "h" | "hard" => Some(Self::Hard),
            "c" | "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    /// Key used for this tier in the persisted document
    #[must_use]
    pub const fn storage_key(self) -> &'static str {
        match self {
            Self::Easy => "easy_words",
            Self::Medium => "medium_words",
            Self::Hard => "hard_words",
            Self::Custom => "custom_words",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Custom => "custom",
        };
        write!(f, "{name}")
    }
}

/// Error when editing the custom tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomListError {
    Invalid(WordError),
    Duplicate(String),
}

impl fmt::Display for CustomListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(err) => write!(f, "{err}"),
            Self::Duplicate(word) => write!(f, "'{word}' is already in the custom list"),
        }
    }
}

impl std::error::Error for CustomListError {}

/// The four word tiers
///
/// Every stored word satisfies the `GameWord` invariant (lowercase,
/// alphabetic, non-empty). Tier order is preserved for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCollection {
    easy: Vec<GameWord>,
    medium: Vec<GameWord>,
    hard: Vec<GameWord>,
    custom: Vec<GameWord>,
}

impl WordCollection {
    /// Built-in seed lists, used whenever storage is missing or unreadable
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            easy: seed(&["card", "star", "tree", "game", "milk"]),
            medium: seed(&["bicycle", "dancing", "sunrise", "rainbow", "diamond"]),
            hard: seed(&["elephant", "computer", "sunshine", "calendar", "butterfly"]),
            custom: Vec::new(),
        }
    }

    pub(crate) fn from_tiers(
        easy: Vec<GameWord>,
        medium: Vec<GameWord>,
        hard: Vec<GameWord>,
        custom: Vec<GameWord>,
    ) -> Self {
        Self {
            easy,
            medium,
            hard,
            custom,
        }
    }

    /// Words in one tier, in stored order
    #[must_use]
    pub fn words(&self, tier: Difficulty) -> &[GameWord] {
        match tier {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
            Difficulty::Custom => &self.custom,
        }
    }

    /// Append a word to the custom tier, returning its normalized text
    ///
    /// # Errors
    /// Rejects input that fails `GameWord` validation and case-normalized
    /// exact duplicates; the list is unchanged on error.
    pub fn add_custom(&mut self, raw: &str) -> Result<String, CustomListError> {
        let word = GameWord::new(raw).map_err(CustomListError::Invalid)?;
        if self.custom.contains(&word) {
            return Err(CustomListError::Duplicate(word.text().to_string()));
        }
        let text = word.text().to_string();
        self.custom.push(word);
        Ok(text)
    }

    /// Empty the custom tier
    pub fn clear_custom(&mut self) {
        self.custom.clear();
    }
}

fn seed(words: &[&str]) -> Vec<GameWord> {
    words
        .iter()
        .filter_map(|&text| GameWord::new(text).ok())
        .collect()
}
