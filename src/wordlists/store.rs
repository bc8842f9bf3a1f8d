//! Word-list persistence
//!
//! Loads and saves the tier document as JSON. Loading never fails: missing
//! or malformed files fall back to the built-in defaults with a diagnostic,
//! and a missing file is re-seeded with those defaults on first run.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::{Difficulty, WordCollection};
use crate::core::GameWord;

/// File name of the persisted word lists
pub const WORD_LISTS_FILE: &str = "word_lists.json";

/// File name of the rules text
pub const RULES_FILE: &str = "rules.txt";

/// Fallback shown when the rules file is missing
pub const DEFAULT_RULES: &str = "Game rules file not found. Try to guess the word \
letter by letter or guess the entire word at once before the hangman is complete!";

/// Serialized tier document
#[derive(Debug, Default, Serialize, Deserialize)]
struct TierDoc {
    #[serde(default)]
    easy_words: Vec<String>,
    #[serde(default)]
    medium_words: Vec<String>,
    #[serde(default)]
    hard_words: Vec<String>,
    #[serde(default)]
    custom_words: Vec<String>,
}

/// Envelope written on save: `{"word_lists": { ...tiers }}`
#[derive(Debug, Serialize)]
struct SaveDoc<'a> {
    word_lists: &'a TierDoc,
}

impl TierDoc {
    fn from_collection(collection: &WordCollection) -> Self {
        let texts = |tier| {
            collection
                .words(tier)
                .iter()
                .map(|word: &GameWord| word.text().to_string())
                .collect()
        };
        Self {
            easy_words: texts(Difficulty::Easy),
            medium_words: texts(Difficulty::Medium),
            hard_words: texts(Difficulty::Hard),
            custom_words: texts(Difficulty::Custom),
        }
    }

    fn into_collection(self) -> WordCollection {
        WordCollection::from_tiers(
            valid_words(self.easy_words),
            valid_words(self.medium_words),
            valid_words(self.hard_words),
            valid_words(self.custom_words),
        )
    }
}

/// Keep only entries satisfying the word invariant; drop the rest quietly
fn valid_words(entries: Vec<String>) -> Vec<GameWord> {
    entries
        .into_iter()
        .filter_map(|text| match GameWord::new(&text) {
            Ok(word) => Some(word),
            Err(err) => {
                warn!("Skipping invalid word list entry '{text}': {err}");
                None
            }
        })
        .collect()
}

/// Loads and saves word lists at a fixed path
pub struct WordListStore {
    path: PathBuf,
}

impl WordListStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the word collection, falling back to defaults on any problem
    ///
    /// Recognized document shapes, in order: tiers nested under
    /// `"all_words"`, tiers nested under `"word_lists"`, or a direct tier
    /// mapping (an object carrying `"easy_words"`). Anything else is treated
    /// as malformed. A missing file additionally seeds storage with the
    /// defaults so the next run finds a document.
    #[must_use]
    pub fn load(&self) -> WordCollection {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => {
                warn!(
                    "Word lists not found at {}: {err}; creating with defaults",
                    self.path.display()
                );
                let defaults = WordCollection::defaults();
                if let Err(err) = self.save(&defaults) {
                    warn!("Could not seed default word lists: {err:#}");
                }
                return defaults;
            }
        };

        match parse_document(&content) {
            Some(doc) => {
                debug!("Loaded word lists from {}", self.path.display());
                doc.into_collection()
            }
            None => {
                warn!(
                    "Word lists at {} are malformed; using built-in defaults",
                    self.path.display()
                );
                WordCollection::defaults()
            }
        }
    }

    /// Persist the full collection in the `word_lists` envelope
    ///
    /// # Errors
    /// Returns an error when the directory cannot be created or the file
    /// cannot be written; callers treat this as non-fatal and keep playing
    /// with the in-memory collection.
    pub fn save(&self, collection: &WordCollection) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let doc = TierDoc::from_collection(collection);
        let serialized = serde_json::to_vec_pretty(&SaveDoc { word_lists: &doc })?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}

fn parse_document(content: &str) -> Option<TierDoc> {
    let value: Value = serde_json::from_str(content).ok()?;

    let tiers = if let Some(nested) = value.get("all_words") {
        nested.clone()
    } else if let Some(nested) = value.get("word_lists") {
        nested.clone()
    } else if value.get("easy_words").is_some() {
        value
    } else {
        return None;
    };

    serde_json::from_value(tiers).ok()
}

/// Read the rules blob, substituting the built-in text when absent
#[must_use]
pub fn load_rules(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(rules) => rules,
        Err(err) => {
            warn!("Rules file not found at {}: {err}", path.display());
            DEFAULT_RULES.to_string()
        }
    }
}
