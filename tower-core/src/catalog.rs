//! Word Catalog
//!
//! The fixed universe of words known to the game. Built once at startup and
//! never mutated afterwards, so it is shared as `Arc<WordCatalog>`.
//! Both directions of lookup are hash-indexed:
//! - `get(id)` for build requests
//! - `resolve(text)` for shuffle responses (byte-exact, case-sensitive)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, error};

use crate::constants::BUILTIN_WORDS;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordEntry {
    pub id: u32,
    pub text: String,
}

impl WordEntry {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    /// Length in characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate word id {0}")]
    DuplicateId(u32),
    #[error("Duplicate word text {0:?}")]
    DuplicateText(String),
    #[error("Word id {0} has empty text")]
    EmptyText(u32),
}

#[derive(Debug, Clone, Default)]
pub struct WordCatalog {
    by_id: HashMap<u32, WordEntry>,
    by_text: HashMap<String, u32>,
}

impl WordCatalog {
    pub fn new(entries: impl IntoIterator<Item = WordEntry>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::new();
        let mut by_text = HashMap::new();
        for entry in entries {
            if entry.text.is_empty() {
                return Err(CatalogError::EmptyText(entry.id));
            }
            if by_text.insert(entry.text.clone(), entry.id).is_some() {
                return Err(CatalogError::DuplicateText(entry.text));
            }
            if by_id.contains_key(&entry.id) {
                return Err(CatalogError::DuplicateId(entry.id));
            }
            by_id.insert(entry.id, entry);
        }
        debug!(words = by_id.len(), "word catalog indexed");
        Ok(Self { by_id, by_text })
    }

    /// Assigns ids 1..=N in list order.
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Result<Self, CatalogError> {
        Self::new(
            words
                .into_iter()
                .enumerate()
                .map(|(i, text)| WordEntry::new(i as u32 + 1, text)),
        )
    }

    pub fn builtin() -> Self {
        Self::from_words(BUILTIN_WORDS.iter().copied()).unwrap_or_else(|e| {
            error!("built-in word list rejected, catalog is empty: {}", e);
            Self::default()
        })
    }

    pub fn get(&self, id: u32) -> Option<&WordEntry> {
        self.by_id.get(&id)
    }

    pub fn resolve(&self, text: &str) -> Option<&WordEntry> {
        self.by_text.get(text).and_then(|id| self.by_id.get(id))
    }

    pub fn contains(&self, id: u32) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Entries sorted by id.
    pub fn iter(&self) -> impl Iterator<Item = &WordEntry> {
        let mut entries: Vec<&WordEntry> = self.by_id.values().collect();
        entries.sort_unstable_by_key(|e| e.id);
        entries.into_iter()
    }
}
