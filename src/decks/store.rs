//! Persisted deck collection

use std::sync::Arc;

use uuid::Uuid;

use crate::storage::{load_collection, KeyValueStore, Result};

use super::models::FlashcardSet;

/// Storage key for the deck collection. Matches the key the web app used in
/// localStorage, so stored payloads are interchangeable.
const DECKS_KEY: &str = "flashmind_sets";

/// Authoritative collection of flashcard decks, kept in memory and written
/// through the key-value adapter on every mutation.
pub struct DeckStore {
    store: Arc<dyn KeyValueStore>,
    decks: Vec<FlashcardSet>,
}

impl DeckStore {
    /// Create a deck store over `store`, loading any persisted collection.
    /// Absent or malformed data starts the store empty.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let decks = load_collection(store.as_ref(), DECKS_KEY);
        Self { store, decks }
    }

    /// All decks, most recently added first.
    pub fn decks(&self) -> &[FlashcardSet] {
        &self.decks
    }

    /// Look up a deck by id.
    pub fn get(&self, id: Uuid) -> Option<&FlashcardSet> {
        self.decks.iter().find(|d| d.id == id)
    }

    /// Total number of cards across all decks.
    pub fn total_cards(&self) -> usize {
        self.decks.iter().map(|d| d.cards.len()).sum()
    }

    /// Add a deck to the front of the collection and persist it.
    ///
    /// Ids are expected to be generator-unique; no uniqueness check is made.
    /// If the persistence write fails the in-memory collection is left
    /// unchanged so the caller can retry.
    pub fn add_deck(&mut self, deck: FlashcardSet) -> Result<()> {
        log::info!("Adding deck '{}' with {} cards", deck.name, deck.cards.len());

        let mut decks = self.decks.clone();
        decks.insert(0, deck);
        self.persist(&decks)?;
        self.decks = decks;
        Ok(())
    }

    /// Remove any deck with `id` and persist the resulting collection.
    /// Deleting an absent id is a no-op, not an error.
    pub fn delete_deck(&mut self, id: Uuid) -> Result<()> {
        let mut decks = self.decks.clone();
        decks.retain(|d| d.id != id);
        self.persist(&decks)?;
        self.decks = decks;
        Ok(())
    }

    fn persist(&self, decks: &[FlashcardSet]) -> Result<()> {
        let json = serde_json::to_string_pretty(decks)?;
        self.store.save(DECKS_KEY, &json)
    }
}
