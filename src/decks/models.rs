//! Data models for flashcard decks

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single question/answer card. Immutable once created; the id is unique
/// within the owning deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
}

impl Flashcard {
    pub fn new(question: String, answer: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            question,
            answer,
        }
    }
}

/// A deck of flashcards, created atomically with its full card list.
///
/// Cards are owned by their deck and never shared. A deck with zero cards is
/// legal but degenerate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashcardSet {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub cards: Vec<Flashcard>,
}

impl FlashcardSet {
    pub fn new(name: String, cards: Vec<Flashcard>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            created_at: Utc::now(),
            cards,
        }
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }
}
