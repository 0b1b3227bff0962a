//! Flashcard decks
//!
//! A deck is created atomically with its full card list (usually the output
//! of a PDF extraction) and never edited afterwards; the only mutations are
//! adding and deleting whole decks.

mod models;
mod store;

pub use models::{Flashcard, FlashcardSet};
pub use store::DeckStore;
