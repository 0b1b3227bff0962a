//! FlashMind core: flashcard decks, study-session history, and usage
//! analytics for a PDF-to-flashcard study tool.
//!
//! This crate is the data layer of the app:
//! - [`decks::DeckStore`] owns the collection of flashcard decks
//! - [`sessions::SessionLedger`] owns the append-only log of study sessions
//! - [`analytics::compute_usage_stats`] derives a 7-day usage report from both
//! - [`storage`] provides the key-value persistence adapter the stores write
//!   through (file-backed or in-memory)
//! - [`extraction`] holds the Gemini client that turns a PDF into
//!   question/answer cards

pub mod analytics;
pub mod decks;
pub mod extraction;
pub mod sessions;
pub mod storage;
