//! PDF flashcard extraction via the Gemini API
//!
//! External collaborator to the stores: the client turns a PDF into
//! question/answer cards but never touches deck or session state, so a
//! failed extraction can never leave a partial deck behind.

mod client;

pub use client::{ExtractionError, GeminiClient, GeminiConfig, QaPair};
