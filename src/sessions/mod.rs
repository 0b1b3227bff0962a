//! Study-session history
//!
//! Sessions are an append-only log: one record per completed study run,
//! never edited or removed.

mod ledger;
mod models;

pub use ledger::SessionLedger;
pub use models::StudySession;
