//! Append-only study-session log

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::storage::{load_collection, KeyValueStore, Result};

use super::models::StudySession;

/// Storage key for the session log. Matches the key the web app used in
/// localStorage, so stored payloads are interchangeable.
const SESSIONS_KEY: &str = "flashmind_sessions";

/// Append-only log of completed study sessions, newest first.
pub struct SessionLedger {
    store: Arc<dyn KeyValueStore>,
    sessions: Vec<StudySession>,
}

impl SessionLedger {
    /// Create a ledger over `store`, loading any persisted log.
    /// Absent or malformed data starts the ledger empty.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let sessions = load_collection(store.as_ref(), SESSIONS_KEY);
        Self { store, sessions }
    }

    /// All recorded sessions, most recent first.
    pub fn sessions(&self) -> &[StudySession] {
        &self.sessions
    }

    /// Record a completed study session and return the stored value,
    /// including its freshly assigned id.
    ///
    /// This is the only creation path; sessions are never mutated or removed.
    /// `cards_studied` is not checked against the deck's card count and
    /// `set_id` may refer to a deck that has since been deleted.
    pub fn record_session(
        &mut self,
        set_id: Uuid,
        date: DateTime<Utc>,
        cards_studied: u32,
        duration: u32,
        correct_answers: Option<u32>,
    ) -> Result<StudySession> {
        let session = StudySession {
            id: Uuid::new_v4(),
            set_id,
            date,
            cards_studied,
            duration,
            correct_answers,
        };

        let mut sessions = self.sessions.clone();
        sessions.insert(0, session.clone());
        self.persist(&sessions)?;
        self.sessions = sessions;

        Ok(session)
    }

    fn persist(&self, sessions: &[StudySession]) -> Result<()> {
        let json = serde_json::to_string_pretty(sessions)?;
        self.store.save(SESSIONS_KEY, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_record_returns_stored_session_with_fresh_id() {
        let mut ledger = SessionLedger::new(Arc::new(MemoryStore::new()));

        let set_id = Uuid::new_v4();
        let date = Utc::now();
        let session = ledger.record_session(set_id, date, 4, 120, Some(3)).unwrap();

        assert_eq!(session.set_id, set_id);
        assert_eq!(session.date, date);
        assert_eq!(session.cards_studied, 4);
        assert_eq!(session.duration, 120);
        assert_eq!(session.correct_answers, Some(3));
        assert_eq!(ledger.sessions(), &[session]);
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut ledger = SessionLedger::new(Arc::new(MemoryStore::new()));

        let set_id = Uuid::new_v4();
        let mut ids = Vec::new();
        for _ in 0..20 {
            let session = ledger.record_session(set_id, Utc::now(), 1, 30, None).unwrap();
            ids.push(session.id);
        }

        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_sessions_listed_most_recent_first() {
        let mut ledger = SessionLedger::new(Arc::new(MemoryStore::new()));

        let set_id = Uuid::new_v4();
        let first = ledger.record_session(set_id, Utc::now(), 1, 10, None).unwrap();
        let second = ledger.record_session(set_id, Utc::now(), 2, 20, None).unwrap();

        assert_eq!(ledger.sessions(), &[second, first]);
    }

    #[test]
    fn test_log_survives_reload() {
        let kv = Arc::new(MemoryStore::new());

        let mut ledger = SessionLedger::new(Arc::clone(&kv) as Arc<dyn KeyValueStore>);
        let recorded = ledger.record_session(Uuid::new_v4(), Utc::now(), 7, 300, None).unwrap();
        drop(ledger);

        let reloaded = SessionLedger::new(kv);
        assert_eq!(reloaded.sessions(), &[recorded]);
    }

    #[test]
    fn test_malformed_persisted_data_starts_empty() {
        let kv = Arc::new(MemoryStore::new());
        kv.save(SESSIONS_KEY, "[{\"id\": 42}]").unwrap();

        let ledger = SessionLedger::new(kv);
        assert!(ledger.sessions().is_empty());
    }
}
