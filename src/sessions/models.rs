use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A completed study interaction, recorded when the run ends.
///
/// `set_id` is a soft reference: deleting a deck does not remove its
/// sessions, and orphaned sessions keep counting toward history totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    pub id: Uuid,
    pub set_id: Uuid,
    pub date: DateTime<Utc>,
    /// Number of cards the user went through
    pub cards_studied: u32,
    /// Time spent, in seconds
    pub duration: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answers: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_serialization_round_trip() {
        let session = StudySession {
            id: Uuid::new_v4(),
            set_id: Uuid::new_v4(),
            date: Utc::now(),
            cards_studied: 12,
            duration: 340,
            correct_answers: Some(9),
        };

        let json = serde_json::to_string(&session).unwrap();
        let restored: StudySession = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
    }

    #[test]
    fn test_absent_correct_answers_is_omitted() {
        let session = StudySession {
            id: Uuid::new_v4(),
            set_id: Uuid::new_v4(),
            date: Utc::now(),
            cards_studied: 5,
            duration: 60,
            correct_answers: None,
        };

        let json = serde_json::to_string(&session).unwrap();
        assert!(!json.contains("correctAnswers"));
        assert!(json.contains("\"setId\""));

        let restored: StudySession = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.correct_answers, None);
    }
}
