//! Usage statistics derived from deck and session state
//!
//! The report is recomputed on demand from the current decks and sessions;
//! nothing here is persisted. Day bucketing uses the caller's local calendar
//! day, while session timestamps stay UTC instants.

use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::decks::FlashcardSet;
use crate::sessions::StudySession;

/// Activity on one day of the 7-day window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStats {
    /// Weekday short name for the bucket's day, e.g. "Mon"
    pub date: String,
    pub cards_studied: u32,
    /// Minutes, rounded
    pub time_spent: u32,
    pub sessions: u32,
}

/// Point-in-time usage report over the full deck and session history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageStats {
    pub total_sets: usize,
    pub total_cards: usize,
    pub total_study_sessions: usize,
    /// Minutes, rounded
    pub total_time_spent: u32,
    pub cards_studied_today: u32,
    /// Seven buckets, oldest first, ending on today
    pub weekly_progress: Vec<DailyStats>,
}

/// Compute the usage report for `today`, the caller's local calendar day
/// (`Local::now().date_naive()` for a live report).
///
/// Never fails: with no decks and no sessions the report is all zeros with
/// seven correctly labelled buckets. Sessions older than six days or dated in
/// the future count toward the whole-history totals but fall in no bucket.
pub fn compute_usage_stats(
    decks: &[FlashcardSet],
    sessions: &[StudySession],
    today: NaiveDate,
) -> UsageStats {
    let mut weekly_progress = Vec::with_capacity(7);
    for offset in (0i64..7).rev() {
        let day = today - Duration::days(offset);
        let day_sessions: Vec<&StudySession> =
            sessions.iter().filter(|s| session_day(s) == day).collect();

        weekly_progress.push(DailyStats {
            date: day.format("%a").to_string(),
            cards_studied: day_sessions.iter().map(|s| s.cards_studied).sum(),
            time_spent: minutes(day_sessions.iter().map(|s| s.duration).sum()),
            sessions: day_sessions.len() as u32,
        });
    }

    // Same filter as the final bucket: only sessions on today's local day
    let cards_studied_today = sessions
        .iter()
        .filter(|s| session_day(s) == today)
        .map(|s| s.cards_studied)
        .sum();

    UsageStats {
        total_sets: decks.len(),
        total_cards: decks.iter().map(|d| d.cards.len()).sum(),
        total_study_sessions: sessions.len(),
        total_time_spent: minutes(sessions.iter().map(|s| s.duration).sum()),
        cards_studied_today,
        weekly_progress,
    }
}

/// Local calendar day a session falls on. Mapping each UTC instant to its
/// local day realizes the half-open `[day_start, day_end)` bucket windows.
fn session_day(session: &StudySession) -> NaiveDate {
    session.date.with_timezone(&Local).date_naive()
}

/// Whole seconds to rounded minutes.
fn minutes(total_seconds: u32) -> u32 {
    (f64::from(total_seconds) / 60.0).round() as u32
}
