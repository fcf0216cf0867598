//! Test fixtures shared across modules.
//!
//! Provides a compact session builder and the canonical two-session schedule
//! used by the filter, list, and detail tests.

use crate::session::{Session, SessionId, SessionStatus, SessionType};
use chrono::{NaiveDate, NaiveTime};

/// Parse an ISO date, panicking on malformed fixtures.
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("fixture date")
}

/// Build a scheduled session running 09:00-10:30 in "Room <id>".
pub fn session(
    id: u32,
    date_str: &str,
    session_type: SessionType,
    capacity: u32,
    registered: u32,
) -> Session {
    Session {
        id: SessionId(id),
        title: format!("Session {}", id),
        date: date(date_str),
        start: NaiveTime::from_hms_opt(9, 0, 0).expect("fixture time"),
        end: NaiveTime::from_hms_opt(10, 30, 0).expect("fixture time"),
        venue: format!("Room {}", id),
        session_type,
        capacity,
        registered,
        status: SessionStatus::Scheduled,
        description: None,
        evaluators: Vec::new(),
        attendees: Vec::new(),
    }
}

/// The two-session schedule: a full oral session and a poster with 15 seats left.
pub fn two_session_schedule() -> Vec<Session> {
    vec![
        session(1, "2024-01-10", SessionType::Oral, 30, 30),
        session(2, "2024-01-11", SessionType::Poster, 20, 5),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_session_schedule_shape() {
        let schedule = two_session_schedule();
        assert_eq!(schedule.len(), 2);
        assert!(schedule.iter().all(|s| s.validate().is_ok()));
    }
}
