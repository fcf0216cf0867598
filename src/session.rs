//! Domain model for seminar sessions, roles, and user accounts.
//!
//! Sessions are read-only from the UI's point of view. They are created and
//! updated by a [`SessionStore`](crate::store::SessionStore) and handed to the
//! views as snapshots.

use crate::error::{Result, SeminarError};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique, immutable identifier of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub u32);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Presentation format of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionType {
    Oral,
    Poster,
}

impl SessionType {
    /// Short label used in cards and filter pickers.
    pub fn label(self) -> &'static str {
        match self {
            SessionType::Oral => "Oral",
            SessionType::Poster => "Poster",
        }
    }

    /// Human label used in the detail view.
    pub fn long_label(self) -> &'static str {
        match self {
            SessionType::Oral => "Oral Presentation",
            SessionType::Poster => "Poster Presentation",
        }
    }

    pub fn all() -> &'static [SessionType] {
        &[SessionType::Oral, SessionType::Poster]
    }
}

/// Lifecycle status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    #[default]
    Scheduled,
    Cancelled,
    Completed,
}

impl SessionStatus {
    pub fn label(self) -> &'static str {
        match self {
            SessionStatus::Scheduled => "Scheduled",
            SessionStatus::Cancelled => "Cancelled",
            SessionStatus::Completed => "Completed",
        }
    }
}

/// A scheduled seminar time-slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    #[serde(default)]
    pub title: String,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub venue: String,
    #[serde(rename = "type")]
    pub session_type: SessionType,
    pub capacity: u32,
    #[serde(default)]
    pub registered: u32,
    #[serde(default)]
    pub status: SessionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Usernames of evaluators assigned to this session.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub evaluators: Vec<String>,
    /// Usernames of students registered for this session.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attendees: Vec<String>,
}

impl Session {
    /// Remaining seats. Never underflows, even for inconsistent input.
    pub fn remaining(&self) -> u32 {
        self.capacity.saturating_sub(self.registered)
    }

    pub fn is_full(&self) -> bool {
        self.remaining() == 0
    }

    /// Formatted `HH:MM - HH:MM` time range.
    pub fn time_range(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }

    /// Description text, if present and not blank.
    pub fn description_text(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }

    pub fn is_evaluated_by(&self, username: &str) -> bool {
        self.evaluators.iter().any(|e| e == username)
    }

    pub fn has_attendee(&self, username: &str) -> bool {
        self.attendees.iter().any(|a| a == username)
    }

    /// Check the record invariants: `end > start` and `registered <= capacity`.
    pub fn validate(&self) -> Result<()> {
        if self.end <= self.start {
            return Err(SeminarError::InvalidSession {
                id: self.id,
                reason: format!(
                    "end time {} is not after start time {}",
                    self.end.format("%H:%M"),
                    self.start.format("%H:%M")
                ),
            });
        }
        if self.registered > self.capacity {
            return Err(SeminarError::InvalidSession {
                id: self.id,
                reason: format!(
                    "{} registered exceeds capacity {}",
                    self.registered, self.capacity
                ),
            });
        }
        Ok(())
    }
}

/// Permission class of the authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    Guest,
    Student,
    Coordinator,
    Evaluator,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Guest => "Guest",
            Role::Student => "Student",
            Role::Coordinator => "Coordinator",
            Role::Evaluator => "Evaluator",
        }
    }
}

/// A known user that can log in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub username: String,
    #[serde(default)]
    pub display_name: String,
    pub role: Role,
}

impl UserAccount {
    pub fn new(username: impl Into<String>, display_name: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            display_name: display_name.into(),
            role,
        }
    }

    /// Display name, falling back to the username when none is set.
    pub fn name(&self) -> &str {
        if self.display_name.is_empty() {
            &self.username
        } else {
            &self.display_name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::session;

    #[test]
    fn test_remaining_and_full() {
        let full = session(1, "2024-01-10", SessionType::Oral, 30, 30);
        assert_eq!(full.remaining(), 0);
        assert!(full.is_full());

        let open = session(2, "2024-01-11", SessionType::Poster, 20, 5);
        assert_eq!(open.remaining(), 15);
        assert!(!open.is_full());
    }

    #[test]
    fn test_remaining_saturates() {
        let mut s = session(1, "2024-01-10", SessionType::Oral, 10, 0);
        s.registered = 12;
        assert_eq!(s.remaining(), 0);
    }

    #[test]
    fn test_time_range_format() {
        let s = session(1, "2024-01-10", SessionType::Oral, 10, 0);
        assert_eq!(s.time_range(), "09:00 - 10:30");
    }

    #[test]
    fn test_description_text_skips_blank() {
        let mut s = session(1, "2024-01-10", SessionType::Oral, 10, 0);
        assert_eq!(s.description_text(), None);
        s.description = Some("   ".to_string());
        assert_eq!(s.description_text(), None);
        s.description = Some(" Keynote ".to_string());
        assert_eq!(s.description_text(), Some("Keynote"));
    }

    #[test]
    fn test_validate_rejects_bad_times() {
        let mut s = session(1, "2024-01-10", SessionType::Oral, 10, 0);
        s.end = s.start;
        let err = s.validate().unwrap_err();
        assert!(matches!(err, SeminarError::InvalidSession { .. }));
    }

    #[test]
    fn test_validate_rejects_overbooking() {
        let mut s = session(1, "2024-01-10", SessionType::Oral, 10, 0);
        s.registered = 11;
        assert!(s.validate().is_err());
        s.registered = 10;
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_session_type_labels() {
        assert_eq!(SessionType::Oral.long_label(), "Oral Presentation");
        assert_eq!(SessionType::Poster.long_label(), "Poster Presentation");
        assert_eq!(SessionType::all().len(), 2);
    }

    #[test]
    fn test_session_json_shape() {
        let json = r#"{
            "id": 7,
            "title": "Graph Neural Networks",
            "date": "2024-01-10",
            "start": "09:00:00",
            "end": "10:30:00",
            "venue": "Room A",
            "type": "POSTER",
            "capacity": 20
        }"#;
        let s: Session = serde_json::from_str(json).unwrap();
        assert_eq!(s.id, SessionId(7));
        assert_eq!(s.session_type, SessionType::Poster);
        assert_eq!(s.status, SessionStatus::Scheduled);
        assert_eq!(s.registered, 0);
        assert!(s.evaluators.is_empty());
    }

    #[test]
    fn test_user_account_name_fallback() {
        let anon = UserAccount::new("jdoe", "", Role::Student);
        assert_eq!(anon.name(), "jdoe");
        let named = UserAccount::new("jdoe", "Jane Doe", Role::Student);
        assert_eq!(named.name(), "Jane Doe");
    }
}
