//! Session storage.
//!
//! The UI consumes sessions through the [`SessionStore`] trait. The bundled
//! [`InMemorySessionStore`] is populated either from a JSON data file or from
//! the built-in sample schedule.

use crate::error::{Result, SeminarError};
use crate::filter;
use crate::session::{Role, Session, SessionId, SessionStatus, SessionType, UserAccount};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Read and query access to seminar sessions, plus seat registration.
pub trait SessionStore {
    /// All sessions in chronological order.
    fn get_all_sessions(&self) -> Vec<Session>;

    /// Sessions matching the optional date and type, in chronological order.
    fn filter_sessions(
        &self,
        date: Option<NaiveDate>,
        session_type: Option<SessionType>,
    ) -> Vec<Session> {
        filter::filter(&self.get_all_sessions(), date, session_type)
    }

    fn get_session(&self, id: SessionId) -> Option<Session>;

    /// Register `username` for a session, taking one seat.
    fn register(&mut self, id: SessionId, username: &str) -> Result<()>;
}

/// Contents of a seminar data file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeminarData {
    #[serde(default)]
    pub sessions: Vec<Session>,
    #[serde(default)]
    pub users: Vec<UserAccount>,
}

impl SeminarData {
    /// Load a data file. A file without `users` falls back to the built-in accounts.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SeminarError::DataFileNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        let mut data: SeminarData = serde_json::from_str(&content)?;
        if data.users.is_empty() {
            data.users = sample_users();
        }
        tracing::info!(
            "Loaded {} sessions and {} users from {:?}",
            data.sessions.len(),
            data.users.len(),
            path
        );
        Ok(data)
    }

    /// Load from `path` when given, otherwise use the sample schedule.
    pub fn load_or_sample(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                tracing::info!("No data file configured, using the sample schedule");
                Ok(Self::sample())
            }
        }
    }

    /// The built-in sample schedule and accounts.
    pub fn sample() -> Self {
        Self {
            sessions: sample_sessions(),
            users: sample_users(),
        }
    }
}

/// An in-memory store holding sessions sorted by date and start time.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Vec<Session>,
}

impl InMemorySessionStore {
    /// Build a store, validating every session and rejecting duplicate ids.
    pub fn new(mut sessions: Vec<Session>) -> Result<Self> {
        let mut seen = HashSet::new();
        for session in &sessions {
            session.validate()?;
            if !seen.insert(session.id) {
                return Err(SeminarError::DuplicateSession(session.id));
            }
        }
        sessions.sort_by_key(|s| (s.date, s.start, s.id));
        Ok(Self { sessions })
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionStore for InMemorySessionStore {
    fn get_all_sessions(&self) -> Vec<Session> {
        self.sessions.clone()
    }

    fn get_session(&self, id: SessionId) -> Option<Session> {
        self.sessions.iter().find(|s| s.id == id).cloned()
    }

    fn register(&mut self, id: SessionId, username: &str) -> Result<()> {
        let session = self
            .sessions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(SeminarError::SessionNotFound(id))?;

        if session.status != SessionStatus::Scheduled {
            return Err(SeminarError::SessionNotOpen(id));
        }
        if session.has_attendee(username) {
            return Err(SeminarError::AlreadyRegistered {
                id,
                username: username.to_string(),
            });
        }
        if session.is_full() {
            return Err(SeminarError::SessionFull(id));
        }

        session.registered += 1;
        session.attendees.push(username.to_string());
        tracing::info!("Registered {} for session {}", username, id);
        Ok(())
    }
}

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

fn day(month: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, d).unwrap_or(NaiveDate::MIN)
}

#[allow(clippy::too_many_arguments)]
fn sample(
    id: u32,
    title: &str,
    date: NaiveDate,
    (start, end): (NaiveTime, NaiveTime),
    venue: &str,
    session_type: SessionType,
    (registered, capacity): (u32, u32),
    status: SessionStatus,
    description: Option<&str>,
    evaluators: &[&str],
) -> Session {
    Session {
        id: SessionId(id),
        title: title.to_string(),
        date,
        start,
        end,
        venue: venue.to_string(),
        session_type,
        capacity,
        registered,
        status,
        description: description.map(str::to_string),
        evaluators: evaluators.iter().map(|e| e.to_string()).collect(),
        attendees: Vec::new(),
    }
}

/// A small three-day schedule covering every type, status, and capacity state.
pub fn sample_sessions() -> Vec<Session> {
    vec![
        sample(
            1,
            "Opening Keynote",
            day(1, 10),
            (at(9, 0), at(10, 30)),
            "Main Hall",
            SessionType::Oral,
            (30, 30),
            SessionStatus::Scheduled,
            Some("Welcome address and overview of the seminar tracks."),
            &["eval"],
        ),
        sample(
            2,
            "Poster Session A",
            day(1, 11),
            (at(13, 0), at(15, 0)),
            "Atrium",
            SessionType::Poster,
            (5, 20),
            SessionStatus::Scheduled,
            None,
            &["eval"],
        ),
        sample(
            3,
            "Distributed Systems",
            day(1, 10),
            (at(11, 0), at(12, 30)),
            "Room 101",
            SessionType::Oral,
            (12, 40),
            SessionStatus::Scheduled,
            Some("Consensus protocols and replicated state machines."),
            &[],
        ),
        sample(
            4,
            "Machine Learning Posters",
            day(1, 11),
            (at(9, 30), at(11, 0)),
            "Atrium",
            SessionType::Poster,
            (25, 25),
            SessionStatus::Completed,
            None,
            &["eval"],
        ),
        sample(
            5,
            "Programming Languages",
            day(1, 12),
            (at(10, 0), at(11, 30)),
            "Room 204",
            SessionType::Oral,
            (3, 35),
            SessionStatus::Cancelled,
            Some("Moved to the spring seminar."),
            &[],
        ),
        sample(
            6,
            "Closing Panel",
            day(1, 12),
            (at(15, 0), at(16, 30)),
            "Main Hall",
            SessionType::Oral,
            (18, 60),
            SessionStatus::Scheduled,
            None,
            &[],
        ),
    ]
}

/// Built-in accounts, one per role.
pub fn sample_users() -> Vec<UserAccount> {
    vec![
        UserAccount::new("student", "Sam Student", Role::Student),
        UserAccount::new("coord", "Casey Coordinator", Role::Coordinator),
        UserAccount::new("eval", "Evan Evaluator", Role::Evaluator),
    ]
}
