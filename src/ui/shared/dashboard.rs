//! Coordinator dashboard aggregates.

use crate::session::{Session, SessionStatus, SessionType};
use crate::store::SessionStore;

/// One row in the per-day breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayLoad {
    pub date: chrono::NaiveDate,
    pub sessions: usize,
    pub registered: u64,
    pub capacity: u64,
}

/// Aggregate view over the whole schedule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSummary {
    pub total: usize,
    pub scheduled: usize,
    pub cancelled: usize,
    pub completed: usize,
    pub oral: usize,
    pub poster: usize,
    /// Seats taken across non-cancelled sessions.
    pub registered: u64,
    /// Seats offered across non-cancelled sessions.
    pub capacity: u64,
    /// Scheduled sessions with no seats left.
    pub full_sessions: Vec<Session>,
    pub days: Vec<DayLoad>,
}

impl DashboardSummary {
    pub fn from_sessions(sessions: &[Session]) -> Self {
        let mut summary = DashboardSummary {
            total: sessions.len(),
            ..Default::default()
        };

        for session in sessions {
            match session.status {
                SessionStatus::Scheduled => summary.scheduled += 1,
                SessionStatus::Cancelled => summary.cancelled += 1,
                SessionStatus::Completed => summary.completed += 1,
            }
            match session.session_type {
                SessionType::Oral => summary.oral += 1,
                SessionType::Poster => summary.poster += 1,
            }
            if session.status == SessionStatus::Cancelled {
                continue;
            }
            let registered = u64::from(session.registered);
            let capacity = u64::from(session.capacity);
            summary.registered += registered;
            summary.capacity += capacity;
            if session.status == SessionStatus::Scheduled && session.is_full() {
                summary.full_sessions.push(session.clone());
            }

            match summary.days.iter_mut().find(|d| d.date == session.date) {
                Some(day) => {
                    day.sessions += 1;
                    day.registered += registered;
                    day.capacity += capacity;
                }
                None => summary.days.push(DayLoad {
                    date: session.date,
                    sessions: 1,
                    registered,
                    capacity,
                }),
            }
        }
        summary.days.sort_by_key(|d| d.date);
        summary
    }

    pub fn load(store: &dyn SessionStore) -> Self {
        Self::from_sessions(&store.get_all_sessions())
    }

    /// Fraction of offered seats that are taken, in `0.0..=1.0`.
    pub fn utilization(&self) -> f32 {
        if self.capacity == 0 {
            0.0
        } else {
            self.registered as f32 / self.capacity as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, session, two_session_schedule};

    #[test]
    fn test_summary_counts() {
        let summary = DashboardSummary::from_sessions(&two_session_schedule());
        assert_eq!(summary.total, 2);
        assert_eq!(summary.scheduled, 2);
        assert_eq!(summary.oral, 1);
        assert_eq!(summary.poster, 1);
        assert_eq!(summary.registered, 35);
        assert_eq!(summary.capacity, 50);
        assert_eq!(summary.full_sessions.len(), 1);
        assert_eq!(summary.full_sessions[0].id.0, 1);
        assert!((summary.utilization() - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_cancelled_sessions_excluded_from_seats() {
        let mut cancelled = session(3, "2024-01-10", SessionType::Oral, 40, 40);
        cancelled.status = SessionStatus::Cancelled;
        let mut schedule = two_session_schedule();
        schedule.push(cancelled);

        let summary = DashboardSummary::from_sessions(&schedule);
        assert_eq!(summary.cancelled, 1);
        assert_eq!(summary.capacity, 50);
        assert_eq!(summary.full_sessions.len(), 1);
        assert_eq!(summary.days[0].date, date("2024-01-10"));
        assert_eq!(summary.days[0].sessions, 1);
    }

    #[test]
    fn test_seat_totals_do_not_overflow() {
        let big = 3_000_000_000;
        let schedule = vec![
            session(1, "2024-01-10", SessionType::Oral, big, big),
            session(2, "2024-01-10", SessionType::Poster, big, 1),
        ];
        let summary = DashboardSummary::from_sessions(&schedule);
        assert_eq!(summary.capacity, 6_000_000_000);
        assert_eq!(summary.registered, 3_000_000_001);
        assert_eq!(summary.days[0].capacity, 6_000_000_000);
        assert!(summary.utilization() > 0.49 && summary.utilization() < 0.51);
    }

    #[test]
    fn test_empty_schedule() {
        let summary = DashboardSummary::from_sessions(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.utilization(), 0.0);
        assert!(summary.days.is_empty());
    }
}
