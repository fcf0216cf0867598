//! Session filtering by date and presentation type.
//!
//! Filtering is a stable, order-preserving pass over an in-memory snapshot.
//! User-facing filter labels are converted into [`FilterCriteria`] with a
//! fail-open policy: anything that does not parse means "no constraint".

use crate::session::{Session, SessionType};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Sentinel label meaning "no date constraint".
pub const ALL_DATES: &str = "All Dates";

/// Sentinel label meaning "no type constraint".
pub const ALL_TYPES: &str = "All Types";

/// Date format accepted in filter labels and shown in date pickers.
pub const DATE_LABEL_FORMAT: &str = "%Y-%m-%d";

/// Typed filter criteria. `None` means the dimension is unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub date: Option<NaiveDate>,
    pub session_type: Option<SessionType>,
}

impl FilterCriteria {
    pub fn new(date: Option<NaiveDate>, session_type: Option<SessionType>) -> Self {
        Self { date, session_type }
    }

    /// Build criteria from picker labels. Never fails.
    pub fn from_labels(date_label: &str, type_label: &str) -> Self {
        Self {
            date: parse_date_label(date_label),
            session_type: parse_type_label(type_label),
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.date.is_none() && self.session_type.is_none()
    }

    pub fn matches(&self, session: &Session) -> bool {
        self.date.is_none_or(|d| session.date == d)
            && self.session_type.is_none_or(|t| session.session_type == t)
    }

    /// Label of the date dimension as shown in a picker.
    pub fn date_label(&self) -> String {
        self.date
            .map(|d| d.format(DATE_LABEL_FORMAT).to_string())
            .unwrap_or_else(|| ALL_DATES.to_string())
    }

    /// Label of the type dimension as shown in a picker.
    pub fn type_label(&self) -> &'static str {
        self.session_type.map(SessionType::label).unwrap_or(ALL_TYPES)
    }
}

/// Filter sessions by optional date and type, preserving input order.
pub fn filter(
    sessions: &[Session],
    date: Option<NaiveDate>,
    session_type: Option<SessionType>,
) -> Vec<Session> {
    filter_by(sessions, &FilterCriteria::new(date, session_type))
}

/// Filter sessions by prepared criteria, preserving input order.
pub fn filter_by(sessions: &[Session], criteria: &FilterCriteria) -> Vec<Session> {
    sessions
        .iter()
        .filter(|s| criteria.matches(s))
        .cloned()
        .collect()
}

/// Distinct session dates in ascending order.
pub fn available_dates(sessions: &[Session]) -> Vec<NaiveDate> {
    sessions
        .iter()
        .map(|s| s.date)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Date picker labels: the "All Dates" sentinel followed by each available date.
pub fn date_options(sessions: &[Session]) -> Vec<String> {
    std::iter::once(ALL_DATES.to_string())
        .chain(
            available_dates(sessions)
                .into_iter()
                .map(|d| d.format(DATE_LABEL_FORMAT).to_string()),
        )
        .collect()
}

/// Type picker labels: the "All Types" sentinel followed by each type.
pub fn type_options() -> Vec<&'static str> {
    std::iter::once(ALL_TYPES)
        .chain(SessionType::all().iter().map(|t| t.label()))
        .collect()
}

/// True for a blank label or the `sentinel` ("All Dates" / "All Types"),
/// compared case-insensitively.
pub fn is_unconstrained_label(label: &str, sentinel: &str) -> bool {
    let label = label.trim();
    label.is_empty() || label.eq_ignore_ascii_case(sentinel)
}

/// Parse a date picker label. Sentinel, blank, or malformed input yields `None`.
pub fn parse_date_label(label: &str) -> Option<NaiveDate> {
    if is_unconstrained_label(label, ALL_DATES) {
        return None;
    }
    let label = label.trim();
    match NaiveDate::parse_from_str(label, DATE_LABEL_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::debug!("Ignoring unparseable date filter {:?}: {}", label, e);
            None
        }
    }
}

/// Parse a type picker label. Sentinel, blank, or unknown input yields `None`.
pub fn parse_type_label(label: &str) -> Option<SessionType> {
    let normalized = label.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "oral" | "oral presentation" => Some(SessionType::Oral),
        "poster" | "poster presentation" => Some(SessionType::Poster),
        _ => {
            if !is_unconstrained_label(label, ALL_TYPES) {
                tracing::debug!("Ignoring unknown type filter {:?}", label);
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, session, two_session_schedule};

    fn ids(sessions: &[Session]) -> Vec<u32> {
        sessions.iter().map(|s| s.id.0).collect()
    }

    fn mixed_schedule() -> Vec<Session> {
        vec![
            session(5, "2024-01-11", SessionType::Poster, 10, 0),
            session(3, "2024-01-10", SessionType::Oral, 10, 0),
            session(9, "2024-01-11", SessionType::Oral, 10, 0),
            session(1, "2024-01-10", SessionType::Poster, 10, 0),
            session(4, "2024-01-12", SessionType::Oral, 10, 0),
            session(2, "2024-01-11", SessionType::Oral, 10, 0),
        ]
    }

    #[test]
    fn test_filter_by_date_scenario() {
        let schedule = two_session_schedule();
        let result = filter(&schedule, Some(date("2024-01-10")), None);
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn test_filter_identity_without_constraints() {
        let schedule = mixed_schedule();
        assert_eq!(filter(&schedule, None, None), schedule);
    }

    #[test]
    fn test_filter_preserves_relative_order() {
        let schedule = mixed_schedule();
        let result = filter(&schedule, Some(date("2024-01-11")), Some(SessionType::Oral));
        assert_eq!(ids(&result), vec![9, 2]);

        let orals = filter(&schedule, None, Some(SessionType::Oral));
        assert_eq!(ids(&orals), vec![3, 9, 4, 2]);
    }

    #[test]
    fn test_filter_result_is_subsequence_satisfying_constraints() {
        let schedule = mixed_schedule();
        for d in available_dates(&schedule)
            .into_iter()
            .map(Some)
            .chain([None, Some(date("2030-01-01"))])
        {
            for t in [None, Some(SessionType::Oral), Some(SessionType::Poster)] {
                let result = filter(&schedule, d, t);

                // Subsequence: each result element appears in input after the previous one.
                let mut cursor = 0;
                for item in &result {
                    let pos = schedule[cursor..]
                        .iter()
                        .position(|s| s.id == item.id)
                        .expect("result element must come from input in order");
                    cursor += pos + 1;
                }

                for item in &result {
                    assert!(d.is_none_or(|d| item.date == d));
                    assert!(t.is_none_or(|t| item.session_type == t));
                }

                let expected = schedule
                    .iter()
                    .filter(|s| d.is_none_or(|d| s.date == d))
                    .filter(|s| t.is_none_or(|t| s.session_type == t))
                    .count();
                assert_eq!(result.len(), expected);
            }
        }
    }

    #[test]
    fn test_filter_empty_input() {
        assert!(filter(&[], Some(date("2024-01-10")), None).is_empty());
        assert!(available_dates(&[]).is_empty());
    }

    #[test]
    fn test_available_dates_distinct_ascending() {
        let dates = available_dates(&mixed_schedule());
        assert_eq!(
            dates,
            vec![date("2024-01-10"), date("2024-01-11"), date("2024-01-12")]
        );
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_parse_date_label_fails_open() {
        assert_eq!(parse_date_label("2024-01-10"), Some(date("2024-01-10")));
        assert_eq!(parse_date_label(" 2024-01-10 "), Some(date("2024-01-10")));
        assert_eq!(parse_date_label(ALL_DATES), None);
        assert_eq!(parse_date_label("all dates"), None);
        assert_eq!(parse_date_label(""), None);
        assert_eq!(parse_date_label("10/01/2024"), None);
        assert_eq!(parse_date_label("2024-13-45"), None);
    }

    #[test]
    fn test_is_unconstrained_label() {
        assert!(is_unconstrained_label("All Dates", ALL_DATES));
        assert!(is_unconstrained_label(" all dates ", ALL_DATES));
        assert!(is_unconstrained_label("", ALL_TYPES));
        assert!(!is_unconstrained_label("Oral", ALL_TYPES));
    }

    #[test]
    fn test_parse_type_label_fails_open() {
        assert_eq!(parse_type_label("ORAL"), Some(SessionType::Oral));
        assert_eq!(parse_type_label("Oral"), Some(SessionType::Oral));
        assert_eq!(
            parse_type_label("Poster Presentation"),
            Some(SessionType::Poster)
        );
        assert_eq!(parse_type_label(ALL_TYPES), None);
        assert_eq!(parse_type_label("workshop"), None);
        assert_eq!(parse_type_label("  "), None);
    }

    #[test]
    fn test_criteria_from_labels_malformed_is_unconstrained() {
        let criteria = FilterCriteria::from_labels("not a date", "keynote");
        assert!(criteria.is_unconstrained());
        let schedule = mixed_schedule();
        assert_eq!(filter_by(&schedule, &criteria), schedule);
    }

    #[test]
    fn test_criteria_labels_round_trip_through_pickers() {
        let criteria = FilterCriteria::new(Some(date("2024-01-12")), Some(SessionType::Poster));
        assert_eq!(criteria.date_label(), "2024-01-12");
        assert_eq!(criteria.type_label(), "Poster");
        assert_eq!(FilterCriteria::default().date_label(), ALL_DATES);
        assert_eq!(FilterCriteria::default().type_label(), ALL_TYPES);
    }

    #[test]
    fn test_picker_options_start_with_sentinel() {
        let dates = date_options(&two_session_schedule());
        assert_eq!(dates, vec![ALL_DATES, "2024-01-10", "2024-01-11"]);
        assert_eq!(type_options(), vec![ALL_TYPES, "Oral", "Poster"]);
    }
}
