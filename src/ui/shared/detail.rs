//! Detail view for a single session.

use crate::session::{Session, SessionStatus};

/// Placeholder shown when no session is selected.
pub const NO_SELECTION_MESSAGE: &str = "Select a session to view details";

/// Visual treatment of the available-slots figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityStyle {
    Success,
    Danger,
}

/// Rendered attributes of one session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionDetails {
    pub title: String,
    pub status: SessionStatus,
    pub date: String,
    pub time_range: String,
    pub venue: String,
    pub type_label: &'static str,
    pub capacity: u32,
    pub registered: u32,
    pub available: u32,
    pub availability_style: AvailabilityStyle,
    pub description: Option<String>,
}

impl SessionDetails {
    fn from_session(session: &Session) -> Self {
        let available = session.remaining();
        Self {
            title: session.title.clone(),
            status: session.status,
            date: session.date.format("%A, %d %B %Y").to_string(),
            time_range: session.time_range(),
            venue: session.venue.clone(),
            type_label: session.session_type.long_label(),
            capacity: session.capacity,
            registered: session.registered,
            available,
            availability_style: if available > 0 {
                AvailabilityStyle::Success
            } else {
                AvailabilityStyle::Danger
            },
            description: session.description_text().map(str::to_string),
        }
    }

    /// Label/value rows in display order, excluding the description.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Status", self.status.label().to_string()),
            ("Date", self.date.clone()),
            ("Time", self.time_range.clone()),
            ("Venue", self.venue.clone()),
            ("Type", self.type_label.to_string()),
            ("Capacity", self.capacity.to_string()),
            ("Registered", self.registered.to_string()),
        ]
    }
}

/// What the detail region should show.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailContent {
    Placeholder(&'static str),
    Details(Box<SessionDetails>),
}

#[derive(Debug, Clone)]
pub struct SessionDetailView {
    content: DetailContent,
}

impl Default for SessionDetailView {
    fn default() -> Self {
        Self {
            content: DetailContent::Placeholder(NO_SELECTION_MESSAGE),
        }
    }
}

impl SessionDetailView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a session, or the placeholder for `None`.
    pub fn show(&mut self, session: Option<&Session>) {
        self.content = match session {
            Some(session) => DetailContent::Details(Box::new(SessionDetails::from_session(session))),
            None => DetailContent::Placeholder(NO_SELECTION_MESSAGE),
        };
    }

    pub fn content(&self) -> &DetailContent {
        &self.content
    }

    pub fn details(&self) -> Option<&SessionDetails> {
        match &self.content {
            DetailContent::Details(details) => Some(details),
            DetailContent::Placeholder(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::two_session_schedule;

    #[test]
    fn test_placeholder_by_default_and_for_none() {
        let mut view = SessionDetailView::new();
        assert_eq!(
            view.content(),
            &DetailContent::Placeholder(NO_SELECTION_MESSAGE)
        );

        view.show(two_session_schedule().first());
        view.show(None);
        assert!(view.details().is_none());
    }

    #[test]
    fn test_details_for_full_session() {
        let schedule = two_session_schedule();
        let mut view = SessionDetailView::new();
        view.show(Some(&schedule[0]));

        let details = view.details().unwrap();
        assert_eq!(details.type_label, "Oral Presentation");
        assert_eq!(details.capacity, 30);
        assert_eq!(details.registered, 30);
        assert_eq!(details.available, 0);
        assert_eq!(details.availability_style, AvailabilityStyle::Danger);
        assert_eq!(details.time_range, "09:00 - 10:30");
        assert_eq!(details.date, "Wednesday, 10 January 2024");
        assert_eq!(details.description, None);
    }

    #[test]
    fn test_details_for_open_session() {
        let mut schedule = two_session_schedule();
        schedule[1].description = Some("Posters on graph theory.".to_string());
        let mut view = SessionDetailView::new();
        view.show(Some(&schedule[1]));

        let details = view.details().unwrap();
        assert_eq!(details.type_label, "Poster Presentation");
        assert_eq!(details.available, 15);
        assert_eq!(details.availability_style, AvailabilityStyle::Success);
        assert_eq!(
            details.description.as_deref(),
            Some("Posters on graph theory.")
        );
    }

    #[test]
    fn test_show_does_not_mutate_session() {
        let schedule = two_session_schedule();
        let before = schedule[1].clone();
        let mut view = SessionDetailView::new();
        view.show(Some(&schedule[1]));
        assert_eq!(schedule[1], before);
    }

    #[test]
    fn test_rows_in_display_order() {
        let schedule = two_session_schedule();
        let mut view = SessionDetailView::new();
        view.show(Some(&schedule[0]));
        let labels: Vec<&str> = view.details().unwrap().rows().iter().map(|r| r.0).collect();
        assert_eq!(
            labels,
            vec!["Status", "Date", "Time", "Venue", "Type", "Capacity", "Registered"]
        );
    }
}
