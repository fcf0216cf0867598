//! Selectable list of session cards.

use crate::session::{Session, SessionId, SessionStatus};

/// Placeholder shown instead of an empty list.
pub const EMPTY_LIST_MESSAGE: &str = "No sessions found";

/// Visual treatment of the remaining-seats figure on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityStyle {
    /// Seats are still available.
    Neutral,
    /// No seats left.
    Danger,
}

impl CapacityStyle {
    pub fn for_remaining(remaining: u32) -> Self {
        if remaining == 0 {
            CapacityStyle::Danger
        } else {
            CapacityStyle::Neutral
        }
    }
}

/// Everything a renderer needs to draw one card.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionCard {
    pub id: SessionId,
    pub title: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    pub type_label: &'static str,
    pub remaining: u32,
    pub capacity_style: CapacityStyle,
    pub status: SessionStatus,
    pub is_selected: bool,
    pub is_hovered: bool,
}

impl SessionCard {
    /// e.g. "15 seats left" / "Full".
    pub fn remaining_label(&self) -> String {
        match self.remaining {
            0 => "Full".to_string(),
            1 => "1 seat left".to_string(),
            n => format!("{} seats left", n),
        }
    }
}

/// Emitted whenever [`SessionListView::select`] changes (or clears) the selection.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionChanged {
    pub session: Option<Session>,
}

/// List state: the displayed sessions, the selected card, and the hovered card.
#[derive(Debug, Clone, Default)]
pub struct SessionListView {
    sessions: Vec<Session>,
    selected: Option<SessionId>,
    hovered: Option<SessionId>,
}

impl SessionListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed sessions.
    ///
    /// The selection survives only if the selected id is still present.
    pub fn set_sessions(&mut self, sessions: Vec<Session>) {
        self.sessions = sessions;
        if self.selected.is_some_and(|id| !self.contains(id)) {
            self.selected = None;
        }
        if self.hovered.is_some_and(|id| !self.contains(id)) {
            self.hovered = None;
        }
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Placeholder text when there is nothing to list.
    pub fn placeholder(&self) -> Option<&'static str> {
        self.sessions.is_empty().then_some(EMPTY_LIST_MESSAGE)
    }

    pub fn contains(&self, id: SessionId) -> bool {
        self.sessions.iter().any(|s| s.id == id)
    }

    /// Select a card by id. An id not in the list clears the selection.
    pub fn select(&mut self, id: SessionId) -> SelectionChanged {
        let session = self.sessions.iter().find(|s| s.id == id).cloned();
        self.selected = session.as_ref().map(|s| s.id);
        SelectionChanged { session }
    }

    pub fn clear_selection(&mut self) -> SelectionChanged {
        self.selected = None;
        SelectionChanged { session: None }
    }

    pub fn selected(&self) -> Option<SessionId> {
        self.selected
    }

    pub fn selected_session(&self) -> Option<&Session> {
        self.selected
            .and_then(|id| self.sessions.iter().find(|s| s.id == id))
    }

    fn selected_index(&self) -> Option<usize> {
        self.selected
            .and_then(|id| self.sessions.iter().position(|s| s.id == id))
    }

    /// Move the selection down one card, stopping at the last.
    pub fn select_next(&mut self) -> SelectionChanged {
        let next = match self.selected_index() {
            Some(i) => (i + 1).min(self.sessions.len().saturating_sub(1)),
            None => 0,
        };
        self.select_index(next)
    }

    /// Move the selection up one card, stopping at the first.
    pub fn select_previous(&mut self) -> SelectionChanged {
        let prev = self.selected_index().map(|i| i.saturating_sub(1)).unwrap_or(0);
        self.select_index(prev)
    }

    fn select_index(&mut self, index: usize) -> SelectionChanged {
        match self.sessions.get(index).map(|s| s.id) {
            Some(id) => self.select(id),
            None => self.clear_selection(),
        }
    }

    /// Hover is visual only.
    pub fn set_hovered(&mut self, id: Option<SessionId>) {
        self.hovered = id.filter(|id| self.contains(*id));
    }

    pub fn hovered(&self) -> Option<SessionId> {
        self.hovered
    }

    pub fn cards(&self) -> Vec<SessionCard> {
        self.sessions
            .iter()
            .map(|s| SessionCard {
                id: s.id,
                title: s.title.clone(),
                date: s.date.format("%a %d %b %Y").to_string(),
                time: s.time_range(),
                venue: s.venue.clone(),
                type_label: s.session_type.label(),
                remaining: s.remaining(),
                capacity_style: CapacityStyle::for_remaining(s.remaining()),
                status: s.status,
                is_selected: self.selected == Some(s.id),
                is_hovered: self.hovered == Some(s.id),
            })
            .collect()
    }
}
