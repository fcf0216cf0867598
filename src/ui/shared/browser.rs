//! Schedule browser: filter criteria composed with a master/detail layout.

use super::detail::SessionDetailView;
use super::list::{SelectionChanged, SessionListView};
use crate::filter::{self, FilterCriteria};
use crate::session::{Session, SessionId, SessionStatus};
use crate::store::SessionStore;

/// Which sessions a browser draws from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseScope {
    /// Every session.
    All,
    /// Scheduled sessions only.
    Scheduled,
    /// Sessions assigned to the given evaluator.
    AssignedTo(String),
}

impl BrowseScope {
    fn includes(&self, session: &Session) -> bool {
        match self {
            BrowseScope::All => true,
            BrowseScope::Scheduled => session.status == SessionStatus::Scheduled,
            BrowseScope::AssignedTo(username) => session.is_evaluated_by(username),
        }
    }
}

/// Filterable master/detail view over a snapshot of the store.
#[derive(Debug, Clone)]
pub struct ScheduleBrowser {
    scope: BrowseScope,
    snapshot: Vec<Session>,
    criteria: FilterCriteria,
    list: SessionListView,
    detail: SessionDetailView,
}

impl ScheduleBrowser {
    pub fn new(scope: BrowseScope, store: &dyn SessionStore) -> Self {
        let mut browser = Self {
            scope,
            snapshot: Vec::new(),
            criteria: FilterCriteria::default(),
            list: SessionListView::new(),
            detail: SessionDetailView::new(),
        };
        browser.reload(store);
        browser
    }

    /// Take a fresh snapshot and reset filters and selection.
    pub fn reload(&mut self, store: &dyn SessionStore) {
        self.snapshot = store
            .get_all_sessions()
            .into_iter()
            .filter(|s| self.scope.includes(s))
            .collect();
        self.criteria = FilterCriteria::default();
        self.list.clear_selection();
        self.apply_filter();
    }

    pub fn scope(&self) -> &BrowseScope {
        &self.scope
    }

    pub fn criteria(&self) -> FilterCriteria {
        self.criteria
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        if self.criteria != criteria {
            self.criteria = criteria;
            self.apply_filter();
        }
    }

    /// Apply a date picker label, failing open on malformed input.
    pub fn set_date_label(&mut self, label: &str) {
        self.set_criteria(FilterCriteria {
            date: filter::parse_date_label(label),
            ..self.criteria
        });
    }

    /// Apply a type picker label, failing open on malformed input.
    pub fn set_type_label(&mut self, label: &str) {
        self.set_criteria(FilterCriteria {
            session_type: filter::parse_type_label(label),
            ..self.criteria
        });
    }

    pub fn date_options(&self) -> Vec<String> {
        filter::date_options(&self.snapshot)
    }

    pub fn type_options(&self) -> Vec<&'static str> {
        filter::type_options()
    }

    fn apply_filter(&mut self) {
        self.list
            .set_sessions(filter::filter_by(&self.snapshot, &self.criteria));
        self.detail.show(self.list.selected_session());
    }

    pub fn select(&mut self, id: SessionId) {
        let event = self.list.select(id);
        self.on_selection_changed(event);
    }

    pub fn select_next(&mut self) {
        let event = self.list.select_next();
        self.on_selection_changed(event);
    }

    pub fn select_previous(&mut self) {
        let event = self.list.select_previous();
        self.on_selection_changed(event);
    }

    pub fn clear_selection(&mut self) {
        let event = self.list.clear_selection();
        self.on_selection_changed(event);
    }

    fn on_selection_changed(&mut self, event: SelectionChanged) {
        self.detail.show(event.session.as_ref());
    }

    pub fn set_hovered(&mut self, id: Option<SessionId>) {
        self.list.set_hovered(id);
    }

    pub fn list(&self) -> &SessionListView {
        &self.list
    }

    pub fn detail(&self) -> &SessionDetailView {
        &self.detail
    }

    pub fn selected_session(&self) -> Option<&Session> {
        self.list.selected_session()
    }

    /// Number of sessions in scope before filtering.
    pub fn total(&self) -> usize {
        self.snapshot.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionType;
    use crate::store::InMemorySessionStore;
    use crate::test_utils::{date, session, two_session_schedule};
    use crate::ui::shared::detail::NO_SELECTION_MESSAGE;
    use crate::ui::shared::DetailContent;

    fn store() -> InMemorySessionStore {
        InMemorySessionStore::new(two_session_schedule()).unwrap()
    }

    #[test]
    fn test_selection_drives_detail() {
        let mut browser = ScheduleBrowser::new(BrowseScope::All, &store());
        browser.select(SessionId(2));
        let details = browser.detail().details().unwrap();
        assert_eq!(details.available, 15);
        assert_eq!(details.venue, "Room 2");
    }

    #[test]
    fn test_absent_selection_shows_placeholder() {
        let mut browser = ScheduleBrowser::new(BrowseScope::All, &store());
        browser.select(SessionId(1));
        browser.select(SessionId(9));
        assert_eq!(
            browser.detail().content(),
            &DetailContent::Placeholder(NO_SELECTION_MESSAGE)
        );
        assert!(browser.list().cards().iter().all(|c| !c.is_selected));
    }

    #[test]
    fn test_filter_hides_selected_session_and_clears_detail() {
        let mut browser = ScheduleBrowser::new(BrowseScope::All, &store());
        browser.select(SessionId(2));
        browser.set_date_label("2024-01-10");
        assert_eq!(browser.list().sessions().len(), 1);
        assert_eq!(browser.list().selected(), None);
        assert!(browser.detail().details().is_none());
    }

    #[test]
    fn test_malformed_labels_fail_open() {
        let mut browser = ScheduleBrowser::new(BrowseScope::All, &store());
        browser.set_date_label("yesterday");
        browser.set_type_label("keynote");
        assert!(browser.criteria().is_unconstrained());
        assert_eq!(browser.list().sessions().len(), 2);
    }

    #[test]
    fn test_type_filter() {
        let mut browser = ScheduleBrowser::new(BrowseScope::All, &store());
        browser.set_type_label("Poster");
        let ids: Vec<SessionId> = browser.list().sessions().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![SessionId(2)]);
        assert_eq!(browser.criteria().session_type, Some(SessionType::Poster));
    }

    #[test]
    fn test_reload_resets_filters_and_selection() {
        let mut store = store();
        let mut browser = ScheduleBrowser::new(BrowseScope::All, &store);
        browser.set_type_label("Poster");
        browser.select(SessionId(2));

        store.register(SessionId(2), "student").unwrap();
        // The snapshot is stale until an explicit reload.
        assert_eq!(browser.selected_session().unwrap().registered, 5);

        browser.reload(&store);
        assert!(browser.criteria().is_unconstrained());
        assert_eq!(browser.list().selected(), None);
        browser.select(SessionId(2));
        assert_eq!(browser.selected_session().unwrap().registered, 6);
    }

    #[test]
    fn test_scopes() {
        let mut cancelled = session(3, "2024-01-12", SessionType::Oral, 10, 0);
        cancelled.status = SessionStatus::Cancelled;
        let mut assigned = session(4, "2024-01-12", SessionType::Poster, 10, 0);
        assigned.evaluators = vec!["eval".to_string()];
        let mut schedule = two_session_schedule();
        schedule.extend([cancelled, assigned]);
        let store = InMemorySessionStore::new(schedule).unwrap();

        assert_eq!(ScheduleBrowser::new(BrowseScope::All, &store).total(), 4);
        assert_eq!(ScheduleBrowser::new(BrowseScope::Scheduled, &store).total(), 3);
        let mine = ScheduleBrowser::new(BrowseScope::AssignedTo("eval".into()), &store);
        assert_eq!(mine.total(), 1);
        assert_eq!(mine.date_options(), vec!["All Dates", "2024-01-12"]);
    }

    #[test]
    fn test_criteria_filter_by_date() {
        let mut browser = ScheduleBrowser::new(BrowseScope::All, &store());
        browser.set_criteria(FilterCriteria::new(Some(date("2024-01-11")), None));
        assert_eq!(browser.list().sessions()[0].id, SessionId(2));
    }
}
