//! List command handler.
//!
//! Prints the schedule filtered by picker-style labels, the same way the
//! browser filters do.

use super::load_store;
use crate::config::Config;
use crate::error::Result;
use crate::filter::{self, is_unconstrained_label, FilterCriteria, ALL_DATES, ALL_TYPES};
use crate::output::{print_schedule, print_warning};
use crate::store::SessionStore;

/// Print sessions matching `date` and `session_type`.
///
/// Unparseable labels are ignored with a warning, so the listing falls back
/// to the unfiltered schedule along that axis.
pub fn list_command(config: &Config, date: Option<&str>, session_type: Option<&str>) -> Result<()> {
    let store = load_store(config)?;
    let date_label = date.unwrap_or(ALL_DATES);
    let type_label = session_type.unwrap_or(ALL_TYPES);

    let criteria = FilterCriteria::from_labels(date_label, type_label);
    for warning in ignored_labels(date_label, type_label, &criteria) {
        print_warning(&warning);
    }

    let sessions = filter::filter_by(&store.get_all_sessions(), &criteria);
    print_schedule(&sessions, &criteria);
    Ok(())
}

/// Warnings for labels that were given but did not parse.
fn ignored_labels(date_label: &str, type_label: &str, criteria: &FilterCriteria) -> Vec<String> {
    let mut warnings = Vec::new();
    if criteria.date.is_none() && !is_unconstrained_label(date_label, ALL_DATES) {
        warnings.push(format!("Ignoring unrecognized date {:?}", date_label));
    }
    if criteria.session_type.is_none() && !is_unconstrained_label(type_label, ALL_TYPES) {
        warnings.push(format!("Ignoring unrecognized type {:?}", type_label));
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warnings(date: &str, session_type: &str) -> Vec<String> {
        let criteria = FilterCriteria::from_labels(date, session_type);
        ignored_labels(date, session_type, &criteria)
    }

    #[test]
    fn test_sentinels_in_any_case_are_not_warned() {
        assert!(warnings("All Dates", "All Types").is_empty());
        assert!(warnings("all dates", " ALL TYPES ").is_empty());
        assert!(warnings("", "").is_empty());
    }

    #[test]
    fn test_valid_labels_are_not_warned() {
        assert!(warnings("2024-01-10", "poster").is_empty());
    }

    #[test]
    fn test_unrecognized_labels_are_warned() {
        let w = warnings("10/01/2024", "Workshop");
        assert_eq!(w.len(), 2);
        assert!(w[0].contains("date"));
        assert!(w[1].contains("Workshop"));
    }
}
