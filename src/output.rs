use crate::config::Config;
use crate::filter::FilterCriteria;
use crate::session::{Session, SessionStatus};
use std::path::Path;
use terminal_size::{terminal_size, Width};

// ANSI color codes
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const RED: &str = "\x1b[31m";
pub const GRAY: &str = "\x1b[90m";

const DEFAULT_TERMINAL_WIDTH: usize = 80;
const MIN_TABLE_WIDTH: usize = 60;
const MAX_TABLE_WIDTH: usize = 120;

/// Width of the fixed columns before the title: id, date, time, type, seats.
const FIXED_COLUMNS_WIDTH: usize = 5 + 11 + 14 + 8 + 14;

fn terminal_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}

/// Truncate to `max_chars` characters, marking the cut with "...".
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut cut: String = text.chars().take(keep).collect();
    cut.push_str("...");
    cut
}

fn seats_color(session: &Session) -> &'static str {
    match session.status {
        SessionStatus::Cancelled => GRAY,
        _ if session.is_full() => RED,
        _ => GREEN,
    }
}

/// Seats column text: remaining seats, or the status for closed sessions.
pub fn seats_label(session: &Session) -> String {
    match session.status {
        SessionStatus::Scheduled if session.is_full() => "Full".to_string(),
        SessionStatus::Scheduled => format!("{}/{} free", session.remaining(), session.capacity),
        other => other.label().to_string(),
    }
}

/// One schedule row without colors, with the title fitted to `width`.
pub fn format_session_row(session: &Session, width: usize) -> String {
    let title_width = width.saturating_sub(FIXED_COLUMNS_WIDTH).max(10);
    format!(
        "{:<5}{:<11}{:<14}{:<8}{:<14}{}",
        session.id.to_string(),
        session.date.format("%Y-%m-%d").to_string(),
        session.time_range(),
        session.session_type.label(),
        seats_label(session),
        truncate(&session.title, title_width)
    )
}

/// Print the filtered schedule as a table.
pub fn print_schedule(sessions: &[Session], criteria: &FilterCriteria) {
    let width = terminal_width().clamp(MIN_TABLE_WIDTH, MAX_TABLE_WIDTH);

    println!(
        "{CYAN}{BOLD}Schedule{RESET} {GRAY}({}, {}){RESET}",
        criteria.date_label(),
        criteria.type_label()
    );
    println!("{GRAY}{}{RESET}", "─".repeat(width));

    if sessions.is_empty() {
        println!("{DIM}{}{RESET}", crate::ui::shared::list::EMPTY_LIST_MESSAGE);
        return;
    }

    println!(
        "{BOLD}{:<5}{:<11}{:<14}{:<8}{:<14}{}{RESET}",
        "ID", "Date", "Time", "Type", "Seats", "Title"
    );
    for session in sessions {
        let row = format_session_row(session, width);
        println!("{}{}{RESET}", seats_color(session), row);
    }
    println!();
    println!("{GRAY}{} sessions{RESET}", sessions.len());
}

pub fn print_config(config: &Config, path: &Path) {
    println!("{BLUE}Config file:{RESET} {}", path.display());
    match &config.data_file {
        Some(file) => println!("{BLUE}Data file:{RESET}   {}", file.display()),
        None => println!("{BLUE}Data file:{RESET}   {DIM}(built-in sample){RESET}"),
    }
    println!("{BLUE}Log level:{RESET}   {}", config.log_level);
    println!(
        "{BLUE}Window:{RESET}      {}x{}",
        config.window.width, config.window.height
    );
}

pub fn print_error(msg: &str) {
    eprintln!("{RED}{BOLD}Error:{RESET} {}", msg);
}

pub fn print_warning(msg: &str) {
    eprintln!("{YELLOW}Warning:{RESET} {}", msg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionType;
    use crate::test_utils::session;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long session title", 10), "a long ...");
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
    }

    #[test]
    fn test_seats_label() {
        let open = session(1, "2024-01-10", SessionType::Oral, 20, 5);
        assert_eq!(seats_label(&open), "15/20 free");

        let full = session(2, "2024-01-10", SessionType::Oral, 10, 10);
        assert_eq!(seats_label(&full), "Full");

        let mut cancelled = open.clone();
        cancelled.status = SessionStatus::Cancelled;
        assert_eq!(seats_label(&cancelled), "Cancelled");
    }

    #[test]
    fn test_seats_color() {
        let full = session(1, "2024-01-10", SessionType::Oral, 10, 10);
        assert_eq!(seats_color(&full), RED);
        let open = session(2, "2024-01-10", SessionType::Poster, 10, 2);
        assert_eq!(seats_color(&open), GREEN);
    }

    #[test]
    fn test_format_session_row() {
        let s = session(7, "2024-01-11", SessionType::Poster, 20, 5);
        let row = format_session_row(&s, 80);
        assert!(row.starts_with("#7   2024-01-11 09:00 - 10:30 Poster  15/20 free"));
        assert!(row.ends_with("Session 7"));
    }
}
