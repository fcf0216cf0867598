//! Terminal schedule browser.
//!
//! A read-only master/detail view over the session store with keyboard-driven
//! filters. Shares its state model with the GUI schedule panel.

use crate::error::Result;
use crate::store::SessionStore;
use crate::ui::shared::{
    AvailabilityStyle, BrowseScope, CapacityStyle, DetailContent, ScheduleBrowser, SessionCard,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;

// ============================================================================
// Color Constants (consistent with the list command output)
// ============================================================================

/// Headers and highlights
const COLOR_PRIMARY: Color = Color::Cyan;
/// Open seats
const COLOR_SUCCESS: Color = Color::Green;
/// Selected row
const COLOR_WARNING: Color = Color::Yellow;
/// Full sessions
const COLOR_ERROR: Color = Color::Red;
/// Secondary text
const COLOR_DIM: Color = Color::DarkGray;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn capacity_color(style: CapacityStyle) -> Color {
    match style {
        CapacityStyle::Neutral => Color::White,
        CapacityStyle::Danger => COLOR_ERROR,
    }
}

fn availability_color(style: AvailabilityStyle) -> Color {
    match style {
        AvailabilityStyle::Success => COLOR_SUCCESS,
        AvailabilityStyle::Danger => COLOR_ERROR,
    }
}

/// The option after `current` in `options`, wrapping around.
fn next_option<'a>(options: &'a [String], current: &str) -> Option<&'a str> {
    if options.is_empty() {
        return None;
    }
    let next = options
        .iter()
        .position(|o| o == current)
        .map_or(0, |i| (i + 1) % options.len());
    Some(options[next].as_str())
}

/// State of the terminal browser.
pub struct ScheduleTui<'a> {
    store: &'a dyn SessionStore,
    browser: ScheduleBrowser,
    should_quit: bool,
}

impl<'a> ScheduleTui<'a> {
    pub fn new(store: &'a dyn SessionStore) -> Self {
        Self {
            store,
            browser: ScheduleBrowser::new(BrowseScope::All, store),
            should_quit: false,
        }
    }

    pub fn browser(&self) -> &ScheduleBrowser {
        &self.browser
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.browser.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.browser.select_next(),
            KeyCode::Esc => self.browser.clear_selection(),
            KeyCode::Char('d') => self.cycle_date(),
            KeyCode::Char('t') => self.cycle_type(),
            KeyCode::Char('r') => self.browser.reload(self.store),
            _ => {}
        }
    }

    fn cycle_date(&mut self) {
        let options = self.browser.date_options();
        let current = self.browser.criteria().date_label();
        if let Some(next) = next_option(&options, &current) {
            let next = next.to_string();
            self.browser.set_date_label(&next);
        }
    }

    fn cycle_type(&mut self) {
        let options: Vec<String> = self
            .browser
            .type_options()
            .into_iter()
            .map(String::from)
            .collect();
        let current = self.browser.criteria().type_label();
        if let Some(next) = next_option(&options, current) {
            let next = next.to_string();
            self.browser.set_type_label(&next);
        }
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Filters
                Constraint::Min(0),    // List and detail
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        self.render_header(frame, chunks[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(chunks[1]);
        self.render_list(frame, columns[0]);
        self.render_detail(frame, columns[1]);
        self.render_footer(frame, chunks[2]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let criteria = self.browser.criteria();
        let line = Line::from(vec![
            Span::styled("Date: ", Style::default().fg(COLOR_DIM)),
            Span::styled(criteria.date_label(), Style::default().fg(Color::White)),
            Span::styled("  Type: ", Style::default().fg(COLOR_DIM)),
            Span::styled(criteria.type_label(), Style::default().fg(Color::White)),
            Span::styled(
                format!(
                    "  ({} of {})",
                    self.browser.list().sessions().len(),
                    self.browser.total()
                ),
                Style::default().fg(COLOR_DIM),
            ),
        ]);
        let header = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Seminar schedule ")
                .border_style(Style::default().fg(COLOR_PRIMARY)),
        );
        frame.render_widget(header, area);
    }

    fn card_line(card: &SessionCard) -> Line<'static> {
        let name_style = if card.is_selected {
            Style::default()
                .fg(COLOR_WARNING)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        Line::from(vec![
            Span::styled(
                if card.is_selected { "▶ " } else { "  " },
                Style::default().fg(COLOR_PRIMARY),
            ),
            Span::styled(format!("{} {} ", card.date, card.time), Style::default().fg(COLOR_DIM)),
            Span::styled(card.title.clone(), name_style),
            Span::styled(
                format!("  {}", card.remaining_label()),
                Style::default().fg(capacity_color(card.capacity_style)),
            ),
        ])
    }

    fn render_list(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title(" Sessions ");
        if let Some(message) = self.browser.list().placeholder() {
            let paragraph = Paragraph::new(message)
                .style(Style::default().fg(COLOR_DIM))
                .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let items: Vec<ListItem> = self
            .browser
            .list()
            .cards()
            .iter()
            .map(|card| ListItem::new(Self::card_line(card)))
            .collect();
        frame.render_widget(List::new(items).block(block), area);
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title(" Details ");
        let details = match self.browser.detail().content() {
            DetailContent::Placeholder(message) => {
                let paragraph = Paragraph::new(*message)
                    .style(Style::default().fg(COLOR_DIM))
                    .block(block);
                frame.render_widget(paragraph, area);
                return;
            }
            DetailContent::Details(details) => details,
        };

        let mut lines = vec![
            Line::from(Span::styled(
                details.title.clone(),
                Style::default()
                    .fg(COLOR_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for (label, value) in details.rows() {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<12}", label), Style::default().fg(COLOR_DIM)),
                Span::raw(value),
            ]));
        }
        lines.push(Line::from(vec![
            Span::styled(format!("{:<12}", "Available"), Style::default().fg(COLOR_DIM)),
            Span::styled(
                details.available.to_string(),
                Style::default()
                    .fg(availability_color(details.availability_style))
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        if let Some(description) = &details.description {
            lines.push(Line::from(""));
            lines.push(Line::from(description.clone()));
        }

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let help = " jk/↑↓: select | Esc: clear | d: date | t: type | r: reload | Q: quit ";
        let footer = Paragraph::new(help).style(Style::default().fg(COLOR_DIM));
        frame.render_widget(footer, area);
    }
}

/// Initialize the terminal for TUI mode.
pub fn init_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restore the terminal to normal mode.
pub fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the terminal browser until the user quits.
pub fn run_tui(store: &dyn SessionStore) -> Result<()> {
    // Restore the terminal if anything panics while in raw mode.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let mut terminal = init_terminal()?;
    let mut app = ScheduleTui::new(store);

    let outcome = event_loop(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;
    outcome
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut ScheduleTui<'_>,
) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Ignore release and repeat events
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SessionId, SessionType};
    use crate::store::{sample_sessions, InMemorySessionStore};
    use ratatui::backend::TestBackend;

    fn store() -> InMemorySessionStore {
        InMemorySessionStore::new(sample_sessions()).unwrap()
    }

    #[test]
    fn test_next_option_wraps() {
        let options = vec!["a".to_string(), "b".to_string()];
        assert_eq!(next_option(&options, "a"), Some("b"));
        assert_eq!(next_option(&options, "b"), Some("a"));
        assert_eq!(next_option(&options, "zzz"), Some("a"));
        assert_eq!(next_option(&[], "a"), None);
    }

    #[test]
    fn test_arrow_keys_move_selection() {
        let store = store();
        let mut app = ScheduleTui::new(&store);
        app.handle_key(KeyCode::Down);
        let first = app.browser().list().selected();
        assert!(first.is_some());
        app.handle_key(KeyCode::Char('j'));
        assert_ne!(app.browser().list().selected(), first);
        app.handle_key(KeyCode::Up);
        assert_eq!(app.browser().list().selected(), first);
        app.handle_key(KeyCode::Esc);
        assert_eq!(app.browser().list().selected(), None);
    }

    #[test]
    fn test_date_key_cycles_through_days() {
        let store = store();
        let mut app = ScheduleTui::new(&store);
        app.handle_key(KeyCode::Char('d'));
        assert_eq!(app.browser().criteria().date_label(), "2024-01-10");
        assert!(app
            .browser()
            .list()
            .sessions()
            .iter()
            .all(|s| s.date.to_string() == "2024-01-10"));

        for _ in 0..3 {
            app.handle_key(KeyCode::Char('d'));
        }
        assert!(app.browser().criteria().date.is_none());
    }

    #[test]
    fn test_type_key_cycles_through_types() {
        let store = store();
        let mut app = ScheduleTui::new(&store);
        app.handle_key(KeyCode::Char('t'));
        assert_eq!(app.browser().criteria().session_type, Some(SessionType::Oral));
        app.handle_key(KeyCode::Char('t'));
        assert_eq!(app.browser().criteria().session_type, Some(SessionType::Poster));
        app.handle_key(KeyCode::Char('t'));
        assert_eq!(app.browser().criteria().session_type, None);
    }

    #[test]
    fn test_reload_resets_filters() {
        let store = store();
        let mut app = ScheduleTui::new(&store);
        app.handle_key(KeyCode::Char('t'));
        app.handle_key(KeyCode::Char('r'));
        assert!(app.browser().criteria().is_unconstrained());
    }

    #[test]
    fn test_quit() {
        let store = store();
        let mut app = ScheduleTui::new(&store);
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_render_shows_placeholder_and_details() {
        let store = store();
        let mut app = ScheduleTui::new(&store);
        let mut terminal = Terminal::new(TestBackend::new(160, 30)).unwrap();

        terminal.draw(|frame| app.render(frame)).unwrap();
        let screen = format!("{:?}", terminal.backend().buffer());
        assert!(screen.contains("Select a session to view details"));

        app.browser.select(SessionId(1));
        terminal.draw(|frame| app.render(frame)).unwrap();
        let screen = format!("{:?}", terminal.backend().buffer());
        assert!(screen.contains("Opening Keynote"));
        assert!(screen.contains("Full"));
    }
}
