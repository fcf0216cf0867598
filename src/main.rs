//! seminar CLI entry point.
//!
//! Parses command-line arguments and dispatches to the appropriate command handler.

use clap::{Parser, Subcommand};
use seminar_desk::commands::{config_command, gui_command, list_command, tui_command};
use seminar_desk::config::{load_config, Config};
use seminar_desk::logging;
use seminar_desk::output::print_error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "seminar")]
#[command(
    version,
    about = "Browse seminar sessions, register, and review assignments",
    after_help = "EXAMPLES:
    seminar                                 # Open the window as a guest
    seminar --user student                  # Open the window logged in
    seminar tui --data seminar.json         # Browse in the terminal
    seminar list --date 2024-01-10 --type Oral"
)]
struct Cli {
    /// Seminar data file (overrides `data_file` in the config)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Log in as this account when the window opens
    #[arg(short, long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the desktop window (default)
    Gui,

    /// Browse the schedule in the terminal
    #[command(after_help = "KEYS:
    j/k or arrows   move the selection
    d / t           cycle the date / type filter
    Esc             clear the selection
    r               reload the schedule
    q               quit")]
    Tui,

    /// Print the schedule, optionally filtered
    List {
        /// Day as YYYY-MM-DD, or "All Dates"
        #[arg(long)]
        date: Option<String>,

        /// Oral, Poster, or "All Types"
        #[arg(long = "type")]
        session_type: Option<String>,
    },

    /// Show the effective configuration
    Config,
}

fn run(cli: Cli) -> seminar_desk::Result<()> {
    let config: Config = load_config()?.with_data_file(cli.data);

    // The TUI owns the terminal; logging to stderr would corrupt the screen.
    if !matches!(cli.command, Some(Commands::Tui)) {
        logging::init(&config.log_level)?;
    }

    match cli.command {
        None | Some(Commands::Gui) => gui_command(&config, cli.user.as_deref()),
        Some(Commands::Tui) => tui_command(&config),
        Some(Commands::List { date, session_type }) => {
            list_command(&config, date.as_deref(), session_type.as_deref())
        }
        Some(Commands::Config) => config_command(&config),
    }
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
