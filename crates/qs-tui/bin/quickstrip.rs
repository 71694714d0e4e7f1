//! quickstrip simulation
//!
//! Main entry point for the terminal frontend.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use qs_core::lang::Lang;
use qs_tui::App;

/// Armor and light quick-toggles, driven against a simulated game client.
#[derive(Parser, Debug)]
#[command(name = "quickstrip")]
#[command(author, version, about = "quickstrip - equipment toggle simulation", long_about = None)]
struct Args {
    /// Settings file (defaults to the user config directory)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Translation override file (JSON table)
    #[arg(short = 'l', long = "lang")]
    lang: Option<PathBuf>,

    /// Seed for the simulated damage rolls
    #[arg(short = 's', long = "seed", default_value_t = 7)]
    seed: u64,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let config_path = args
        .config
        .unwrap_or_else(qs_config::default_config_path);
    let config = qs_config::load_or_default(&config_path);

    // A broken translation file falls back to the built-in strings.
    let lang = args
        .lang
        .and_then(|path| Lang::from_file(path).ok())
        .unwrap_or_default();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, lang, args.seed);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| app.draw(frame))?;
        if event::poll(Duration::from_millis(100))? {
            app.handle_event(event::read()?);
        }
    }
    Ok(())
}
