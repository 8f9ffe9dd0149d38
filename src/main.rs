mod app;
mod config;
mod directory;
mod export;
mod input;
mod logging;
mod ui;
mod view;

use std::io::{self, IsTerminal, Write};
use std::panic;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info, warn};

use app::App;
use config::Config;
use directory::{Navigator, SizeAggregator};
use export::export_json;
use input::{apply, handle_key, map_char, read_char};

#[derive(Parser, Debug)]
#[command(name = "liberator")]
#[command(version)]
#[command(about = "Browse directories by size and delete what you don't need", long_about = None)]
struct Args {
    /// Directory to start in (default: current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Worker threads for directory sizing (0 = one per CPU)
    #[arg(short, long, default_value_t = 0)]
    workers: usize,

    /// Color scheme: default, dark, light, colorblind
    #[arg(long, default_value = "default")]
    color_scheme: String,

    /// Disable colors
    #[arg(long)]
    no_color: bool,

    /// Print the directory listing as JSON instead of opening the browser
    #[arg(long)]
    json: bool,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn into_config(self) -> Config {
        Config::new(self.path)
            .with_workers(self.workers)
            .with_color_scheme(self.color_scheme, self.no_color)
            .with_json(self.json)
            .with_logging(self.log_file, self.log_level)
    }
}

fn main() -> Result<()> {
    let config = Args::parse().into_config().resolve()?;
    logging::init(config.log_file.as_deref(), &config.log_level)?;

    let aggregator = SizeAggregator::new(config.workers)?;
    info!(
        path = %config.start_path.display(),
        workers = aggregator.workers(),
        "starting"
    );

    // JSON mode - no TUI
    if config.json {
        let mut stdout = io::stdout();
        export_json(&config.start_path, &aggregator, &mut stdout)?;
        println!(); // Final newline
        return Ok(());
    }

    let navigator = Navigator::new(&config.start_path, aggregator)?;

    // Piped keystrokes drive the navigator without a terminal
    if !io::stdin().is_terminal() {
        return run_piped_mode(navigator);
    }

    let result = run_tui_mode(App::new(navigator, config.colors()));

    if let Err(ref e) = result {
        error!(error = %e, "exited with error");
    }
    result
}

/// Apply one command per character read from stdin, then print the final
/// listing. Failed commands are reported on stderr and the session goes on.
fn run_piped_mode(mut navigator: Navigator) -> Result<()> {
    let mut stdin = io::stdin().lock();

    while let Some(c) = read_char(&mut stdin) {
        match apply(map_char(c), &mut navigator) {
            Ok(true) => break,
            Ok(false) => {}
            Err(e) => {
                warn!(key = ?c, error = %e, "command failed");
                eprintln!("liberator: {}", e);
            }
        }
    }

    let (rows, status) = navigator.view(navigator.entries().len());
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", status)?;
    for row in rows {
        let marker = if row.highlighted { '>' } else { ' ' };
        writeln!(stdout, "{} {:>9}  {}", marker, row.size, row.name)?;
    }
    Ok(())
}

fn run_tui_mode(mut app: App) -> Result<()> {
    // Set up panic handler to restore terminal on crash
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal before reporting any loop error
    let cleanup_result = cleanup_terminal(&mut terminal);
    result.and(cleanup_result)
}

/// Clean up terminal state.
fn cleanup_terminal<B: ratatui::backend::Backend + Write>(terminal: &mut Terminal<B>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Draw, then block on exactly one input event, until quit.
fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render_ui(frame, app))?;

        // Resize and other events just fall through to a redraw
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_command(handle_key(key));
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
