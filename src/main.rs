// heapstep: step-by-step heap sort in the terminal

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use heapstep::config::{Cli, DEFAULT_RANDOM_COUNT};
use heapstep::playback::PlaybackController;
use heapstep::snapshot::{generate, StepSequence};
use heapstep::ui::App;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.dump {
        init_tracing_to_stderr();
    } else if let Some(path) = cli.log_file.as_deref() {
        init_tracing_to_file(path)?;
    }

    let pacing = cli.pacing()?;
    let mut rng = cli.rng();
    let initial = cli.initial_values(&mut rng)?;

    if cli.dump {
        let values = initial.unwrap_or_default();
        print_steps(&generate(&values));
        return Ok(());
    }

    let controller = PlaybackController::new(pacing)?;
    let random_count = cli.random.unwrap_or(DEFAULT_RANDOM_COUNT);
    let mut app = App::new(controller, rng, random_count);
    if let Some(values) = initial {
        app.load_values(&values);
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("terminal UI failed")
}

fn init_tracing_to_stderr() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn init_tracing_to_file(path: &Path) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

fn print_steps(sequence: &StepSequence) {
    println!(
        "{} steps, heap complete at step {}",
        sequence.len(),
        sequence.heap_complete_index()
    );
    for (index, step) in sequence.iter().enumerate() {
        let phase = sequence
            .phase_at(index)
            .map(|phase| phase.to_string())
            .unwrap_or_default();
        println!(
            "{:>4}  {:<13}  {:<40}  {}",
            index,
            phase,
            step.snapshot.to_string(),
            step.action
        );
    }
}
