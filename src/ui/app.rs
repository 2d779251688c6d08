//! Main TUI application state and logic

use super::animator::TransitionAnimator;
use super::panes::{self, highlights_for, ArrayRenderData, StatusRenderData, TreeRenderData};
use crate::input::{self, MAX_VALUES};
use crate::playback::{PlaybackController, PlaybackError, PlaybackMode, StepOutcome};
use crate::snapshot::{generate, PhaseTag};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// How often the event loop wakes up to pump the auto-play timer
const POLL_INTERVAL: Duration = Duration::from_millis(50);
const SPACE_DEBOUNCE: Duration = Duration::from_millis(200);

const PACING_STEP: Duration = Duration::from_millis(100);
const MIN_PACING: Duration = Duration::from_millis(100);
const MAX_PACING: Duration = Duration::from_secs(3);

/// The main application state
pub struct App {
    /// Playback over the current step sequence
    pub controller: PlaybackController,

    /// Shared with the controller as an observer
    animator: Rc<RefCell<TransitionAnimator>>,

    rng: StdRng,

    /// Size of arrays produced by `r`
    pub random_count: usize,

    /// Edit buffer while the user is typing numbers
    pub editing: Option<String>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(mut controller: PlaybackController, rng: StdRng, random_count: usize) -> Self {
        let animator = Rc::new(RefCell::new(TransitionAnimator::new(
            controller.pacing() / 2,
        )));
        controller.subscribe(Box::new(Rc::clone(&animator)));

        App {
            controller,
            animator,
            rng,
            random_count: random_count.clamp(1, MAX_VALUES),
            editing: None,
            should_quit: false,
            status_message: String::from("Press e to enter numbers or r for a random array"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Generate the steps for `values` and start over at the first one
    pub fn load_values(&mut self, values: &[i32]) {
        let sequence = generate(values);
        info!(
            values = values.len(),
            steps = sequence.len(),
            "sorting new array"
        );
        self.status_message = format!(
            "Loaded {} values, {} steps",
            values.len(),
            sequence.len()
        );
        self.controller.load(sequence);
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.pump(Instant::now());

            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Finish due transitions and let the controller advance auto-play
    fn pump(&mut self, now: Instant) {
        let finished = self.animator.borrow_mut().take_finished(now);
        if let Some(token) = finished {
            self.controller.complete_transition(token, now);
        }

        let was_playing = self.controller.mode() == PlaybackMode::AutoPlaying;
        if self.controller.tick(now) {
            self.status_message = "Playing...".to_string();
        }
        if was_playing && self.controller.mode() == PlaybackMode::Ready {
            self.status_message = "Playback complete".to_string();
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Tree on top, then array, input queue and status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(6),
                Constraint::Length(5),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(size);

        let animating = self.animator.borrow().is_animating();
        let phase = self.controller.current_phase();
        let step = self.controller.current_step();
        let highlights = match (step, phase) {
            (Some(step), Some(phase)) => highlights_for(step, phase),
            _ => Default::default(),
        };

        let title = phase.map(|p| format!("Heap · {}", p));
        panes::render_tree_pane(
            frame,
            chunks[0],
            step.map(|step| TreeRenderData {
                values: &step.snapshot,
                highlights: &highlights,
                animating,
                title: title.as_deref().unwrap_or("Heap"),
            }),
        );

        panes::render_array_pane(
            frame,
            chunks[1],
            step.map(|step| ArrayRenderData {
                values: &step.snapshot,
                highlights: &highlights,
                animating,
                description: step.action.to_string(),
            }),
        );

        // Values not yet appended to the heap
        let pending: &[i32] = match (self.controller.sequence(), step) {
            (Some(sequence), Some(step)) if phase == Some(PhaseTag::Building) => {
                sequence
                    .input()
                    .get(step.snapshot.len()..)
                    .unwrap_or_default()
            }
            _ => &[],
        };
        panes::render_input_pane(
            frame,
            chunks[2],
            pending,
            step.is_some(),
            self.editing.as_deref(),
        );

        panes::render_status_bar(
            frame,
            chunks[3],
            StatusRenderData {
                message: &self.status_message,
                progress: self.controller.progress(),
                phase,
                mode: self.controller.mode(),
                pacing: self.controller.pacing(),
                random_count: self.random_count,
                is_editing: self.editing.is_some(),
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.editing.is_some() {
            self.handle_edit_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Right | KeyCode::Char('l') => {
                let result = self.controller.step_forward();
                self.report(result, "Stepped forward");
            }
            KeyCode::Left | KeyCode::Char('h') => {
                let result = self.controller.step_backward();
                self.report(result, "Stepped backward");
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                let n = c.to_digit(10).unwrap_or(1);
                let mut stepped = 0;
                for _ in 0..n {
                    match self.controller.step_forward() {
                        Ok(StepOutcome::Moved { .. }) => stepped += 1,
                        _ => break,
                    }
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
            KeyCode::Char(' ') if self.last_space_press.elapsed() >= SPACE_DEBOUNCE => {
                self.last_space_press = Instant::now();
                self.toggle_auto_play();
            }
            KeyCode::Enter => {
                let result = self.controller.jump_to_end();
                self.report(result, "Jumped to end");
            }
            KeyCode::Backspace => {
                let result = self.controller.jump_to_start();
                self.report(result, "Jumped to start");
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let pacing = self
                    .controller
                    .pacing()
                    .saturating_sub(PACING_STEP)
                    .max(MIN_PACING);
                self.set_pacing(pacing);
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                let pacing = (self.controller.pacing() + PACING_STEP).min(MAX_PACING);
                self.set_pacing(pacing);
            }
            KeyCode::Char('[') => {
                self.random_count = self.random_count.saturating_sub(1).max(1);
                self.status_message = format!("Random arrays: {} values", self.random_count);
            }
            KeyCode::Char(']') => {
                self.random_count = (self.random_count + 1).min(MAX_VALUES);
                self.status_message = format!("Random arrays: {} values", self.random_count);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                match input::random_values_with(&mut self.rng, self.random_count) {
                    Ok(values) => self.load_values(&values),
                    Err(e) => self.status_message = e.to_string(),
                }
            }
            KeyCode::Char('e') | KeyCode::Char('i') => {
                self.controller.stop_auto_play();
                let current = self
                    .controller
                    .sequence()
                    .map(|sequence| input::format_values(sequence.input()))
                    .unwrap_or_default();
                self.editing = Some(current);
            }
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        let Some(buffer) = self.editing.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => {
                self.editing = None;
                self.status_message = "Edit cancelled".to_string();
            }
            KeyCode::Enter => match input::parse_values(buffer) {
                Ok(values) => {
                    self.editing = None;
                    self.load_values(&values);
                }
                Err(e) => {
                    debug!(error = %e, "rejected input");
                    self.status_message = e.to_string();
                }
            },
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() || matches!(c, '-' | ' ' | ',') => {
                buffer.push(c);
            }
            _ => {}
        }
    }

    fn toggle_auto_play(&mut self) {
        match self.controller.toggle_auto_play(Instant::now()) {
            Ok(true) => self.status_message = "Playing...".to_string(),
            Ok(false) if self.controller.mode() == PlaybackMode::Ready => {
                self.status_message = if self.controller.progress().is_some_and(|(c, t)| c >= t) {
                    "Already at the last step".to_string()
                } else {
                    "Paused".to_string()
                };
            }
            Ok(false) => {}
            Err(e) => self.status_message = not_loaded_message(&e),
        }
    }

    fn set_pacing(&mut self, pacing: Duration) {
        match self.controller.set_pacing(pacing) {
            Ok(()) => {
                self.animator.borrow_mut().set_duration(pacing / 2);
                self.status_message = format!("Pacing {:.1}s", pacing.as_secs_f64());
            }
            Err(e) => self.status_message = e.to_string(),
        }
    }

    fn report(&mut self, result: Result<StepOutcome, PlaybackError>, moved: &str) {
        self.status_message = match result {
            Ok(StepOutcome::Moved { .. }) => moved.to_string(),
            Ok(StepOutcome::Saturated) => "Nothing further in that direction".to_string(),
            Ok(StepOutcome::Suppressed) => "Stop auto-play (space) to step manually".to_string(),
            Err(e) => not_loaded_message(&e),
        };
    }
}

fn not_loaded_message(error: &PlaybackError) -> String {
    format!("{}: press e to enter numbers or r for random", error)
}
