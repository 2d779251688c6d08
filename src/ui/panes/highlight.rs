// Per-index highlight roles shared by the tree and array panes

use crate::snapshot::{PhaseTag, Step, StepAction};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Color, Modifier, Style};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Inserted,
    Compared,
    Swapped,
    Sorted,
}

impl Highlight {
    fn color(self) -> Color {
        match self {
            Highlight::Inserted => DEFAULT_THEME.inserted,
            Highlight::Compared => DEFAULT_THEME.compared,
            Highlight::Swapped => DEFAULT_THEME.swapped,
            Highlight::Sorted => DEFAULT_THEME.sorted,
        }
    }
}

pub type HighlightMap = FxHashMap<usize, Highlight>;

/// Work out which indices of `step` deserve attention
pub fn highlights_for(step: &Step, phase: PhaseTag) -> HighlightMap {
    let mut map = HighlightMap::default();
    let len = step.snapshot.len();

    let sorted_from = if phase == PhaseTag::Done && len > 0 {
        0
    } else {
        step.active_len
    };
    for index in sorted_from..len {
        map.insert(index, Highlight::Sorted);
    }

    if let StepAction::Insert { index } = step.action {
        map.insert(index, Highlight::Inserted);
    }
    for index in step.action.compared() {
        map.insert(index, Highlight::Compared);
    }
    if let Some((a, b)) = step.action.swapped() {
        map.insert(a, Highlight::Swapped);
        map.insert(b, Highlight::Swapped);
    }
    map
}

/// Style for a value cell; `emphasize` is set while its transition is in flight
pub fn style_for(highlight: Option<Highlight>, emphasize: bool) -> Style {
    match highlight {
        None => Style::default().fg(DEFAULT_THEME.node),
        Some(Highlight::Sorted) => Style::default().fg(Highlight::Sorted.color()),
        Some(role) if emphasize => Style::default()
            .fg(Color::Black)
            .bg(role.color())
            .add_modifier(Modifier::BOLD),
        Some(role) => Style::default()
            .fg(role.color())
            .add_modifier(Modifier::BOLD),
    }
}
