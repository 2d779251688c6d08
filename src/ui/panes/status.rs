//! Status bar rendering with keybindings and state indicators

use crate::playback::PlaybackMode;
use crate::snapshot::PhaseTag;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Duration;

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    /// `(position + 1, length)`, `None` when nothing is loaded
    pub progress: Option<(usize, usize)>,
    pub phase: Option<PhaseTag>,
    pub mode: PlaybackMode,
    pub pacing: Duration,
    pub random_count: usize,
    pub is_editing: bool,
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let step_text = match data.progress {
        Some((current, total)) => format!(" Step {}/{} ", current, total),
        None => " Step -/- ".to_string(),
    };
    let phase_color = match data.phase {
        Some(PhaseTag::Building) => DEFAULT_THEME.inserted,
        Some(PhaseTag::HeapComplete) => DEFAULT_THEME.compared,
        Some(PhaseTag::Sorting) => DEFAULT_THEME.swapped,
        Some(PhaseTag::Done) => DEFAULT_THEME.sorted,
        None => DEFAULT_THEME.comment,
    };
    let bar = Style::default().bg(DEFAULT_THEME.status_bg);

    let mut left_spans = vec![Span::styled(
        step_text,
        Style::default()
            .bg(DEFAULT_THEME.primary)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(phase) = data.phase {
        left_spans.push(Span::styled(
            format!(" {} ", phase),
            Style::default()
                .bg(phase_color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }
    left_spans.push(Span::styled(" | ", bar.fg(DEFAULT_THEME.comment)));
    left_spans.push(Span::styled(
        format!(" {} ", data.message),
        bar.fg(DEFAULT_THEME.fg),
    ));

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(bar)
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = bar.fg(DEFAULT_THEME.fg);
    let sep_style = bar.fg(DEFAULT_THEME.comment);

    let mut right_spans = vec![
        Span::styled(" ←/→ ", key_style),
        Span::styled(" step ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ⎵ ", key_style),
        Span::styled(" play ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" +/- ", key_style),
        Span::styled(format!(" {:.1}s ", data.pacing.as_secs_f64()), desc_style),
        Span::styled("│", sep_style),
        Span::styled(" e ", key_style),
        Span::styled(" edit ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" r ", key_style),
        Span::styled(format!(" random({}) ", data.random_count), desc_style),
        Span::styled("│", sep_style),
        Span::styled(" q ", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let is_at_start = data.progress.is_some_and(|(current, _)| current == 1);
    let is_at_end = data
        .progress
        .is_some_and(|(current, total)| current >= total);

    let indicator = if data.is_editing {
        Some((" ⌨ INPUT ", DEFAULT_THEME.secondary))
    } else if data.mode == PlaybackMode::AutoPlaying {
        Some((" ▶ PLAYING ", DEFAULT_THEME.secondary))
    } else if is_at_end {
        Some((" END ", DEFAULT_THEME.error))
    } else if is_at_start {
        Some((" START ", DEFAULT_THEME.success))
    } else {
        None
    };
    if let Some((label, color)) = indicator {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            label,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(bar)
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
