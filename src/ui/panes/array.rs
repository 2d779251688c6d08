//! Array and input panes
//!
//! The array pane shows the working array as indexed cells with the step
//! description underneath. The input pane lists values that have not been
//! inserted into the heap yet, or the edit buffer while the user is typing.

use super::highlight::{style_for, HighlightMap};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Data needed to render the array pane
pub struct ArrayRenderData<'a> {
    pub values: &'a [i32],
    pub highlights: &'a HighlightMap,
    pub animating: bool,
    pub description: String,
}

/// Render the array pane
pub fn render_array_pane(frame: &mut Frame, area: Rect, data: Option<ArrayRenderData>) {
    let block = Block::default()
        .title(" Array ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let Some(data) = data else {
        let paragraph = Paragraph::new("(no array loaded)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let cell_width = data
        .values
        .iter()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1)
        .max(2)
        + 2;

    let mut value_spans = Vec::new();
    let mut index_spans = Vec::new();
    for (index, value) in data.values.iter().enumerate() {
        let style = style_for(data.highlights.get(&index).copied(), data.animating);
        value_spans.push(Span::styled(
            format!("{:^width$}", value, width = cell_width),
            style,
        ));
        value_spans.push(Span::raw(" "));
        index_spans.push(Span::styled(
            format!("{:^width$}", index, width = cell_width),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
        index_spans.push(Span::raw(" "));
    }

    let lines = vec![
        Line::from(value_spans),
        Line::from(index_spans),
        Line::from(Span::styled(
            data.description,
            Style::default().fg(DEFAULT_THEME.fg),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the pending input pane, or the edit box when `edit_buffer` is set
pub fn render_input_pane(
    frame: &mut Frame,
    area: Rect,
    pending: &[i32],
    loaded: bool,
    edit_buffer: Option<&str>,
) {
    if let Some(buffer) = edit_buffer {
        let block = Block::default()
            .title(" Numbers (↵ sort, Esc cancel) ")
            .borders(Borders::ALL)
            .border_style(
                Style::default()
                    .fg(DEFAULT_THEME.border_focused)
                    .add_modifier(Modifier::BOLD),
            );
        let line = Line::from(vec![
            Span::styled(buffer.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled("█", Style::default().fg(DEFAULT_THEME.secondary)),
        ]);
        frame.render_widget(Paragraph::new(line).block(block), area);
        return;
    }

    let block = Block::default()
        .title(" Waiting to insert ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let line = if !loaded {
        Line::from(Span::styled(
            "(nothing queued)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))
    } else if pending.is_empty() {
        Line::from(Span::styled(
            "(all values inserted)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))
    } else {
        let mut spans = Vec::new();
        for (i, value) in pending.iter().enumerate() {
            let style = if i == 0 {
                Style::default()
                    .fg(DEFAULT_THEME.inserted)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            spans.push(Span::styled(value.to_string(), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    };
    frame.render_widget(Paragraph::new(line).block(block), area);
}
