//! Heap tree pane
//!
//! Draws the working array as a binary tree: one text row per level plus a
//! connector row between levels. Node `i` sits at level `floor(log2(i + 1))`
//! and is centred in its horizontal slot, so children always fall below
//! their parent.

use super::highlight::{style_for, HighlightMap};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Data needed to render the tree pane
pub struct TreeRenderData<'a> {
    pub values: &'a [i32],
    pub highlights: &'a HighlightMap,
    pub animating: bool,
    pub title: &'a str,
}

/// Render the heap tree pane
pub fn render_tree_pane(frame: &mut Frame, area: Rect, data: Option<TreeRenderData>) {
    let title = data
        .as_ref()
        .map(|d| format!(" {} ", d.title))
        .unwrap_or_else(|| " Heap ".to_string());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let Some(data) = data else {
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from("  (no array loaded)"),
            Line::from(""),
            Line::from("  Press e to type numbers or r for a random array."),
        ])
        .block(block)
        .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    if data.values.is_empty() {
        let paragraph = Paragraph::new("(empty heap)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let width = area.width.saturating_sub(2) as usize; // borders
    let lines = tree_lines(data.values, width, data.highlights, data.animating);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Number of tree levels needed for `len` nodes
fn depth(len: usize) -> usize {
    (usize::BITS - len.leading_zeros()) as usize
}

/// Column of the centre of node `index` in a row `width` characters wide
fn node_center(index: usize, width: usize) -> usize {
    let level = depth(index + 1) - 1;
    let first_on_level = (1usize << level) - 1;
    let slot = index - first_on_level;
    (2 * slot + 1) * width / (1usize << (level + 1))
}

fn tree_lines(
    values: &[i32],
    width: usize,
    highlights: &HighlightMap,
    animating: bool,
) -> Vec<Line<'static>> {
    let edge_style = Style::default().fg(DEFAULT_THEME.edge);
    let mut lines = Vec::new();

    for level in 0..depth(values.len()) {
        let first = (1usize << level) - 1;
        let last = ((1usize << (level + 1)) - 1).min(values.len());

        let mut nodes = Vec::new();
        let mut edges = Vec::new();
        for index in first..last {
            let label = values[index].to_string();
            let center = node_center(index, width);
            let style = style_for(highlights.get(&index).copied(), animating);
            nodes.push((center.saturating_sub(label.len() / 2), label, style));

            let left = 2 * index + 1;
            let right = 2 * index + 2;
            if left < values.len() {
                let col = (center + node_center(left, width)) / 2;
                edges.push((col, "/".to_string(), edge_style));
            }
            if right < values.len() {
                let col = (center + node_center(right, width)) / 2;
                edges.push((col, "\\".to_string(), edge_style));
            }
        }

        lines.push(place(nodes));
        if !edges.is_empty() {
            lines.push(place(edges));
        }
    }
    lines
}

/// Lay out `(column, text, style)` items on one line, left to right
fn place(mut items: Vec<(usize, String, Style)>) -> Line<'static> {
    items.sort_by_key(|(col, _, _)| *col);
    let mut spans = Vec::new();
    let mut cursor = 0;
    for (col, text, style) in items {
        if col > cursor {
            spans.push(Span::raw(" ".repeat(col - cursor)));
            cursor = col;
        }
        cursor += text.chars().count();
        spans.push(Span::styled(text, style));
    }
    Line::from(spans)
}
