//! Result list: ranked programs, matched characters emphasized, accent bar on the selection.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::highlight::{annotate, HighlightToken};
use crate::ranker::RankedEntry;
use crate::state::AppState;
use crate::ui::theme::{colors, SELECTION_BAR};

pub fn render(f: &mut Frame, state: &AppState, area: ratatui::prelude::Rect) {
    let block = Block::default().style(Style::default().bg(colors::BG));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if state.matches.is_empty() {
        let hint = if state.query.is_empty() { "Type to search" } else { "No matches" };
        f.render_widget(Paragraph::new(Span::styled(hint, Style::default().fg(colors::MUTED))), inner);
        return;
    }

    let height = (inner.height as usize).max(1);
    // Keep the selection on screen.
    let offset = state.selected_index.saturating_sub(height - 1);
    let lines: Vec<Line> = state
        .matches
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .map(|(i, ranked)| row(state, ranked, i == state.selected_index))
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}

fn row<'a>(state: &AppState, ranked: &'a RankedEntry, selected: bool) -> Line<'a> {
    let base = if selected {
        Style::default().fg(colors::TEXT).bg(colors::ACCENT_GLOW)
    } else {
        Style::default().fg(colors::TEXT_DIM)
    };
    let mut spans = vec![Span::styled(
        if selected { SELECTION_BAR } else { "  " },
        Style::default().fg(colors::ACCENT),
    )];

    let display = ranked.entry.display_name.as_str();
    match annotate(display, state.highlight_query(ranked)) {
        Ok(tokens) => spans.extend(emphasis_spans(&tokens, base)),
        Err(err) => {
            tracing::warn!(%err, "drawing row without highlight");
            spans.push(Span::styled(display, base));
        }
    }

    if !ranked.matched_display_name {
        spans.push(Span::styled(
            format!("  {}", ranked.entry.identifier),
            Style::default().fg(colors::MUTED),
        ));
    }
    let line = Line::from(spans);
    if selected {
        line.style(Style::default().bg(colors::ACCENT_GLOW))
    } else {
        line
    }
}

/// Collapse runs of equally emphasized characters into spans.
fn emphasis_spans<'a>(tokens: &[HighlightToken], base: Style) -> Vec<Span<'a>> {
    let emphasis = base.fg(colors::ACCENT).add_modifier(Modifier::BOLD);
    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_emphasized = false;
    for token in tokens {
        if token.emphasized != run_emphasized && !run.is_empty() {
            let style = if run_emphasized { emphasis } else { base };
            spans.push(Span::styled(std::mem::take(&mut run), style));
        }
        run_emphasized = token.emphasized;
        run.push(token.text);
    }
    if !run.is_empty() {
        spans.push(Span::styled(run, if run_emphasized { emphasis } else { base }));
    }
    spans
}
