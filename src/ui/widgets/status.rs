//! Status bar: match count or last error, key hints.

use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::state::AppState;
use crate::ui::theme::colors;

const HINTS: &str = " Tab/↑↓ select  Enter launch  ^R reload  Esc quit ";

pub fn render(f: &mut Frame, state: &AppState, catalog_len: usize, area: ratatui::prelude::Rect) {
    let (left, left_style) = match &state.error {
        Some(err) => (format!(" {err}"), Style::default().fg(colors::ERROR)),
        None => (
            format!(" {}/{}", state.matches.len(), catalog_len),
            Style::default().fg(colors::MUTED),
        ),
    };
    let width = area.width as usize;
    let pad = width.saturating_sub(left.chars().count() + HINTS.chars().count());
    let line = Line::from(vec![
        Span::styled(left, left_style),
        Span::raw(" ".repeat(pad)),
        Span::styled(HINTS, Style::default().fg(colors::MUTED)),
    ]);
    let para = Paragraph::new(line).style(Style::default().bg(colors::ELEVATED));
    f.render_widget(para, area);
}
