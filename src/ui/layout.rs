//! Single-column layout: prompt, results, status.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{MARGIN_X, MIN_RESULT_LINES, PROMPT_HEIGHT, STATUS_HEIGHT};

#[derive(Clone, Debug)]
pub struct LayoutRegions {
    pub prompt: Rect,
    pub results: Rect,
    pub status: Rect,
}

pub fn compute(area: Rect) -> LayoutRegions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(PROMPT_HEIGHT),
            Constraint::Min(MIN_RESULT_LINES),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);
    let results = Rect {
        x: area.x + MARGIN_X,
        y: chunks[1].y,
        width: area.width.saturating_sub(2 * MARGIN_X),
        height: chunks[1].height,
    };
    LayoutRegions {
        prompt: chunks[0],
        results,
        status: chunks[2],
    }
}
