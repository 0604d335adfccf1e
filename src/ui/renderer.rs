//! Single-panel render: prompt, result list, status bar.

use ratatui::Frame;

use crate::app::App;
use crate::ui::layout;
use crate::ui::widgets::{render_input, render_results, render_status};

pub fn render(f: &mut Frame, app: &App) {
    let regions = layout::compute(f.area());

    render_input(f, &app.state.query, regions.prompt);
    render_results(f, &app.state, regions.results);
    render_status(f, &app.state, app.catalog.len(), regions.status);
}
