//! TUI widgets: prompt, result list, status.

mod input;
mod results;
mod status;

pub use input::render as render_input;
pub use results::render as render_results;
pub use status::render as render_status;
