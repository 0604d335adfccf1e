//! App state: query, ranked matches, selection, status line.

use crate::ranker::RankedEntry;

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub query: String,
    /// Ranked entries for the current query.
    pub matches: Vec<RankedEntry>,
    pub selected_index: usize,
    /// Last error worth showing in the status bar.
    pub error: Option<String>,
}

impl AppState {
    pub fn selected(&self) -> Option<&RankedEntry> {
        self.matches.get(self.selected_index)
    }

    /// Query to highlight `entry` with; empty when only the identifier matched.
    pub fn highlight_query(&self, entry: &RankedEntry) -> &str {
        if entry.matched_display_name {
            &self.query
        } else {
            ""
        }
    }
}
