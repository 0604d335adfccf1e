//! Controller: owns the catalog and UI state, dispatches actions.

use crate::actions::Action;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::launcher;
use crate::ranker;
use crate::state::AppState;

pub struct App {
    pub state: AppState,
    pub catalog: Catalog,
    config: Config,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, catalog: Catalog) -> Self {
        let mut app = Self {
            state: AppState::default(),
            catalog,
            config,
            should_quit: false,
        };
        app.refilter();
        app
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,

            Action::Char(c) => {
                self.state.query.push(c);
                self.state.selected_index = 0;
                self.refilter();
            }
            Action::Backspace => {
                if self.state.query.pop().is_some() {
                    self.refilter();
                }
            }
            Action::DeleteWord => {
                let kept = self.state.query.trim_end().len();
                let cut = self.state.query[..kept]
                    .rfind(char::is_whitespace)
                    .map(|i| i + 1)
                    .unwrap_or(0);
                if cut < self.state.query.len() {
                    self.state.query.truncate(cut);
                    self.refilter();
                }
            }
            Action::ClearQuery => {
                self.state.query.clear();
                self.state.selected_index = 0;
                self.refilter();
            }

            Action::SelectNext => {
                let last = self.state.matches.len().saturating_sub(1);
                self.state.selected_index = (self.state.selected_index + 1).min(last);
            }
            Action::SelectPrev => {
                self.state.selected_index = self.state.selected_index.saturating_sub(1);
            }
            Action::Launch => self.launch_selected(),

            Action::ReloadCatalog => {
                self.catalog = Catalog::load(&self.config);
                self.state.error = None;
                self.refilter();
            }
        }
    }

    /// Re-rank the whole catalog for the current query.
    fn refilter(&mut self) {
        self.state.matches = if !self.state.query.is_empty() {
            ranker::rank(&self.state.query, &self.catalog)
        } else if self.config.list_all_on_empty_query {
            ranker::unfiltered(&self.catalog)
        } else {
            Vec::new()
        };
        let last = self.state.matches.len().saturating_sub(1);
        self.state.selected_index = self.state.selected_index.min(last);
        tracing::debug!(query = %self.state.query, matches = self.state.matches.len(), "refiltered");
    }

    fn launch_selected(&mut self) {
        let Some(selected) = self.state.selected() else {
            return;
        };
        match launcher::launch(&selected.entry.launch, &self.config.terminal) {
            Ok(()) => self.should_quit = true,
            Err(e) => {
                tracing::error!(program = %selected.entry.identifier, "{e:#}");
                self.state.error = Some(format!("{e:#}"));
            }
        }
    }
}
