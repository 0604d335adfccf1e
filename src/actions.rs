//! User actions.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    Char(char),
    Backspace,
    DeleteWord,
    ClearQuery,

    SelectNext,
    SelectPrev,
    Launch,

    ReloadCatalog,
}
