//! Filter and order the catalog for one query.

use crate::catalog::{Catalog, CatalogEntry};
use crate::matcher::{grade, MatchGrade};

/// One surviving catalog entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedEntry {
    pub entry: CatalogEntry,
    /// False when only the identifier matched; the display name must then
    /// be drawn without highlights.
    pub matched_display_name: bool,
    pub grade: MatchGrade,
}

/// Grade every entry by display name, then identifier, and sort the survivors
/// best first. Equal grades keep catalog order.
pub fn rank(query: &str, catalog: &Catalog) -> Vec<RankedEntry> {
    let mut ranked: Vec<RankedEntry> = catalog
        .iter()
        .filter_map(|entry| {
            let by_name = grade(query, &entry.display_name);
            if by_name.is_match() {
                return Some((entry, true, by_name));
            }
            let by_id = grade(query, &entry.identifier);
            by_id.is_match().then_some((entry, false, by_id))
        })
        .map(|(entry, matched_display_name, grade)| RankedEntry {
            entry: entry.clone(),
            matched_display_name,
            grade,
        })
        .collect();

    // sort_by is stable.
    ranked.sort_by(|a, b| b.grade.cmp(&a.grade));
    ranked
}

/// The unfiltered listing shown while the query is empty.
pub fn unfiltered(catalog: &Catalog) -> Vec<RankedEntry> {
    catalog
        .iter()
        .map(|entry| RankedEntry {
            entry: entry.clone(),
            matched_display_name: true,
            grade: MatchGrade::ExactSubstringAtStart,
        })
        .collect()
}
