//! Fuzzy grading of a query against one candidate string.

/// How well a query matched a candidate, weakest first.
///
/// The derived `Ord` follows declaration order, so sorting descending puts
/// the best matches on top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchGrade {
    NotFound,
    SubsequenceMatch,
    ExactSubstring,
    ExactSubstringAtStart,
}

impl MatchGrade {
    pub fn is_match(self) -> bool {
        self != MatchGrade::NotFound
    }
}

/// Per-character case fold shared by the matcher and the highlighter.
///
/// Only the first char of a multi-char lowercase mapping is kept, so every
/// character folds to exactly one character ('İ' folds to 'i').
pub(crate) fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Case-insensitive comparison of two single characters.
pub(crate) fn chars_eq(a: char, b: char) -> bool {
    a == b || fold(a) == fold(b)
}

/// Grade `query` against `candidate`, ignoring case.
///
/// A contiguous occurrence wins outright. Otherwise the query is walked as a
/// subsequence, always taking the leftmost occurrence of the next character;
/// a fully consumed query is a [`MatchGrade::SubsequenceMatch`] even if part of
/// it happened to be contiguous.
pub fn grade(query: &str, candidate: &str) -> MatchGrade {
    let query: Vec<char> = query.chars().map(fold).collect();
    let candidate: Vec<char> = candidate.chars().map(fold).collect();

    if query.is_empty() {
        return MatchGrade::ExactSubstringAtStart;
    }
    match candidate.windows(query.len()).position(|w| w == query.as_slice()) {
        Some(0) => return MatchGrade::ExactSubstringAtStart,
        Some(_) => return MatchGrade::ExactSubstring,
        None => {}
    }

    if is_subsequence(&query, &candidate) {
        MatchGrade::SubsequenceMatch
    } else {
        MatchGrade::NotFound
    }
}

/// Greedy leftmost walk over folded chars; no backtracking.
fn is_subsequence(query: &[char], candidate: &[char]) -> bool {
    let mut rest = candidate.iter();
    query.iter().all(|q| rest.by_ref().any(|c| c == q))
}
