//! Per-character emphasis for a display string, following the same greedy
//! walk the matcher uses for subsequences.

use thiserror::Error;

use crate::matcher::chars_eq;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightToken {
    pub text: char,
    pub emphasized: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HighlightError {
    /// The query does not subsequence-match the string at all.
    #[error("query character {missing:?} not found in {display:?} after position {from}")]
    Inconsistent {
        display: String,
        missing: char,
        from: usize,
    },
}

/// Mark the characters of `display` consumed by `query`.
///
/// An empty query yields an all-plain sequence. Each query character claims
/// the leftmost unclaimed matching character (ignoring case).
pub fn annotate(display: &str, query: &str) -> Result<Vec<HighlightToken>, HighlightError> {
    let mut tokens = Vec::with_capacity(display.len());
    let mut chars = display.chars();

    for wanted in query.chars() {
        let from = tokens.len();
        loop {
            let Some(c) = chars.next() else {
                return Err(HighlightError::Inconsistent {
                    display: display.to_string(),
                    missing: wanted,
                    from,
                });
            };
            let emphasized = chars_eq(wanted, c);
            tokens.push(HighlightToken { text: c, emphasized });
            if emphasized {
                break;
            }
        }
    }

    tokens.extend(chars.map(|text| HighlightToken { text, emphasized: false }));
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marks(tokens: &[HighlightToken]) -> Vec<bool> {
        tokens.iter().map(|t| t.emphasized).collect()
    }

    fn text(tokens: &[HighlightToken]) -> String {
        tokens.iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_single_char() {
        let tokens = annotate("bede", "d").unwrap();
        assert_eq!(text(&tokens), "bede");
        assert_eq!(marks(&tokens), [false, false, true, false]);
    }

    #[test]
    fn test_leftmost_occurrence() {
        let tokens = annotate("abcba", "ba").unwrap();
        assert_eq!(marks(&tokens), [false, true, false, false, true]);
    }

    #[test]
    fn test_case_preserved() {
        let tokens = annotate("Luakit", "Lu").unwrap();
        assert_eq!(text(&tokens), "Luakit");
        assert_eq!(marks(&tokens), [true, true, false, false, false, false]);

        let tokens = annotate("Luakit", "LU").unwrap();
        assert_eq!(marks(&tokens), [true, true, false, false, false, false]);
    }

    #[test]
    fn test_multi_char_lowercase() {
        let tokens = annotate("İnkscape", "i").unwrap();
        assert_eq!(text(&tokens), "İnkscape");
        assert!(tokens[0].emphasized);
        let tokens = annotate("ΟΔΟΣ", "σ").unwrap();
        assert_eq!(marks(&tokens), [false, false, false, true]);
    }

    #[test]
    fn test_empty_query() {
        let tokens = annotate("Files", "").unwrap();
        assert_eq!(text(&tokens), "Files");
        assert!(tokens.iter().all(|t| !t.emphasized));
        assert!(annotate("", "").unwrap().is_empty());
    }

    #[test]
    fn test_inner_substring_uses_greedy_positions() {
        // "fox" in "Firefox" is contiguous at 4, but the walk claims the
        // leading 'F' first.
        let tokens = annotate("Firefox", "fox").unwrap();
        assert_eq!(marks(&tokens), [true, false, false, false, false, true, true]);
    }

    #[test]
    fn test_inconsistent_query() {
        let err = annotate("Files", "naut").unwrap_err();
        assert_eq!(
            err,
            HighlightError::Inconsistent { display: "Files".into(), missing: 'n', from: 0 }
        );
        assert!(matches!(
            annotate("qwerty", "qq"),
            Err(HighlightError::Inconsistent { missing: 'q', from: 1, .. })
        ));
    }

    #[test]
    fn test_round_trip() {
        for (s, q) in [
            ("LibreOffice Writer", "low"),
            ("GNOME Terminal", "gt"),
            ("Ünïcödé Äpp", "üp"),
            ("x", "x"),
            ("tail match", "h"),
        ] {
            assert_eq!(text(&annotate(s, q).unwrap()), s);
            let emphasized = annotate(s, q).unwrap().iter().filter(|t| t.emphasized).count();
            assert_eq!(emphasized, q.chars().count());
        }
    }
}
