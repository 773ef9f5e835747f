//! Search Highlight
//!
//! Splits a value around the first case-insensitive occurrence of the query
//! so the match can be emphasized. Only the first occurrence is marked.
//!
//! Case folding is per char (`char::to_lowercase`) and is shared with the
//! list filter, so a row is visible exactly when its text would be marked.

/// Three-part split of a text around a match; casing is preserved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight<'a> {
    pub prefix: &'a str,
    pub matched: &'a str,
    pub suffix: &'a str,
}

impl<'a> Highlight<'a> {
    fn unsplit(text: &'a str) -> Self {
        Self {
            prefix: text,
            matched: "",
            suffix: "",
        }
    }

    pub fn is_match(&self) -> bool {
        !self.matched.is_empty()
    }
}

/// Case-folded form of a query, ready for [`find_folded`]
pub fn fold_case(query: &str) -> Vec<char> {
    query.chars().flat_map(char::to_lowercase).collect()
}

/// Byte range of the first occurrence of an already folded `needle`
pub fn find_folded(text: &str, needle: &[char]) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return None;
    }
    text.char_indices()
        .find_map(|(start, _)| match_at(text, start, needle).map(|end| (start, end)))
}

/// Case-insensitive containment; an empty needle matches everything
pub fn contains_folded(text: &str, needle: &[char]) -> bool {
    needle.is_empty() || find_folded(text, needle).is_some()
}

/// Locate the first case-insensitive occurrence of `query` in `text`.
///
/// Empty query or no occurrence returns the whole text as the prefix.
pub fn highlight<'a>(text: &'a str, query: &str) -> Highlight<'a> {
    match find_folded(text, &fold_case(query)) {
        Some((start, end)) => Highlight {
            prefix: &text[..start],
            matched: &text[start..end],
            suffix: &text[end..],
        },
        None => Highlight::unsplit(text),
    }
}

/// Byte end of a match of `needle` starting at `start`, folding case per char
fn match_at(text: &str, start: usize, needle: &[char]) -> Option<usize> {
    let mut pos = 0;
    for (offset, ch) in text[start..].char_indices() {
        for lower in ch.to_lowercase() {
            if needle.get(pos) != Some(&lower) {
                return None;
            }
            pos += 1;
        }
        if pos == needle.len() {
            return Some(start + offset + ch.len_utf8());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_preserves_original_casing() {
        let h = highlight("Data Table", "table");
        assert_eq!(h.prefix, "Data ");
        assert_eq!(h.matched, "Table");
        assert_eq!(h.suffix, "");
    }

    #[test]
    fn test_empty_query_returns_unsplit() {
        let h = highlight("Card", "");
        assert_eq!((h.prefix, h.matched, h.suffix), ("Card", "", ""));
        assert!(!h.is_match());
    }

    #[test]
    fn test_no_match_returns_unsplit() {
        let h = highlight("Card", "table");
        assert_eq!((h.prefix, h.matched, h.suffix), ("Card", "", ""));
    }

    #[test]
    fn test_only_first_occurrence() {
        let h = highlight("tab tab", "TAB");
        assert_eq!((h.prefix, h.matched, h.suffix), ("", "tab", " tab"));
    }

    #[test]
    fn test_non_ascii_boundaries() {
        let h = highlight("Größe Ärger", "ärg");
        assert_eq!((h.prefix, h.matched, h.suffix), ("Größe ", "Ärg", "er"));
    }

    #[test]
    fn test_containment_agrees_with_highlight() {
        let cases = [
            ("İnput", "i"),
            ("İnput", "İ"),
            ("ΟΔΟΣ", "οσ"),
            ("ΟΔΟΣ", "ος"),
            ("Straße", "SS"),
            ("Data Table", "TABLE"),
            ("Card", ""),
        ];
        for (text, query) in cases {
            assert_eq!(
                contains_folded(text, &fold_case(query)),
                highlight(text, query).is_match() || query.is_empty(),
                "{:?} / {:?}",
                text,
                query
            );
        }
        assert_eq!(highlight("ΟΔΟΣ", "οσ").matched, "ΟΣ");
    }

    #[test]
    fn test_query_longer_than_text() {
        let h = highlight("Ca", "Card");
        assert_eq!(h.prefix, "Ca");
        assert!(!h.is_match());
    }
}
