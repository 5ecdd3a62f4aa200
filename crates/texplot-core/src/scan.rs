//! Brace-aware scanning over TeX markup.
//!
//! Only ASCII bytes (`{`, `}`, `,`, `\`) are inspected, so every returned index is a valid char
//! boundary. Escaped braces (`\{`, `\}`) do not count towards nesting.

/// Returns the byte index of the `}` that closes the group opened at `open`.
///
/// `open` must point at a `{`. Returns `None` when it doesn't or when the group never closes.
pub fn matching_brace(text: &str, open: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.get(open) != Some(&b'{') {
        return None;
    }

    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                i += 2;
                continue;
            }
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Splits a key-value list on the commas that are not nested inside braces.
///
/// Segments are returned untrimmed; an empty body yields a single empty segment.
pub fn top_level_segments(body: &str) -> Vec<&str> {
    let bytes = body.as_bytes();
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    let mut i = 0usize;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                i += 2;
                continue;
            }
            b'{' => depth += 1,
            b'}' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => {
                out.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    out.push(&body[start..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_brace_skips_nested_groups() {
        let text = "a={b={c}, d={{e}}}, f";
        assert_eq!(matching_brace(text, 2), Some(17));
        assert_eq!(&text[2..=17], "{b={c}, d={{e}}}");
    }

    #[test]
    fn matching_brace_ignores_escaped_braces() {
        let text = r"{\{ not a group}";
        assert_eq!(matching_brace(text, 0), Some(text.len() - 1));
    }

    #[test]
    fn matching_brace_rejects_unterminated_or_misplaced_open() {
        assert_eq!(matching_brace("{ {x}", 0), None);
        assert_eq!(matching_brace("x{}", 0), None);
        assert_eq!(matching_brace("{", 5), None);
    }

    #[test]
    fn segments_split_only_at_top_level() {
        let segs = top_level_segments("group size=2 by 2, xticklabels at={edge bottom, a}, x=1");
        assert_eq!(
            segs,
            vec!["group size=2 by 2", " xticklabels at={edge bottom, a}", " x=1"]
        );
    }
}
