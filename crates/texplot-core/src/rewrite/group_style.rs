use crate::MacroNames;
use crate::scan::{matching_brace, top_level_segments};
use regex::Regex;
use std::sync::OnceLock;

fn group_style_opener() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"group style\s*=\s*\{").unwrap())
}

fn group_size_segment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*group size\s*=\s*\d+\s+by\s+\d+\s*$").unwrap())
}

/// Appends `horizontal sep` and `vertical sep` to every `group style = {...}` block that sets a
/// `group size`.
///
/// The separators reference `\<xsep>` and `\<ysep>` so the consuming document controls the
/// spacing between subplots. Blocks without a group size, or that never close, are left alone.
pub fn inject_group_separators(text: &str, macros: &MacroNames) -> String {
    let insertion = format!(
        r", horizontal sep=\{}, vertical sep=\{}",
        macros.xsep, macros.ysep
    );

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0usize;
    let mut count = 0usize;
    while let Some(m) = group_style_opener().find_at(text, cursor) {
        let open = m.end() - 1;
        let Some(close) = matching_brace(text, open) else {
            break;
        };
        out.push_str(&text[cursor..close]);
        if top_level_segments(&text[open + 1..close])
            .iter()
            .any(|seg| group_size_segment().is_match(seg))
        {
            out.push_str(&insertion);
            count += 1;
        }
        cursor = close;
    }
    out.push_str(&text[cursor..]);

    tracing::debug!(count, "group style blocks given separators");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_nested_options_before_group_size() {
        let text = r"group style={xticklabels at={edge bottom}, group size=2 by 1}";
        assert_eq!(
            inject_group_separators(text, &MacroNames::default()),
            r"group style={xticklabels at={edge bottom}, group size=2 by 1, horizontal sep=\xsepwidth, vertical sep=\ysepwidth}"
        );
    }

    #[test]
    fn group_size_must_be_a_top_level_key() {
        let text = r"group style={foo={group size=2 by 2}}";
        assert_eq!(inject_group_separators(text, &MacroNames::default()), text);
    }

    #[test]
    fn unterminated_block_is_left_alone() {
        let text = r"group style={group size=2 by 2, x=1";
        assert_eq!(inject_group_separators(text, &MacroNames::default()), text);
    }
}
