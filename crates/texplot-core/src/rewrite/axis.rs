//! Helpers for backends that emit PGFPlots code themselves.

use crate::scan::matching_brace;
use indexmap::IndexSet;
use regex::Regex;
use std::sync::OnceLock;

fn axis_environment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\\begin\{(axis|semilogxaxis|semilogyaxis|loglogaxis|groupplot)\}").unwrap()
    })
}

/// Adds `options` to the option list of every axis-like environment.
///
/// A missing `[...]` list is created. Options land first in the list, one per line, so later
/// keys emitted by the exporter still win.
pub fn inject_axis_options(text: &str, options: &IndexSet<String>) -> String {
    if options.is_empty() {
        return text.to_string();
    }
    let mut joined = String::new();
    for opt in options {
        joined.push('\n');
        joined.push_str(opt);
        joined.push(',');
    }

    let mut out = String::with_capacity(text.len() + joined.len());
    let mut cursor = 0usize;
    for m in axis_environment().find_iter(text) {
        out.push_str(&text[cursor..m.end()]);
        cursor = m.end();
        let rest = &text[cursor..];
        let ws = rest.len() - rest.trim_start().len();
        if rest[ws..].starts_with('[') && options_list_closes(text, cursor + ws) {
            out.push_str(&rest[..=ws]);
            out.push_str(&joined);
            cursor += ws + 1;
        } else {
            out.push('[');
            out.push_str(joined.trim_end_matches(','));
            out.push_str("\n]");
        }
    }
    out.push_str(&text[cursor..]);
    out
}

// `[` opens an option list only if a `]` follows outside any braces.
fn options_list_closes(text: &str, open: usize) -> bool {
    let bytes = text.as_bytes();
    let mut i = open + 1;
    while i < bytes.len() {
        match bytes[i] {
            b']' => return true,
            b'{' => match matching_brace(text, i) {
                Some(close) => i = close,
                None => return false,
            },
            _ => {}
        }
        i += 1;
    }
    false
}

/// Drops the lines opening and closing the `tikzpicture` environment.
pub fn strip_tikzpicture(text: &str) -> String {
    text.split_inclusive('\n')
        .filter(|line| {
            let t = line.trim();
            !(t.starts_with(r"\begin{tikzpicture}") || t.starts_with(r"\end{tikzpicture}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(items: &[&str]) -> IndexSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn prepends_to_existing_option_list() {
        let text = "\\begin{axis}[\nxmin=0\n]\n\\end{axis}\n";
        assert_eq!(
            inject_axis_options(text, &opts(&["scaled y ticks = false"])),
            "\\begin{axis}[\nscaled y ticks = false,\nxmin=0\n]\n\\end{axis}\n"
        );
    }

    #[test]
    fn creates_missing_option_list() {
        let text = "\\begin{axis}\n\\addplot {x};\n";
        assert_eq!(
            inject_axis_options(text, &opts(&["a=1", "b=2"])),
            "\\begin{axis}[\na=1,\nb=2\n]\n\\addplot {x};\n"
        );
    }

    #[test]
    fn option_list_may_start_on_next_line() {
        let text = "\\begin{axis}\n[x]";
        assert_eq!(
            inject_axis_options(text, &opts(&["a=1"])),
            "\\begin{axis}\n[\na=1,x]"
        );
    }

    #[test]
    fn empty_options_are_identity() {
        let text = "\\begin{axis}[x=1]";
        assert_eq!(inject_axis_options(text, &IndexSet::new()), text);
    }

    #[test]
    fn strips_environment_lines_only() {
        let text = "\\begin{tikzpicture}\n\\begin{axis}\n\\end{axis}\n\\end{tikzpicture}\n";
        assert_eq!(strip_tikzpicture(text), "\\begin{axis}\n\\end{axis}\n");
    }
}
