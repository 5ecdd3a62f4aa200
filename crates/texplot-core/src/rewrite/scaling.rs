//! Scale-aware rewriting of PGF line widths, dash patterns and font sizes.
//!
//! Absolute point values are replaced by `\pgfmathparse` expressions that divide by the
//! document's scale macro, so the division happens when LaTeX typesets the figure.

use crate::MacroNames;
use regex::{Captures, Regex};
use std::sync::OnceLock;

fn length_directive() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\\(pgfsetlinewidth|pgfsetdash\{\})\s*\{\s*([0-9.]+)\s*pt\s*\}").unwrap()
    })
}

fn font_size_directive() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\\fontsize\s*\{\s*([0-9.]+)\s*\}\s*\{\s*([0-9.]+)\s*\}").unwrap()
    })
}

/// Baseline skip as a multiple of the font size.
const BASELINE_RATIO: &str = "1.2";

/// `\pgfsetlinewidth{0.4pt}` becomes
/// `\pgfmathparse{0.4/\plotscale}\pgfsetlinewidth{\pgfmathresult pt}`; `\pgfsetdash{}{Xpt}` is
/// treated the same way.
pub fn scale_line_widths(text: &str, macros: &MacroNames) -> String {
    let mut count = 0usize;
    let out = length_directive().replace_all(text, |caps: &Captures| {
        count += 1;
        format!(
            r"\pgfmathparse{{{value}/\{scale}}}\{directive}{{\pgfmathresult pt}}",
            value = &caps[2],
            scale = macros.scale,
            directive = &caps[1],
        )
    });
    tracing::debug!(count, "line width directives scaled");
    out.into_owned()
}

/// Replaces `\fontsize{size}{skip}` with `\fontsize{\plotfontsize}{1.2\plotfontsize}`.
///
/// Requires [`font_size_preamble`] to appear earlier in the document.
pub fn scale_font_sizes(text: &str, macros: &MacroNames) -> String {
    let mut count = 0usize;
    let out = font_size_directive().replace_all(text, |_: &Captures| {
        count += 1;
        format!(
            r"\fontsize{{\{font}}}{{{BASELINE_RATIO}\{font}}}",
            font = macros.font_size,
        )
    });
    tracing::debug!(count, "font size directives scaled");
    out.into_owned()
}

/// Defines the font-size length as the ambient `\f@size` divided by the scale macro.
///
/// The length is only declared when missing, so a repeated preamble is harmless.
pub fn font_size_preamble(macros: &MacroNames) -> String {
    format!(
        r"
\makeatletter
\pgfmathparse{{\f@size/\{scale}}}
\makeatother
\ifcsname {font}\endcsname\else
\newlength\{font}
\fi
\setlength{{\{font}}}{{\pgfmathresult pt}}
",
        scale = macros.scale,
        font = macros.font_size,
    )
}
