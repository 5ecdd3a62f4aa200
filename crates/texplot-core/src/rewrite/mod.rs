//! Text passes applied to exported markup.
//!
//! Each pass is the identity on text it does not match and leaves brace balance intact.

pub mod axis;
pub mod group_style;
pub mod scaling;

pub use axis::{inject_axis_options, strip_tikzpicture};
pub use group_style::inject_group_separators;
pub use scaling::{font_size_preamble, scale_font_sizes, scale_line_widths};

use crate::{MacroNames, MarkupFormat};

/// TikZ/PGFPlots pipeline: group-plot separators only.
pub fn rewrite_tikz(text: &str, macros: &MacroNames) -> String {
    inject_group_separators(text, macros)
}

/// PGF pipeline: font-size preamble, then line widths, then font sizes.
pub fn rewrite_pgf(text: &str, macros: &MacroNames) -> String {
    let mut pgf = font_size_preamble(macros);
    pgf.push_str(text);
    let pgf = scale_line_widths(&pgf, macros);
    scale_font_sizes(&pgf, macros)
}

pub fn rewrite_markup(text: &str, format: MarkupFormat, macros: &MacroNames) -> String {
    match format {
        MarkupFormat::Tikz => rewrite_tikz(text, macros),
        MarkupFormat::Pgf => rewrite_pgf(text, macros),
    }
}
