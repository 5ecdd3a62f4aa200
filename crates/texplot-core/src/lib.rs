#![forbid(unsafe_code)]

//! Post-processing for plot figures exported as LaTeX markup.
//!
//! Exported TikZ/PGF text hard-codes line widths and font sizes in points. The passes in
//! [`rewrite`] turn those into expressions over document-level macros (`\plotscale`,
//! `\plotfontsize`, `\xsepwidth`, `\ysepwidth`) so one export renders correctly at any size.
//!
//! Everything here is pure text processing except [`encoding`], which reads and writes markup
//! files in a caller-chosen character encoding.

pub mod config;
pub mod encoding;
pub mod error;
pub mod options;
pub mod rewrite;
pub mod scan;
pub mod ticks;

#[cfg(test)]
mod tests;

pub use config::{Config, MacroNames, RenderConfig};
pub use encoding::TextEncoding;
pub use error::{Error, Result};
pub use options::TikzExportOptions;
pub use rewrite::{rewrite_markup, rewrite_pgf, rewrite_tikz};
pub use ticks::{Axis, TickLabelOptions};

/// The two markup flavours a figure can be saved as.
///
/// They correspond to two independent rewrite pipelines: TikZ/PGFPlots output gets group-plot
/// separators, PGF output gets line-width and font-size scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkupFormat {
    /// PGFPlots axis code wrapped in a `tikzpicture`.
    Tikz,
    /// Low-level PGF drawing commands.
    #[default]
    Pgf,
}

impl MarkupFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Tikz => "tex",
            Self::Pgf => "pgf",
        }
    }

    /// Guesses the format from a file extension (`tex`/`tikz` or `pgf`).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim().to_ascii_lowercase().as_str() {
            "tex" | "tikz" => Some(Self::Tikz),
            "pgf" => Some(Self::Pgf),
            _ => None,
        }
    }
}

impl std::str::FromStr for MarkupFormat {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_extension(s).ok_or(())
    }
}

impl std::fmt::Display for MarkupFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}
