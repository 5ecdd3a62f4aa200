#![forbid(unsafe_code)]

//! `texplot` saves plot figures as LaTeX markup that scales with the host document.
//!
//! A figure is exported through a [`PlotBackend`], the markup is rewritten by
//! [`texplot_core::rewrite`], and a PDF preview is written next to it:
//!
//! - [`texsave`]: PGFPlots (`.tex`) output with tick-label formatting and group-plot separators
//! - [`savetex`]: PGF (`.pgf`) output with line widths and fonts divided by `\plotscale`
//!
//! The consuming document defines the macros, for example:
//!
//! ```latex
//! \newcommand\plotscale{1}
//! \newlength\xsepwidth \setlength\xsepwidth{1.5cm}
//! \newlength\ysepwidth \setlength\ysepwidth{1.5cm}
//! ```

pub use texplot_core::*;

pub mod backend;
pub mod pdf;
pub mod save;
pub mod static_backend;

pub use backend::{BackendError, ExportRequest, FigureRef, PlotBackend};
pub use save::{PgfSaveOptions, SaveOptions, SavedFiles, TikzSaveOptions, save, savetex, texsave};
pub use static_backend::{StaticBackend, StaticFigure};

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error(transparent)]
    Core(#[from] texplot_core::Error),
    #[error(transparent)]
    Backend(BackendError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SaveError>;
