//! The seam between `texplot` and a plotting library.

use crate::{MarkupFormat, RenderConfig, TextEncoding, TikzExportOptions};
use std::path::Path;

/// Failures raised by the plotting library. They reach the caller unchanged.
pub type BackendError = Box<dyn std::error::Error + Send + Sync>;

/// Which figure to save.
#[derive(Debug)]
pub enum FigureRef<'a, F: ?Sized> {
    /// Whatever figure the backend currently considers active.
    Active,
    Handle(&'a F),
}

impl<F: ?Sized> Clone for FigureRef<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: ?Sized> Copy for FigureRef<'_, F> {}

impl<'a, F: ?Sized> FigureRef<'a, F> {
    /// Turns [`FigureRef::Active`] into a concrete handle.
    pub fn resolve<B>(self, backend: &'a B) -> Result<&'a F, BackendError>
    where
        B: PlotBackend<Figure = F> + ?Sized,
    {
        match self {
            Self::Handle(figure) => Ok(figure),
            Self::Active => backend.current_figure(),
        }
    }
}

/// Everything an exporter needs besides the figure and the destination.
#[derive(Debug, Clone, Copy)]
pub struct ExportRequest<'a> {
    pub format: MarkupFormat,
    /// Encoding the markup file must be written in; it is read back with the same one.
    pub encoding: TextEncoding,
    pub render: &'a RenderConfig,
    /// Set for [`MarkupFormat::Tikz`] exports.
    pub tikz: Option<&'a TikzExportOptions>,
}

pub trait PlotBackend {
    type Figure: ?Sized;

    fn current_figure(&self) -> Result<&Self::Figure, BackendError>;

    /// Writes `figure` as markup to `path`. [`FigureRef::Active`] is passed through unresolved.
    fn export_markup(
        &self,
        figure: FigureRef<'_, Self::Figure>,
        path: &Path,
        request: &ExportRequest<'_>,
    ) -> Result<(), BackendError>;

    fn export_pdf(
        &self,
        figure: &Self::Figure,
        path: &Path,
        render: &RenderConfig,
    ) -> Result<(), BackendError>;
}
