//! A backend over figures that were already rendered by some other tool.
//!
//! Each [`StaticFigure`] carries the markup a plotting program produced (TikZ and/or PGF) and an
//! SVG rendering of the same figure for the PDF preview.

use crate::backend::{BackendError, ExportRequest, FigureRef, PlotBackend};
use crate::pdf::svg_to_pdf;
use crate::rewrite::{inject_axis_options, strip_tikzpicture};
use crate::{MarkupFormat, RenderConfig, TextEncoding};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum StaticBackendError {
    #[error("no figure is active")]
    NoActiveFigure,
    #[error("figure `{figure}` has no {format} markup")]
    MissingMarkup {
        figure: String,
        format: MarkupFormat,
    },
    #[error("figure `{figure}` has no SVG rendering for the PDF preview")]
    MissingSvg { figure: String },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticFigure {
    pub name: String,
    pub tikz: Option<String>,
    pub pgf: Option<String>,
    pub svg: Option<String>,
}

impl StaticFigure {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_markup(mut self, format: MarkupFormat, markup: impl Into<String>) -> Self {
        match format {
            MarkupFormat::Tikz => self.tikz = Some(markup.into()),
            MarkupFormat::Pgf => self.pgf = Some(markup.into()),
        }
        self
    }

    pub fn with_svg(mut self, svg: impl Into<String>) -> Self {
        self.svg = Some(svg.into());
        self
    }

    /// Loads markup (decoded with `encoding`) and an optional SVG file, naming the figure after
    /// the markup file's stem.
    pub fn load(
        markup: &Path,
        format: MarkupFormat,
        svg: Option<&Path>,
        encoding: TextEncoding,
    ) -> texplot_core::Result<Self> {
        let name = markup
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut figure = Self::new(name).with_markup(format, encoding.read_to_string(markup)?);
        if let Some(svg) = svg {
            figure.svg = Some(std::fs::read_to_string(svg)?);
        }
        Ok(figure)
    }

    pub fn markup(&self, format: MarkupFormat) -> Option<&str> {
        match format {
            MarkupFormat::Tikz => self.tikz.as_deref(),
            MarkupFormat::Pgf => self.pgf.as_deref(),
        }
    }
}

/// Holds figures and tracks which one is active, like a plotting library's figure manager.
#[derive(Debug, Clone, Default)]
pub struct StaticBackend {
    figures: Vec<StaticFigure>,
    active: Option<usize>,
}

impl StaticBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a figure and makes it the active one. Returns its index.
    pub fn add_figure(&mut self, figure: StaticFigure) -> usize {
        self.figures.push(figure);
        let idx = self.figures.len() - 1;
        self.active = Some(idx);
        idx
    }

    /// Returns `false` (leaving the active figure unchanged) for an out-of-range index.
    pub fn set_active(&mut self, idx: usize) -> bool {
        if idx >= self.figures.len() {
            return false;
        }
        self.active = Some(idx);
        true
    }

    pub fn figure(&self, idx: usize) -> Option<&StaticFigure> {
        self.figures.get(idx)
    }
}

impl PlotBackend for StaticBackend {
    type Figure = StaticFigure;

    fn current_figure(&self) -> Result<&StaticFigure, BackendError> {
        self.active
            .and_then(|idx| self.figures.get(idx))
            .ok_or_else(|| StaticBackendError::NoActiveFigure.into())
    }

    fn export_markup(
        &self,
        figure: FigureRef<'_, StaticFigure>,
        path: &Path,
        request: &ExportRequest<'_>,
    ) -> Result<(), BackendError> {
        let figure = figure.resolve(self)?;
        let Some(markup) = figure.markup(request.format) else {
            return Err(StaticBackendError::MissingMarkup {
                figure: figure.name.clone(),
                format: request.format,
            }
            .into());
        };

        let text = match (request.format, request.tikz) {
            (MarkupFormat::Tikz, Some(opts)) => {
                if opts.tex_relative_path_to_data.is_some() || opts.draw_rectangles {
                    tracing::debug!(
                        figure = %figure.name,
                        "pre-rendered markup ignores data path and rectangle options"
                    );
                }
                let text = inject_axis_options(markup, &opts.extra);
                if opts.wrap {
                    text
                } else {
                    strip_tikzpicture(&text)
                }
            }
            _ => markup.to_string(),
        };

        request.encoding.write(path, &text)?;
        tracing::info!(figure = %figure.name, path = %path.display(), "exported markup");
        Ok(())
    }

    fn export_pdf(
        &self,
        figure: &StaticFigure,
        path: &Path,
        render: &RenderConfig,
    ) -> Result<(), BackendError> {
        let Some(svg) = figure.svg.as_deref() else {
            return Err(StaticBackendError::MissingSvg {
                figure: figure.name.clone(),
            }
            .into());
        };
        let bytes = svg_to_pdf(svg, &render.font_family)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}
