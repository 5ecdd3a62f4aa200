//! Export, rewrite, preview.

use crate::backend::{ExportRequest, FigureRef, PlotBackend};
use crate::rewrite::{rewrite_pgf, rewrite_tikz};
use crate::{
    Config, MarkupFormat, RenderConfig, Result, SaveError, TextEncoding, TickLabelOptions,
    TikzExportOptions,
};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct TikzSaveOptions {
    pub encoding: TextEncoding,
    pub export: TikzExportOptions,
    pub ticks: TickLabelOptions,
    /// Give `group style` blocks `\xsepwidth`/`\ysepwidth` separators.
    pub group_separators: bool,
    pub config: Config,
}

impl Default for TikzSaveOptions {
    fn default() -> Self {
        Self {
            encoding: TextEncoding::default(),
            export: TikzExportOptions::default(),
            ticks: TickLabelOptions::default(),
            group_separators: true,
            config: Config::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PgfSaveOptions {
    pub encoding: TextEncoding,
    pub config: Config,
}

/// Selects one of the two output modes.
#[derive(Debug, Clone)]
pub enum SaveOptions {
    Tikz(TikzSaveOptions),
    Pgf(PgfSaveOptions),
}

impl SaveOptions {
    pub fn format(&self) -> MarkupFormat {
        match self {
            Self::Tikz(_) => MarkupFormat::Tikz,
            Self::Pgf(_) => MarkupFormat::Pgf,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFiles {
    pub markup: PathBuf,
    pub pdf: PathBuf,
}

pub fn save<B>(
    backend: &B,
    filename: impl AsRef<Path>,
    figure: FigureRef<'_, B::Figure>,
    options: &SaveOptions,
) -> Result<SavedFiles>
where
    B: PlotBackend + ?Sized,
{
    match options {
        SaveOptions::Tikz(opts) => texsave(backend, filename, figure, opts),
        SaveOptions::Pgf(opts) => savetex(backend, filename, figure, opts),
    }
}

/// Saves `<filename>.tex` (PGFPlots) and `<filename>.pdf`.
///
/// Tick-label directives from `options.ticks` are merged into the exporter's extra axis
/// options before export.
pub fn texsave<B>(
    backend: &B,
    filename: impl AsRef<Path>,
    figure: FigureRef<'_, B::Figure>,
    options: &TikzSaveOptions,
) -> Result<SavedFiles>
where
    B: PlotBackend + ?Sized,
{
    let filename = filename.as_ref();
    let mut export = options.export.clone();
    export.extra = options.ticks.augment(&options.export.extra);

    let texpath = append_extension(filename, MarkupFormat::Tikz.extension());
    let request = ExportRequest {
        format: MarkupFormat::Tikz,
        encoding: options.encoding,
        render: &options.config.render,
        tikz: Some(&export),
    };
    backend
        .export_markup(figure, &texpath, &request)
        .map_err(SaveError::Backend)?;

    if options.group_separators {
        rewrite_file(&texpath, options.encoding, |text| {
            rewrite_tikz(text, &options.config.macros)
        })?;
    }

    let pdf = save_preview(backend, filename, figure, &options.config.render)?;
    Ok(SavedFiles {
        markup: texpath,
        pdf,
    })
}

/// Saves `<filename>.pgf` with line widths and font sizes tied to the scale macro, and
/// `<filename>.pdf`.
pub fn savetex<B>(
    backend: &B,
    filename: impl AsRef<Path>,
    figure: FigureRef<'_, B::Figure>,
    options: &PgfSaveOptions,
) -> Result<SavedFiles>
where
    B: PlotBackend + ?Sized,
{
    let filename = filename.as_ref();
    let pgfpath = append_extension(filename, MarkupFormat::Pgf.extension());
    let request = ExportRequest {
        format: MarkupFormat::Pgf,
        encoding: options.encoding,
        render: &options.config.render,
        tikz: None,
    };
    backend
        .export_markup(figure, &pgfpath, &request)
        .map_err(SaveError::Backend)?;

    rewrite_file(&pgfpath, options.encoding, |text| {
        rewrite_pgf(text, &options.config.macros)
    })?;

    let pdf = save_preview(backend, filename, figure, &options.config.render)?;
    Ok(SavedFiles {
        markup: pgfpath,
        pdf,
    })
}

fn save_preview<B>(
    backend: &B,
    filename: &Path,
    figure: FigureRef<'_, B::Figure>,
    render: &RenderConfig,
) -> Result<PathBuf>
where
    B: PlotBackend + ?Sized,
{
    let pdfpath = append_extension(filename, "pdf");
    let figure = figure.resolve(backend).map_err(SaveError::Backend)?;
    backend
        .export_pdf(figure, &pdfpath, render)
        .map_err(SaveError::Backend)?;
    tracing::info!(path = %pdfpath.display(), "wrote PDF preview");
    Ok(pdfpath)
}

fn rewrite_file(
    path: &Path,
    encoding: TextEncoding,
    rewrite: impl FnOnce(&str) -> String,
) -> Result<()> {
    let text = encoding.read_to_string(path)?;
    let rewritten = rewrite(&text);
    encoding.write(path, &rewritten)?;
    tracing::info!(path = %path.display(), "rewrote markup");
    Ok(())
}

/// `plot.v2` + `tex` is `plot.v2.tex`: the base name never loses a dotted suffix.
pub(crate) fn append_extension(base: &Path, ext: &str) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_extension_keeps_dotted_base_names() {
        assert_eq!(
            append_extension(Path::new("out/plot.v2"), "tex"),
            PathBuf::from("out/plot.v2.tex")
        );
        assert_eq!(
            append_extension(Path::new("figure"), "pdf"),
            PathBuf::from("figure.pdf")
        );
    }

    #[test]
    fn save_options_report_their_format() {
        assert_eq!(
            SaveOptions::Tikz(TikzSaveOptions::default()).format(),
            MarkupFormat::Tikz
        );
        assert_eq!(
            SaveOptions::Pgf(PgfSaveOptions::default()).format(),
            MarkupFormat::Pgf
        );
    }
}
