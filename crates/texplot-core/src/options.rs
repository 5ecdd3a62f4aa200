use indexmap::IndexSet;

/// Options bundle handed to a TikZ/PGFPlots exporter.
#[derive(Debug, Clone, PartialEq)]
pub struct TikzExportOptions {
    /// Font size (pt) of the target document. Only influences derived lengths like line widths.
    pub text_size: f64,
    /// Path from the LaTeX document to data files (e.g. PNGs for image plots) the markup refers
    /// to; `\input` resolves them relative to the document, not the markup file.
    pub tex_relative_path_to_data: Option<String>,
    /// Stick to the plot's exact appearance (tick positions etc.) instead of letting PGFPlots
    /// decide.
    pub strict: bool,
    pub draw_rectangles: bool,
    /// Emit the surrounding `tikzpicture` environment.
    pub wrap: bool,
    pub show_info: bool,
    pub figure_width: Option<String>,
    pub figure_height: Option<String>,
    /// Extra axis options, passed through verbatim.
    pub extra: IndexSet<String>,
}

impl Default for TikzExportOptions {
    fn default() -> Self {
        Self {
            text_size: 10.0,
            tex_relative_path_to_data: None,
            strict: true,
            draw_rectangles: false,
            wrap: true,
            show_info: false,
            figure_width: Some(r"\figurewidth".to_string()),
            figure_height: None,
            extra: IndexSet::new(),
        }
    }
}
