//! SVG to PDF conversion for figure previews.

#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    #[error("failed to parse SVG")]
    SvgParse,
    #[error("failed to convert SVG to PDF")]
    PdfConvert,
}

pub type Result<T> = std::result::Result<T, PdfError>;

/// Converts an SVG document to PDF bytes.
///
/// `font_family` is used for text that does not name a family of its own; generic names like
/// `serif` resolve through the system font database.
pub fn svg_to_pdf(svg: &str, font_family: &str) -> Result<Vec<u8>> {
    let mut opt = svg2pdf::usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    opt.font_family = font_family.to_string();

    let tree = svg2pdf::usvg::Tree::from_str(svg, &opt).map_err(|_| PdfError::SvgParse)?;

    svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(|_| PdfError::PdfConvert)
}
