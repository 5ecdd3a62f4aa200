//! Typed configuration threaded through every save call.
//!
//! Plotting front-ends usually keep this kind of state in process-wide settings (font family,
//! TeX backend, legend style). Here it is an explicit value so two saves never influence each
//! other.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub macros: MacroNames,
}

impl Config {
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::Config {
            message: e.to_string(),
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

/// Settings handed to the plotting backend when it renders a figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Generic or concrete font family used for text (`serif` matches LaTeX body text).
    pub font_family: String,
    /// Let TeX typeset labels instead of the backend's own text engine.
    pub use_tex: bool,
    /// TeX engine used for PGF output (`pdflatex`, `xelatex`, `lualatex`).
    pub tex_system: String,
    pub legend_font_size: String,
    pub legend_frame: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_family: "serif".to_string(),
            use_tex: true,
            tex_system: "pdflatex".to_string(),
            legend_font_size: "medium".to_string(),
            legend_frame: false,
        }
    }
}

/// Names (without the leading backslash) of the macros the consuming document defines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacroNames {
    /// Divisor applied to every absolute length.
    pub scale: String,
    /// Length computed in the font-size preamble.
    pub font_size: String,
    pub xsep: String,
    pub ysep: String,
}

impl Default for MacroNames {
    fn default() -> Self {
        Self {
            scale: "plotscale".to_string(),
            font_size: "plotfontsize".to_string(),
            xsep: "xsepwidth".to_string(),
            ysep: "ysepwidth".to_string(),
        }
    }
}
