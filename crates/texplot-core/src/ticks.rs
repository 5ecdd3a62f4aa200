//! Tick-label formatting directives for PGFPlots axes.

use indexmap::IndexSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn letter(self) -> char {
        match self {
            Self::X => 'x',
            Self::Y => 'y',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickLabelOptions {
    /// Allow PGFPlots to factor a common exponent out of the tick labels.
    pub scale: bool,
    /// Keep the exporter's own label formatting.
    pub strict_labels: bool,
    /// Use `\times` instead of `\cdot` between mantissa and exponent.
    pub times_sci_notation: bool,
    /// Inclusive decimal exponent range printed in fixed notation; anything outside goes
    /// scientific. Not validated.
    pub exp_cutoff: (i32, i32),
    pub precision: u32,
}

impl Default for TickLabelOptions {
    fn default() -> Self {
        Self {
            scale: false,
            strict_labels: false,
            times_sci_notation: true,
            exp_cutoff: (-4, 4),
            precision: 3,
        }
    }
}

const SCI_TIMES: &str = r",sci generic={mantissa sep=\times,exponent={10^{##1}}}";

impl TickLabelOptions {
    /// Returns `extra` plus the directives these options call for.
    pub fn augment(&self, extra: &IndexSet<String>) -> IndexSet<String> {
        let mut out = extra.clone();
        if !self.scale || self.strict_labels {
            out.insert("scaled x ticks = false".to_string());
            out.insert("scaled y ticks = false".to_string());
        }
        if !self.strict_labels {
            out.insert(self.tick_label_directive(Axis::X));
            out.insert(self.tick_label_directive(Axis::Y));
        }
        tracing::debug!(
            added = out.len() - extra.len(),
            "tick label directives synthesized"
        );
        out
    }

    pub fn tick_label_directive(&self, axis: Axis) -> String {
        let (lo, hi) = self.exp_cutoff;
        let sci = if self.times_sci_notation { SCI_TIMES } else { "" };
        format!(
            r"{axis}ticklabel={{\pgfmathprintnumber[relative*={{{lo}}},relative style={{std={lo}:{hi}}},precision={{{precision}}}{sci}]{{\tick}}}}",
            axis = axis.letter(),
            precision = self.precision,
        )
    }
}
