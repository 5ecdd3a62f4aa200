use crate::rewrite::{font_size_preamble, scale_font_sizes, scale_line_widths};
use crate::*;

#[test]
fn line_width_becomes_deferred_division() {
    assert_eq!(
        scale_line_widths(r"\pgfsetlinewidth{0.4pt}", &MacroNames::default()),
        r"\pgfmathparse{0.4/\plotscale}\pgfsetlinewidth{\pgfmathresult pt}"
    );
}

#[test]
fn dash_offset_and_loose_whitespace_are_matched() {
    let text = r"\pgfsetdash{}{ 0.0 pt }\pgfsetlinewidth {1.003750pt}";
    assert_eq!(
        scale_line_widths(text, &MacroNames::default()),
        r"\pgfmathparse{0.0/\plotscale}\pgfsetdash{}{\pgfmathresult pt}\pgfmathparse{1.003750/\plotscale}\pgfsetlinewidth{\pgfmathresult pt}"
    );
}

#[test]
fn non_point_units_and_dash_patterns_are_left_alone() {
    let text = r"\pgfsetlinewidth{1mm}\pgfsetdash{{3.7pt}{1.6pt}}{0.0pt}";
    assert_eq!(scale_line_widths(text, &MacroNames::default()), text);
}

#[test]
fn scale_macro_name_is_configurable() {
    let macros = MacroNames {
        scale: "figscale".to_string(),
        ..MacroNames::default()
    };
    assert_eq!(
        scale_line_widths(r"\pgfsetlinewidth{2pt}", &macros),
        r"\pgfmathparse{2/\figscale}\pgfsetlinewidth{\pgfmathresult pt}"
    );
}

#[test]
fn font_size_discards_baseline_skip() {
    let macros = MacroNames::default();
    for text in [r"\fontsize{10.000000}{12.000000}", r"\fontsize{8}{ 30.5 }"] {
        assert_eq!(
            scale_font_sizes(text, &macros),
            r"\fontsize{\plotfontsize}{1.2\plotfontsize}"
        );
    }
}

#[test]
fn font_size_inside_text_node_keeps_surroundings() {
    let text = r"{\rmfamily\fontsize{10.000000}{12.000000}\selectfont 0.5}";
    assert_eq!(
        scale_font_sizes(text, &MacroNames::default()),
        r"{\rmfamily\fontsize{\plotfontsize}{1.2\plotfontsize}\selectfont 0.5}"
    );
}

#[test]
fn preamble_guards_the_length_declaration() {
    let preamble = font_size_preamble(&MacroNames::default());
    assert_eq!(
        preamble,
        "\n\\makeatletter\n\\pgfmathparse{\\f@size/\\plotscale}\n\\makeatother\n\\ifcsname plotfontsize\\endcsname\\else\n\\newlength\\plotfontsize\n\\fi\n\\setlength{\\plotfontsize}{\\pgfmathresult pt}\n"
    );
}

#[test]
fn pgf_pipeline_prepends_preamble_then_scales() {
    let macros = MacroNames::default();
    let text = "\\begin{pgfpicture}\n\\pgfsetlinewidth{0.803000pt}\n\\pgftext{\\fontsize{10.000000}{12.000000}\\selectfont a}\n\\end{pgfpicture}\n";
    let out = rewrite_pgf(text, &macros);
    let body = out
        .strip_prefix(font_size_preamble(&macros).as_str())
        .unwrap();
    assert_eq!(
        body,
        "\\begin{pgfpicture}\n\\pgfmathparse{0.803000/\\plotscale}\\pgfsetlinewidth{\\pgfmathresult pt}\n\\pgftext{\\fontsize{\\plotfontsize}{1.2\\plotfontsize}\\selectfont a}\n\\end{pgfpicture}\n"
    );
}

#[test]
fn pgf_pipeline_on_plain_text_only_adds_preamble() {
    let macros = MacroNames::default();
    let out = rewrite_pgf("% nothing to scale\n", &macros);
    assert_eq!(out, format!("{}% nothing to scale\n", font_size_preamble(&macros)));
}
