use crate::*;
use indexmap::IndexSet;

const SCALED_X: &str = "scaled x ticks = false";
const SCALED_Y: &str = "scaled y ticks = false";

fn extra(items: &[&str]) -> IndexSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn has_tick_label(set: &IndexSet<String>, axis: char) -> bool {
    set.iter()
        .any(|s| s.starts_with(&format!("{axis}ticklabel=")))
}

#[test]
fn default_scenario_yields_sci_directives_for_both_axes() {
    let opts = TickLabelOptions {
        times_sci_notation: true,
        strict_labels: false,
        exp_cutoff: (-4, 4),
        precision: 3,
        scale: true,
    };
    let out = opts.augment(&IndexSet::new());
    assert_eq!(out.len(), 2);
    for axis in ['x', 'y'] {
        let directive = out
            .iter()
            .find(|s| s.starts_with(&format!("{axis}ticklabel=")))
            .unwrap();
        assert!(directive.contains("relative*={-4}"));
        assert!(directive.contains("relative style={std=-4:4}"));
        assert!(directive.contains("precision={3}"));
        assert!(directive.contains(r"sci generic={mantissa sep=\times,exponent={10^{##1}}}"));
    }
}

#[test]
fn x_directive_is_rendered_exactly() {
    let opts = TickLabelOptions::default();
    assert_eq!(
        opts.tick_label_directive(Axis::X),
        r"xticklabel={\pgfmathprintnumber[relative*={-4},relative style={std=-4:4},precision={3},sci generic={mantissa sep=\times,exponent={10^{##1}}}]{\tick}}"
    );
}

#[test]
fn cdot_notation_uses_plain_template() {
    let opts = TickLabelOptions {
        times_sci_notation: false,
        precision: 2,
        exp_cutoff: (-1, 2),
        ..TickLabelOptions::default()
    };
    assert_eq!(
        opts.tick_label_directive(Axis::Y),
        r"yticklabel={\pgfmathprintnumber[relative*={-1},relative style={std=-1:2},precision={2}]{\tick}}"
    );
}

#[test]
fn strict_labels_never_add_tick_label_directives() {
    for times in [true, false] {
        let opts = TickLabelOptions {
            strict_labels: true,
            times_sci_notation: times,
            scale: true,
            ..TickLabelOptions::default()
        };
        let out = opts.augment(&IndexSet::new());
        assert!(!has_tick_label(&out, 'x'));
        assert!(!has_tick_label(&out, 'y'));
        assert!(out.contains(SCALED_X) && out.contains(SCALED_Y));
    }
}

#[test]
fn disabled_scaling_adds_both_rescale_switches() {
    let opts = TickLabelOptions {
        scale: false,
        ..TickLabelOptions::default()
    };
    let out = opts.augment(&IndexSet::new());
    assert!(out.contains(SCALED_X));
    assert!(out.contains(SCALED_Y));
}

#[test]
fn enabled_scaling_without_strict_labels_keeps_rescaling() {
    let opts = TickLabelOptions {
        scale: true,
        ..TickLabelOptions::default()
    };
    let out = opts.augment(&IndexSet::new());
    assert!(!out.contains(SCALED_X));
    assert!(!out.contains(SCALED_Y));
}

#[test]
fn caller_extras_are_kept_and_duplicates_collapse() {
    let opts = TickLabelOptions::default();
    let out = opts.augment(&extra(&["legend pos=north west", SCALED_Y]));
    assert!(out.contains("legend pos=north west"));
    assert_eq!(out.iter().filter(|s| s.as_str() == SCALED_Y).count(), 1);
    assert_eq!(out.len(), 5);
}

#[test]
fn inverted_cutoff_is_passed_through() {
    let opts = TickLabelOptions {
        exp_cutoff: (5, -5),
        ..TickLabelOptions::default()
    };
    assert!(
        opts.tick_label_directive(Axis::X)
            .contains("relative*={5},relative style={std=5:-5}")
    );
}
