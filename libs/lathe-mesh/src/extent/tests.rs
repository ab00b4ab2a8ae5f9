//! Tests for extents, terminations and texture spans.

use super::*;
use approx::assert_relative_eq;

fn span(i: usize, n: usize, lower: bool, upper: bool) -> (f64, f64, f64) {
    let s = texture_span(i, n, lower, upper, 0.5).unwrap();
    (s.u0, s.u1, s.v)
}

#[test]
fn texture_span_without_cusps_covers_full_width() {
    assert_eq!(span(0, 4, false, false), (0.0, 1.0, 1.0));
    assert_eq!(span(4, 4, false, false), (0.0, 1.0, 0.0));
    assert_eq!(span(2, 4, false, false), (0.0, 1.0, 0.5));
}

#[test]
fn texture_span_collapses_at_cusps() {
    let (u0, u1, _) = span(0, 4, true, false);
    assert_eq!(u0, u1);
    assert_relative_eq!(u0, 0.5);

    let (u0, u1, v) = span(4, 4, false, true);
    assert_eq!(u0, u1);
    assert_eq!(v, 0.0);

    let (u0, u1, _) = span(1, 4, true, false);
    assert_relative_eq!(u1 - u0, 0.25);
}

#[test]
fn texture_span_with_both_cusps_peaks_in_the_middle() {
    let (u0, u1, _) = span(2, 4, true, true);
    assert_relative_eq!(u1 - u0, 1.0);
    let (u0, u1, _) = span(4, 4, true, true);
    assert_relative_eq!(u1 - u0, 0.0);
}

#[test]
fn texture_span_alignment_shifts_narrow_spans() {
    let left = texture_span(1, 4, true, false, 0.0).unwrap();
    assert_eq!(left.u0, 0.0);
    let right = texture_span(1, 4, true, false, 1.0).unwrap();
    assert_relative_eq!(right.u1, 1.0);
}

#[test]
fn texture_span_rejects_bad_input() {
    assert!(texture_span(0, 0, false, false, 0.5).is_err());
    assert!(texture_span(5, 4, false, false, 0.5).is_err());
    assert!(texture_span(0, 4, false, false, -0.1).is_err());
}

#[test]
fn extent_validation() {
    assert!(Extent::full().validate().is_ok());
    assert!(Extent::new(0.5, 0.25).validate().is_err());
    assert!(Extent::new(0.0, 1.5).validate().is_err());
    assert!(Extent::new(f64::NAN, 1.0).validate().is_err());
    assert!(Extent::new(0.25, 1.25).is_full());
    assert!(!Extent::new(0.0, 0.5).is_full());
}

#[test]
fn extent_lerp_and_names() {
    let e = Extent::new(0.25, 0.75).with_names("side0", "side1");
    assert_relative_eq!(e.lerp(0.5), 0.5);
    assert_eq!(e.name(0), "side0");
    assert_eq!(e.name(1), "side1");
}

#[test]
fn terminations() {
    assert!(!Termination::none().is_capped());
    assert!(Termination::flat(true).banded);
    assert_eq!(Termination::center().kind, TerminationKind::Center);
    let e = Extent::full().with_ends(Termination::flat(false));
    assert_eq!(e.termination(0), e.termination(1));
}

#[test]
fn extent_decodes_from_json_with_defaults() {
    let e: Extent = serde_json::from_str(
        r#"{ "start": 0.0, "end": 0.5, "upper": { "kind": "center" } }"#,
    )
    .unwrap();
    assert_eq!(e.lower, Termination::none());
    assert_eq!(e.upper.kind, TerminationKind::Center);
    assert!(!e.upper.banded);
    assert_eq!(e.name(0), "end0");
}
