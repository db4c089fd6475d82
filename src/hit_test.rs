#![allow(clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn square() -> Bounds {
    Bounds::new(0.0, 0.0, 100.0, 100.0)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// ControlPoint
// =============================================================

#[test]
fn control_positions_match_bounds_corners() {
    let b = Bounds::new(10.0, 20.0, 30.0, 40.0);
    assert_eq!(ControlPoint::TopLeft.position(&b), pt(10.0, 20.0));
    assert_eq!(ControlPoint::TopRight.position(&b), pt(40.0, 20.0));
    assert_eq!(ControlPoint::BottomLeft.position(&b), pt(10.0, 60.0));
    assert_eq!(ControlPoint::BottomRight.position(&b), pt(40.0, 60.0));
}

#[test]
fn opposite_is_an_involution() {
    for cp in ControlPoint::ALL {
        assert_ne!(cp.opposite(), cp);
        assert_eq!(cp.opposite().opposite(), cp);
    }
}

#[test]
fn cursors_follow_diagonals() {
    assert_eq!(ControlPoint::TopLeft.cursor(), "nwse-resize");
    assert_eq!(ControlPoint::BottomRight.cursor(), "nwse-resize");
    assert_eq!(ControlPoint::TopRight.cursor(), "nesw-resize");
    assert_eq!(ControlPoint::BottomLeft.cursor(), "nesw-resize");
}

#[test]
fn handle_positions_in_tie_break_order() {
    let handles = handle_positions(&square());
    let kinds: Vec<_> = handles.iter().map(|(cp, _)| *cp).collect();
    assert_eq!(kinds, ControlPoint::ALL.to_vec());
    assert_eq!(handles[3].1, pt(100.0, 100.0));
}

// =============================================================
// hit_control
// =============================================================

#[test]
fn hit_exactly_on_each_corner() {
    let b = square();
    assert_eq!(hit_control(&b, pt(0.0, 0.0)), Some(ControlPoint::TopLeft));
    assert_eq!(hit_control(&b, pt(100.0, 0.0)), Some(ControlPoint::TopRight));
    assert_eq!(hit_control(&b, pt(0.0, 100.0)), Some(ControlPoint::BottomLeft));
    assert_eq!(hit_control(&b, pt(100.0, 100.0)), Some(ControlPoint::BottomRight));
}

#[test]
fn hit_within_twenty_units() {
    let b = square();
    assert_eq!(hit_control(&b, pt(12.0, 16.0)), Some(ControlPoint::TopLeft));
    assert_eq!(hit_control(&b, pt(120.0, 100.0)), Some(ControlPoint::BottomRight));
    assert_eq!(hit_control(&b, pt(86.0, -14.0)), Some(ControlPoint::TopRight));
}

#[test]
fn hit_radius_is_true_distance_not_squared() {
    // 10 units away: inside a 20-unit radius, outside a sqrt(20) radius.
    assert_eq!(hit_control(&square(), pt(-10.0, 0.0)), Some(ControlPoint::TopLeft));
}

#[test]
fn miss_beyond_twenty_units() {
    let b = square();
    assert_eq!(hit_control(&b, pt(-15.0, -15.0)), None);
    assert_eq!(hit_control(&b, pt(50.0, 50.0)), None);
    assert_eq!(hit_control(&b, pt(50.0, 0.0)), None);
    assert_eq!(hit_control(&b, pt(121.0, 100.0)), None);
}

#[test]
fn tiny_bounds_prefer_top_left() {
    let b = Bounds::new(0.0, 0.0, 4.0, 4.0);
    assert_eq!(hit_control(&b, pt(2.0, 2.0)), Some(ControlPoint::TopLeft));
}

#[test]
fn overlapping_handles_tie_break_top_right_before_bottoms() {
    let b = Bounds::new(0.0, 0.0, 30.0, 30.0);
    // Out of TopLeft's reach, inside both TopRight's and BottomRight's.
    assert_eq!(hit_control(&b, pt(25.0, 12.0)), Some(ControlPoint::TopRight));
}

// =============================================================
// scale_center
// =============================================================

#[test]
fn scale_center_is_opposite_corner() {
    let b = square();
    assert_eq!(scale_center(ControlPoint::TopLeft, &b), pt(100.0, 100.0));
    assert_eq!(scale_center(ControlPoint::TopRight, &b), pt(0.0, 100.0));
    assert_eq!(scale_center(ControlPoint::BottomLeft, &b), pt(100.0, 0.0));
    assert_eq!(scale_center(ControlPoint::BottomRight, &b), pt(0.0, 0.0));
}

// =============================================================
// scale_factor
// =============================================================

#[test]
fn bottom_right_uses_raw_ratio() {
    let f = scale_factor(ControlPoint::BottomRight, pt(0.0, 0.0), pt(100.0, 100.0), pt(150.0, 150.0));
    assert!(approx(f, 1.5));
}

#[test]
fn top_left_always_inverts() {
    let f = scale_factor(ControlPoint::TopLeft, pt(100.0, 100.0), pt(0.0, 0.0), pt(-50.0, -50.0));
    assert!(approx(f, 1.0 / 1.5));
}

#[test]
fn top_right_inverts_only_left_of_center() {
    let center = pt(0.0, 100.0);
    let right = scale_factor(ControlPoint::TopRight, center, pt(100.0, 0.0), pt(200.0, -100.0));
    assert!(approx(right, 2.0));
    let left = scale_factor(ControlPoint::TopRight, center, pt(100.0, 0.0), pt(-200.0, -100.0));
    assert!(approx(left, 0.5));
}

#[test]
fn bottom_left_inverts_only_right_of_center() {
    let center = pt(100.0, 0.0);
    let left = scale_factor(ControlPoint::BottomLeft, center, pt(0.0, 100.0), pt(-100.0, 200.0));
    assert!(approx(left, 2.0));
    let right = scale_factor(ControlPoint::BottomLeft, center, pt(0.0, 100.0), pt(300.0, 200.0));
    assert!(approx(right, 0.5));
}

#[test]
fn unchanged_pointer_is_identity() {
    for cp in ControlPoint::ALL {
        let f = scale_factor(cp, pt(100.0, 100.0), pt(0.0, 0.0), pt(0.0, 0.0));
        assert!(approx(f, 1.0), "{cp:?} gave {f}");
    }
}

#[test]
fn zero_previous_distance_is_identity() {
    let f = scale_factor(ControlPoint::BottomRight, pt(5.0, 5.0), pt(5.0, 5.0), pt(50.0, 50.0));
    assert_eq!(f, 1.0);
}

#[test]
fn collapse_onto_center_is_identity_for_inverting_corner() {
    let f = scale_factor(ControlPoint::TopLeft, pt(100.0, 100.0), pt(0.0, 0.0), pt(100.0, 100.0));
    assert_eq!(f, 1.0);
}

#[test]
fn factor_is_floored() {
    let f = scale_factor(ControlPoint::BottomRight, pt(0.0, 0.0), pt(100.0, 100.0), pt(1.0, 1.0));
    assert_eq!(f, MIN_SCALE_FACTOR);
    let f = scale_factor(ControlPoint::BottomRight, pt(0.0, 0.0), pt(100.0, 100.0), pt(0.0, 0.0));
    assert_eq!(f, MIN_SCALE_FACTOR);
}

#[test]
fn factor_has_no_ceiling() {
    let f = scale_factor(ControlPoint::BottomRight, pt(0.0, 0.0), pt(1.0, 0.0), pt(1000.0, 0.0));
    assert!(approx(f, 1000.0));
}

#[test]
fn nan_input_is_identity() {
    let f = scale_factor(ControlPoint::BottomRight, pt(0.0, 0.0), pt(1.0, 1.0), pt(f64::NAN, 0.0));
    assert_eq!(f, 1.0);
}
