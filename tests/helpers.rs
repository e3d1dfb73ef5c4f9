use schnauzer::{clamp, parse_position, Point};

#[test]
fn clamp_keeps_inner_value() {
    assert_eq!(clamp(10, 0, 20), 10);
}

#[test]
fn clamp_limits_low_and_high() {
    assert_eq!(clamp(-1, 0, 1), 0);
    assert_eq!(clamp(2, 0, 1), 1);
}

#[test]
fn clamp_with_empty_range_returns_low() {
    assert_eq!(clamp(5, 10, 3), 10);
    assert_eq!(clamp(-5, 10, 3), 10);
}

#[test]
fn position_from_two_integers() {
    assert_eq!(parse_position(&["300", "840"]), Some(Point::new(300, 840)));
}

#[test]
fn position_ignores_surrounding_whitespace_and_extra_args() {
    assert_eq!(parse_position(&[" -20 ", "7", "junk"]), Some(Point::new(-20, 7)));
}

#[test]
fn position_needs_both_coordinates() {
    assert_eq!(parse_position(&["300"]), None);
    assert_eq!(parse_position::<&str>(&[]), None);
}

#[test]
fn position_rejects_non_integers() {
    assert_eq!(parse_position(&["3.5", "10"]), None);
    assert_eq!(parse_position(&["left", "10"]), None);
}
