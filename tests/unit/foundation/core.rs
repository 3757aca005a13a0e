use super::*;

#[test]
fn integral_values_have_no_fraction() {
    assert_eq!(format_number(150.0), "150");
    assert_eq!(format_number(100.0), "100");
    assert_eq!(format_number(-0.0), "0");
}

#[test]
fn fractions_round_trip() {
    for v in [0.35, 0.65, 47.16565064154565, 1.0 / 3.0] {
        let s = format_number(v);
        assert_eq!(s.parse::<f64>().unwrap(), v);
    }
}

#[test]
fn non_finite_values_use_browser_spelling() {
    assert_eq!(format_number(f64::NAN), "NaN");
    assert_eq!(format_number(f64::INFINITY), "Infinity");
    assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    assert!(format_number(f64::INFINITY).parse::<f64>().unwrap().is_infinite());
}

#[test]
fn extreme_magnitudes_print_in_plain_decimal() {
    assert_eq!(format_number(1e-7), "0.0000001");
    assert_eq!(format_number(1e21), "1000000000000000000000");
    assert_eq!(format_number(1e21).parse::<f64>().unwrap(), 1e21);
}

#[test]
fn canvas_rect_is_the_unit_canvas() {
    let r = canvas_rect();
    assert_eq!(r.area(), CANVAS_SIZE * CANVAS_SIZE);
    assert_eq!(r.origin(), kurbo::Point::ZERO);
}
