use approx::assert_relative_eq;
use scatter_rs::core::{AxisDomain, LinearScale, PixelRange};

#[test]
fn scale_round_trip_within_tolerance() {
    let domain = AxisDomain::new(8.1, 19.1).expect("valid domain");
    let scale = LinearScale::new(domain, PixelRange::new(0.0, 400.0)).expect("valid scale");

    let original = 12.5;
    let px = scale.value_to_pixel(original).expect("to pixel");
    let recovered = scale.pixel_to_value(px).expect("from pixel");

    assert!((recovered - original).abs() <= 1e-9);
}

#[test]
fn scale_maps_domain_endpoints_to_range_endpoints() {
    let domain = AxisDomain::new(10.0, 110.0).expect("valid domain");
    let scale = LinearScale::new(domain, PixelRange::new(0.0, 374.0)).expect("valid scale");

    assert_relative_eq!(scale.value_to_pixel(10.0).expect("min"), 0.0);
    assert_relative_eq!(scale.value_to_pixel(110.0).expect("max"), 374.0);
}

#[test]
fn inverted_range_maps_larger_values_to_smaller_pixels() {
    let domain = AxisDomain::new(8.6, 13.3).expect("valid domain");
    let scale = LinearScale::new(domain, PixelRange::new(300.0, 0.0)).expect("valid scale");

    let low = scale.value_to_pixel(8.6).expect("low");
    let high = scale.value_to_pixel(13.3).expect("high");

    assert_relative_eq!(low, 300.0);
    assert_relative_eq!(high, 0.0);
}

#[test]
fn out_of_domain_values_extrapolate_instead_of_clamping() {
    let domain = AxisDomain::new(0.0, 10.0).expect("valid domain");
    let scale = LinearScale::new(domain, PixelRange::new(0.0, 100.0)).expect("valid scale");

    assert_relative_eq!(scale.value_to_pixel(-5.0).expect("below"), -50.0);
    assert_relative_eq!(scale.value_to_pixel(15.0).expect("above"), 150.0);
}

#[test]
fn degenerate_domain_is_rejected() {
    assert!(AxisDomain::new(5.0, 5.0).is_err());
    assert!(AxisDomain::new(7.0, 3.0).is_err());
    assert!(AxisDomain::new(f64::NAN, 3.0).is_err());
}

#[test]
fn degenerate_pixel_range_is_rejected() {
    let domain = AxisDomain::new(0.0, 1.0).expect("valid domain");
    assert!(LinearScale::new(domain, PixelRange::new(50.0, 50.0)).is_err());
    assert!(LinearScale::new(domain, PixelRange::new(f64::INFINITY, 0.0)).is_err());
}

#[test]
fn non_finite_inputs_are_rejected() {
    let domain = AxisDomain::new(0.0, 1.0).expect("valid domain");
    let scale = LinearScale::new(domain, PixelRange::new(0.0, 100.0)).expect("valid scale");

    assert!(scale.value_to_pixel(f64::NAN).is_err());
    assert!(scale.pixel_to_value(f64::INFINITY).is_err());
}
