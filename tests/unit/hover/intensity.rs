use super::*;

#[test]
fn on_center_is_full_intensity() {
    assert_eq!(intensity(42.0, 42.0), 1.0);
    assert_eq!(target_weight(&WeightRange::TITLE, 42.0, 42.0), 900.0);
}

#[test]
fn reference_values_at_fixed_distances() {
    let at_50 = intensity(0.0, 50.0);
    assert!((at_50 - (-2.5f64).exp()).abs() < 1e-15);
    let w = target_weight(&WeightRange::TITLE, 100.0, 150.0);
    assert!((w - 441.042_499_312).abs() < 1e-6, "{w}");

    let w = target_weight(&WeightRange::SUBTITLE, 10.0, 0.0);
    // 100 + 300 * exp(-0.1)
    assert!((w - 371.451_225_411).abs() < 1e-6, "{w}");
}

#[test]
fn symmetric_in_direction() {
    assert_eq!(intensity(10.0, 30.0), intensity(50.0, 30.0));
}

#[test]
fn monotonically_non_increasing_and_bounded() {
    for range in [WeightRange::SUBTITLE, WeightRange::TITLE] {
        let mut prev = f64::INFINITY;
        for step in 0..400 {
            let d = f64::from(step) * 0.75;
            let w = target_weight(&range, d, 0.0);
            assert!(w <= prev, "not monotone at d={d}");
            assert!(range.contains(w), "{w} outside range at d={d}");
            prev = w;
        }
    }
}

#[test]
fn far_away_settles_on_min() {
    assert_eq!(intensity(0.0, 1.0e6), 0.0);
    assert_eq!(target_weight(&WeightRange::SUBTITLE, 0.0, 1.0e6), 100.0);
}

#[test]
fn glyph_center_is_container_relative() {
    let container = Rect::new(100.0, 0.0, 500.0, 50.0);
    let glyph = Rect::new(140.0, 0.0, 160.0, 50.0);
    assert_eq!(glyph_center(container, glyph), 50.0);
}
