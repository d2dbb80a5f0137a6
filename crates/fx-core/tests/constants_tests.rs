// Sanity checks for the documented effect defaults.

use fx_core::*;

#[test]
fn starfield_defaults_match_documented_values() {
    let config = StarfieldConfig::default();
    assert_eq!(config.quantity, 100);
    assert_eq!(config.speed, 1.0);
    assert_eq!(config.warp_factor, 10.0);
    assert_eq!(config.opacity, 0.1);
    assert_eq!(config.easing, 1.0);
    assert!(!config.mouse_adjust);
    assert!(!config.tilt_adjust);
    assert!(!config.click_to_warp);
    assert!(!config.hyperspace);
    assert!(config.validate().is_ok());
}

#[test]
fn trail_defaults_match_documented_values() {
    let config = TrailConfig::default();
    assert_eq!(config.trails, 20);
    assert_eq!(config.size, 50);
    assert_eq!(config.friction, 0.5);
    assert_eq!(config.dampening, 0.25);
    assert_eq!(config.tension, 0.98);
    assert!(config.validate().is_ok());
}

#[test]
fn jitter_spans_keep_coefficients_positive() {
    // worst-case jitter must not drive a trail's spring or friction negative
    assert!(TRAIL_SPRING_BASE + SPRING_JITTER_BIAS > 0.0);
    assert!(DEFAULT_TRAIL_FRICTION + FRICTION_JITTER_BIAS > 0.0);
}
