// Host-side tests for the particle field simulation.

use fx_core::*;
use glam::{Vec2, Vec3};

fn make_field(quantity: usize) -> Starfield {
    let config = StarfieldConfig {
        quantity,
        ..Default::default()
    };
    let mut field = Starfield::new(config, 42).unwrap();
    field.resize(800.0, 600.0);
    field
}

fn center(field: &Starfield) -> Vec2 {
    field.surface().center()
}

#[test]
fn pool_length_matches_quantity_across_resizes() {
    let mut field = make_field(10);
    assert_eq!(field.stars.len(), 10);
    for (w, h) in [(1024.0, 768.0), (320.0, 480.0), (1920.0, 1080.0)] {
        field.resize(w, h);
        assert_eq!(field.stars.len(), 10);
    }
}

#[test]
fn resize_preserves_pool_contents() {
    let mut field = make_field(10);
    let before: Vec<Vec3> = field.stars.iter().map(|s| s.pos).collect();
    field.resize(1024.0, 768.0);
    let after: Vec<Vec3> = field.stars.iter().map(|s| s.pos).collect();
    assert_eq!(before, after);
}

#[test]
fn surface_state_follows_resize() {
    let field = make_field(10);
    let s = field.surface();
    assert_eq!(s.half_x, 400.0);
    assert_eq!(s.half_y, 300.0);
    assert_eq!(s.depth, 700.0);
    assert!(s.contains(Vec2::new(1.0, 1.0)));
    assert!(!s.contains(Vec2::new(0.0, 1.0)));
    assert!(!s.contains(Vec2::new(800.0, 1.0)));
}

#[test]
fn update_advances_every_depth_by_speed_and_reprojects() {
    // quantity=10 so the projection ratio is exactly 5; cursor at center
    // means zero steering
    let mut field = make_field(10);
    let c = center(&field);
    let depth = field.surface().depth;
    let before: Vec<Vec3> = field.stars.iter().map(|s| s.pos).collect();
    field.update(c);
    for (star, old) in field.stars.iter().zip(&before) {
        let expected_z = if old.z - 1.0 <= 0.0 {
            old.z - 1.0 + depth
        } else {
            old.z - 1.0
        };
        assert!((star.pos.z - expected_z).abs() < 1e-3);
        // planar position untouched by a centered cursor
        assert_eq!(star.pos.x, old.x);
        assert_eq!(star.pos.y, old.y);
        let expected_proj = c + star.pos.truncate() / star.pos.z * 5.0;
        assert!((star.proj - expected_proj).length() < 1e-3);
    }
}

#[test]
fn depth_at_or_below_zero_wraps_positive_and_hides_for_one_frame() {
    let mut field = make_field(10);
    let c = center(&field);
    let depth = field.surface().depth;
    field.stars[0].pos.z = 0.5;
    field.update(c);
    assert!((field.stars[0].pos.z - (depth - 0.5)).abs() < 1e-3);
    assert!(field.stars[0].pos.z > 0.0);
    assert!(!field.stars[0].visible);
    field.update(c);
    assert!(field.stars[0].visible);
}

#[test]
fn planar_overflow_wraps_by_twice_the_viewport_extent() {
    let mut field = make_field(10);
    let c = center(&field);
    let s = field.surface();
    field.stars[0].pos.x = s.half_x * 2.0 + 3.0;
    field.stars[1].pos.y = -(s.half_y * 2.0) - 3.0;
    field.update(c);
    assert!((field.stars[0].pos.x - (s.half_x * 2.0 + 3.0 - s.width * 2.0)).abs() < 1e-3);
    assert!(!field.stars[0].visible);
    assert!((field.stars[1].pos.y - (-(s.half_y * 2.0) - 3.0 + s.height * 2.0)).abs() < 1e-3);
    assert!(!field.stars[1].visible);
}

#[test]
fn steering_is_coarse_quantized() {
    let mut field = make_field(10);
    let c = center(&field);
    // pin the star well inside the wrap bounds
    field.stars[0].pos = Vec3::new(0.0, 0.0, 350.0);

    // positive offsets below the quantization step produce no drift
    field.update(c + Vec2::new(15.0, 8.0));
    assert_eq!(field.stars[0].pos.x, 0.0);
    assert_eq!(field.stars[0].pos.y, 0.0);

    // 32 >> 4 = 2; the arithmetic shift floors, so -33 >> 4 = -3
    field.update(c + Vec2::new(32.0, -33.0));
    assert_eq!(field.stars[0].pos.x, 2.0);
    assert_eq!(field.stars[0].pos.y, -3.0);
}

#[test]
fn easing_divides_steering_before_quantization() {
    let config = StarfieldConfig {
        quantity: 10,
        easing: 2.0,
        ..Default::default()
    };
    let mut field = Starfield::new(config, 42).unwrap();
    field.resize(800.0, 600.0);
    let c = center(&field);
    field.stars[0].pos = Vec3::new(0.0, 0.0, 350.0);
    field.update(c + Vec2::new(64.0, 0.0));
    // 64 / 2 = 32, then >> 4
    assert_eq!(field.stars[0].pos.x, 2.0);
}

#[test]
fn hyperspace_scales_speed_and_fades_background() {
    let mut field = make_field(10);
    assert_eq!(field.effective_speed(), 1.0);
    assert_eq!(field.fill_style(), DEFAULT_BG_COLOR);
    field.set_hyperspace(true);
    assert_eq!(field.effective_speed(), 10.0);
    assert_eq!(field.fill_style(), "rgba(0,0,0,0.1)");
    field.set_hyperspace(false);
    assert_eq!(field.effective_speed(), 1.0);
}

#[test]
fn segments_require_visibility_and_both_endpoints_in_bounds() {
    let mut field = make_field(3);
    let s = field.surface();
    // in-bounds, visible
    field.stars[0] = Star {
        pos: Vec3::new(0.0, 0.0, 350.0),
        proj: Vec2::new(110.0, 110.0),
        prev: Vec2::new(100.0, 100.0),
        visible: true,
    };
    // wrapped this frame
    field.stars[1] = Star {
        prev: Vec2::new(100.0, 100.0),
        proj: Vec2::new(110.0, 110.0),
        pos: Vec3::new(0.0, 0.0, 350.0),
        visible: false,
    };
    // previous projection off-canvas
    field.stars[2] = Star {
        prev: Vec2::new(-5.0, 100.0),
        proj: Vec2::new(110.0, 110.0),
        pos: Vec3::new(0.0, 0.0, 350.0),
        visible: true,
    };
    let segments: Vec<Segment> = field.segments().collect();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].from, Vec2::new(100.0, 100.0));
    assert_eq!(segments[0].to, Vec2::new(110.0, 110.0));
    // width shrinks with depth: (1 - z/depth) * 2
    let expected_width = (1.0 - 350.0 / s.depth) * 2.0;
    assert!((segments[0].width - expected_width).abs() < 1e-4);
}

#[test]
fn tilt_maps_orientation_to_virtual_cursor() {
    let field = make_field(10);
    let cursor = field.tilt_cursor(10.0, -4.0);
    assert_eq!(cursor, Vec2::new(400.0 - 20.0, 300.0 + 50.0));
}

#[test]
fn invalid_configs_are_rejected() {
    let bad_quantity = StarfieldConfig {
        quantity: 0,
        ..Default::default()
    };
    assert_eq!(
        Starfield::new(bad_quantity, 1).err(),
        Some(ConfigError::ZeroQuantity)
    );

    let bad_easing = StarfieldConfig {
        easing: 0.0,
        ..Default::default()
    };
    assert!(matches!(
        Starfield::new(bad_easing, 1).err(),
        Some(ConfigError::BadEasing(_))
    ));
}
