// Host-side tests for the hue oscillator.

use fx_core::*;

#[test]
fn output_is_a_sine_of_frame_count() {
    let mut osc = Oscillator::new(0.25, 285.0, 0.0015, 85.0);
    for n in 1..=1000 {
        let value = osc.update();
        let expected = 285.0 + (0.25 + n as f32 * 0.0015).sin() * 85.0;
        // f32 phase accumulation drifts slightly from the closed form
        assert!(
            (value - expected).abs() < 0.05,
            "frame {n}: {value} vs {expected}"
        );
    }
}

#[test]
fn output_stays_within_offset_plus_minus_amplitude() {
    let mut osc = Oscillator::hue(42);
    for _ in 0..10_000 {
        let value = osc.update();
        assert!(value >= HUE_OFFSET - HUE_AMPLITUDE);
        assert!(value <= HUE_OFFSET + HUE_AMPLITUDE);
    }
}

#[test]
fn seeded_phase_is_deterministic() {
    let a = Oscillator::hue(7).phase();
    let b = Oscillator::hue(7).phase();
    let c = Oscillator::hue(8).phase();
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!((0.0..std::f32::consts::TAU).contains(&a));
}
