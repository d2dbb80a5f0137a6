use rand::prelude::*;

use crate::constants::{HUE_AMPLITUDE, HUE_FREQUENCY, HUE_OFFSET};

/// Slow sinusoidal oscillator; drives the trail stroke hue.
///
/// The phase advances by `frequency` once per frame, so the output is a
/// periodic function of frame count bounded by `offset ± amplitude`.
#[derive(Clone, Debug)]
pub struct Oscillator {
    phase: f32,
    offset: f32,
    frequency: f32,
    amplitude: f32,
}

impl Oscillator {
    pub fn new(phase: f32, offset: f32, frequency: f32, amplitude: f32) -> Self {
        Self {
            phase,
            offset,
            frequency,
            amplitude,
        }
    }

    /// The hue oscillator used by the cursor trail, with a seeded random
    /// initial phase so repeated mounts start at different colors.
    pub fn hue(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let phase = rng.gen::<f32>() * std::f32::consts::TAU;
        Self::new(phase, HUE_OFFSET, HUE_FREQUENCY, HUE_AMPLITUDE)
    }

    /// Advance one frame and return the current value.
    pub fn update(&mut self) -> f32 {
        self.phase += self.frequency;
        self.offset + self.phase.sin() * self.amplitude
    }

    #[inline]
    pub fn phase(&self) -> f32 {
        self.phase
    }
}
