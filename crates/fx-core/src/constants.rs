// Shared tuning constants and documented defaults for both effects.

// Particle field defaults
pub const DEFAULT_STAR_COLOR: &str = "rgba(255,255,255,1)";
pub const DEFAULT_BG_COLOR: &str = "rgba(0,0,0,1)";
pub const DEFAULT_STAR_QUANTITY: usize = 100;
pub const DEFAULT_BASE_SPEED: f32 = 1.0;
pub const DEFAULT_WARP_FACTOR: f32 = 10.0; // speed multiplier while in hyperspace
pub const DEFAULT_WARP_OPACITY: f32 = 0.1; // background fade alpha while in hyperspace
pub const DEFAULT_STEER_EASING: f32 = 1.0;

// Steering is truncated to an integer and shifted right by this many bits,
// giving the coarse-quantized "retro" drift instead of smooth interpolation.
pub const STEER_SHIFT: u32 = 4;

// Device tilt: degrees of beta/gamma to virtual-cursor pixels off center
pub const TILT_SCALE: f32 = 5.0;

// Cursor trail defaults
pub const DEFAULT_TRAIL_COUNT: usize = 20;
pub const DEFAULT_TRAIL_SIZE: usize = 50; // nodes per trail
pub const DEFAULT_TRAIL_FRICTION: f32 = 0.5;
pub const DEFAULT_TRAIL_DAMPENING: f32 = 0.25;
pub const DEFAULT_TRAIL_TENSION: f32 = 0.98; // spring decay along the chain

// Per-trail spring stiffness ramp and creation-time jitter
pub const TRAIL_SPRING_BASE: f32 = 0.4;
pub const TRAIL_SPRING_SPAN: f32 = 0.025; // added across the trail index range
pub const SPRING_JITTER_SPAN: f32 = 0.1;
pub const SPRING_JITTER_BIAS: f32 = -0.02;
pub const FRICTION_JITTER_SPAN: f32 = 0.01;
pub const FRICTION_JITTER_BIAS: f32 = -0.002;

// Hue oscillator driving the trail stroke color
pub const HUE_OFFSET: f32 = 285.0;
pub const HUE_AMPLITUDE: f32 = 85.0;
pub const HUE_FREQUENCY: f32 = 0.0015; // phase advance per frame
