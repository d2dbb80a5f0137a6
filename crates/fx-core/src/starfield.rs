//! Particle field simulation: a pool of stars flying toward the viewer,
//! projected onto the canvas plane and drawn as short motion-blur segments.
//!
//! The pool is fixed-size; stars leaving the visible volume wrap to the
//! opposite bound and skip one frame of drawing so the wrap never strokes a
//! spurious full-screen streak.

use glam::{Vec2, Vec3};
use rand::prelude::*;

use crate::constants::*;
use crate::error::ConfigError;
use crate::surface::Surface;

#[derive(Clone, Debug)]
pub struct StarfieldConfig {
    pub star_color: String,
    pub bg_color: String,
    /// Steer the field away from the pointer.
    pub mouse_adjust: bool,
    /// Steer the field from device tilt instead of the pointer.
    pub tilt_adjust: bool,
    /// Divisor applied to the steering vector before quantization.
    pub easing: f32,
    /// Pointer down/up toggles hyperspace.
    pub click_to_warp: bool,
    /// Start in hyperspace.
    pub hyperspace: bool,
    /// Speed multiplier while in hyperspace.
    pub warp_factor: f32,
    /// Background fade alpha while in hyperspace.
    pub opacity: f32,
    pub speed: f32,
    pub quantity: usize,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            star_color: DEFAULT_STAR_COLOR.to_owned(),
            bg_color: DEFAULT_BG_COLOR.to_owned(),
            mouse_adjust: false,
            tilt_adjust: false,
            easing: DEFAULT_STEER_EASING,
            click_to_warp: false,
            hyperspace: false,
            warp_factor: DEFAULT_WARP_FACTOR,
            opacity: DEFAULT_WARP_OPACITY,
            speed: DEFAULT_BASE_SPEED,
            quantity: DEFAULT_STAR_QUANTITY,
        }
    }
}

impl StarfieldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quantity == 0 {
            return Err(ConfigError::ZeroQuantity);
        }
        if !(self.easing.is_finite() && self.easing > 0.0) {
            return Err(ConfigError::BadEasing(self.easing));
        }
        for (name, value) in [("speed", self.speed), ("warp_factor", self.warp_factor)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::BadCoefficient { name, value });
            }
        }
        Ok(())
    }
}

/// One star. `pos.z` is the depth coordinate; `prev` holds last frame's
/// projection so the draw pass can stroke a motion segment.
#[derive(Clone, Copy, Debug, Default)]
pub struct Star {
    pub pos: Vec3,
    pub proj: Vec2,
    pub prev: Vec2,
    /// Cleared for the frame in which any coordinate wrapped.
    pub visible: bool,
}

/// A drawable previous→current stroke with its depth-derived line width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
    pub width: f32,
}

pub struct Starfield {
    pub config: StarfieldConfig,
    pub stars: Vec<Star>,
    surface: Surface,
    hyperspace: bool,
    rng: StdRng,
}

impl Starfield {
    /// The pool starts empty; the first `resize` populates it.
    pub fn new(config: StarfieldConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let hyperspace = config.hyperspace;
        Ok(Self {
            config,
            stars: Vec::new(),
            surface: Surface::default(),
            hyperspace,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    #[inline]
    pub fn surface(&self) -> Surface {
        self.surface
    }

    #[inline]
    pub fn hyperspace(&self) -> bool {
        self.hyperspace
    }

    pub fn set_hyperspace(&mut self, on: bool) {
        self.hyperspace = on;
    }

    #[inline]
    pub fn effective_speed(&self) -> f32 {
        if self.hyperspace {
            self.config.speed * self.config.warp_factor
        } else {
            self.config.speed
        }
    }

    /// Canvas fill style for this frame: the configured background, or the
    /// low-opacity fade that leaves streaks while in hyperspace.
    pub fn fill_style(&self) -> String {
        if self.hyperspace {
            format!("rgba(0,0,0,{})", self.config.opacity)
        } else {
            self.config.bg_color.clone()
        }
    }

    /// Recompute surface state for a new canvas size. The pool is only
    /// (re)populated when its length does not match the configured quantity,
    /// so resizing never discards star positions.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.surface = Surface::from_size(width, height);
        if self.stars.len() != self.config.quantity {
            self.populate();
        }
        log::debug!(
            "[starfield] resized to {}x{} ({} stars)",
            width,
            height,
            self.stars.len()
        );
    }

    fn populate(&mut self) {
        let s = self.surface;
        let quantity = self.config.quantity;
        self.stars = (0..quantity)
            .map(|_| Star {
                pos: Vec3::new(
                    self.rng.gen::<f32>() * s.width * 2.0 - s.half_x * 2.0,
                    self.rng.gen::<f32>() * s.height * 2.0 - s.half_y * 2.0,
                    (self.rng.gen::<f32>() * s.depth).round(),
                ),
                proj: Vec2::ZERO,
                prev: Vec2::ZERO,
                visible: true,
            })
            .collect();
    }

    /// Map a device-orientation reading to a virtual cursor position.
    pub fn tilt_cursor(&self, beta: f32, gamma: f32) -> Vec2 {
        Vec2::new(
            self.surface.width / 2.0 + gamma * TILT_SCALE,
            self.surface.height / 2.0 + beta * TILT_SCALE,
        )
    }

    /// Advance every star one frame, steering the planar drift from `cursor`.
    pub fn update(&mut self, cursor: Vec2) {
        let s = self.surface;
        let center = s.center();
        let steer = (cursor - center) / self.config.easing;
        let step = Vec2::new(quantize(steer.x), quantize(steer.y));
        let speed = self.effective_speed();
        let bound = Vec2::new(s.half_x * 2.0, s.half_y * 2.0);
        let span = Vec2::new(s.width * 2.0, s.height * 2.0);
        let ratio = self.config.quantity as f32 / 2.0;

        for star in &mut self.stars {
            star.visible = true;
            star.prev = star.proj;

            star.pos.x += step.x;
            if star.pos.x > bound.x {
                star.pos.x -= span.x;
                star.visible = false;
            }
            if star.pos.x < -bound.x {
                star.pos.x += span.x;
                star.visible = false;
            }

            star.pos.y += step.y;
            if star.pos.y > bound.y {
                star.pos.y -= span.y;
                star.visible = false;
            }
            if star.pos.y < -bound.y {
                star.pos.y += span.y;
                star.visible = false;
            }

            star.pos.z -= speed;
            if star.pos.z > s.depth {
                star.pos.z -= s.depth;
                star.visible = false;
            }
            if star.pos.z <= 0.0 {
                star.pos.z += s.depth;
                star.visible = false;
            }

            star.proj = center + star.pos.truncate() / star.pos.z * ratio;
        }
    }

    /// Drawable segments for the current frame: stars whose wrap flag is set
    /// and whose previous and current projections both lie inside the canvas.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        let s = self.surface;
        let ratio = s.depth_ratio();
        self.stars.iter().filter_map(move |star| {
            (star.visible && s.contains(star.prev) && s.contains(star.proj)).then_some(Segment {
                from: star.prev,
                to: star.proj,
                width: (1.0 - ratio * star.pos.z) * 2.0,
            })
        })
    }
}

/// Truncate-then-shift quantization of a steering component. Matches signed
/// integer `>> 4`: truncation toward zero, then a flooring divide by 16.
#[inline]
fn quantize(v: f32) -> f32 {
    ((v as i32) >> STEER_SHIFT) as f32
}
