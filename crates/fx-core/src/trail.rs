//! Cursor trail simulation: several spring-connected polylines chase a shared
//! target point with damped, delayed motion.
//!
//! Each trail's coefficients are jittered at creation from a seeded RNG so the
//! trails desynchronize visually; node counts are fixed at configuration time.

use glam::Vec2;
use rand::prelude::*;

use crate::constants::*;
use crate::error::ConfigError;

#[derive(Clone, Copy, Debug)]
pub struct TrailConfig {
    pub trails: usize,
    /// Nodes per trail.
    pub size: usize,
    pub friction: f32,
    /// Fraction of the predecessor's velocity inherited each step.
    pub dampening: f32,
    /// Geometric spring decay along the chain.
    pub tension: f32,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            trails: DEFAULT_TRAIL_COUNT,
            size: DEFAULT_TRAIL_SIZE,
            friction: DEFAULT_TRAIL_FRICTION,
            dampening: DEFAULT_TRAIL_DAMPENING,
            tension: DEFAULT_TRAIL_TENSION,
        }
    }
}

impl TrailConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trails == 0 {
            return Err(ConfigError::ZeroTrails);
        }
        // The midpoint-curve draw needs a head, a control and an endpoint.
        if self.size < 3 {
            return Err(ConfigError::TrailTooShort(self.size));
        }
        for (name, value) in [
            ("friction", self.friction),
            ("dampening", self.dampening),
            ("tension", self.tension),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::BadCoefficient { name, value });
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TrailNode {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// One polyline. Spring stiffness and friction carry the creation-time jitter.
#[derive(Clone, Debug)]
pub struct Trail {
    spring: f32,
    friction: f32,
    nodes: Vec<TrailNode>,
}

impl Trail {
    fn new(spring_base: f32, config: &TrailConfig, anchor: Vec2, rng: &mut StdRng) -> Self {
        let spring = spring_base + SPRING_JITTER_SPAN * rng.gen::<f32>() + SPRING_JITTER_BIAS;
        let friction =
            config.friction + FRICTION_JITTER_SPAN * rng.gen::<f32>() + FRICTION_JITTER_BIAS;
        Self {
            spring,
            friction,
            nodes: vec![
                TrailNode {
                    pos: anchor,
                    vel: Vec2::ZERO,
                };
                config.size
            ],
        }
    }

    #[inline]
    pub fn nodes(&self) -> &[TrailNode] {
        &self.nodes
    }

    #[inline]
    pub fn spring(&self) -> f32 {
        self.spring
    }

    #[inline]
    pub fn friction(&self) -> f32 {
        self.friction
    }

    /// One integration step. The head chases `target`; each later node chases
    /// its already-updated predecessor with a tension-decayed spring and a
    /// damped share of the predecessor's velocity.
    fn update(&mut self, target: Vec2, dampening: f32, tension: f32) {
        let mut spring = self.spring;
        let head = &mut self.nodes[0];
        head.vel += (target - head.pos) * spring;

        for i in 0..self.nodes.len() {
            if i > 0 {
                let prev = self.nodes[i - 1];
                let node = &mut self.nodes[i];
                node.vel += (prev.pos - node.pos) * spring;
                node.vel += prev.vel * dampening;
            }
            let node = &mut self.nodes[i];
            node.vel *= self.friction;
            node.pos += node.vel;
            spring *= tension;
        }
    }

    /// Smoothed draw path: quadratic curves through consecutive node
    /// midpoints, ending exactly on the last node.
    pub fn path(&self) -> TrailPath {
        let n = &self.nodes;
        let last = n.len() - 1;
        let mut curves = Vec::with_capacity(last);
        for i in 1..last - 1 {
            curves.push(QuadCurve {
                ctrl: n[i].pos,
                to: (n[i].pos + n[i + 1].pos) * 0.5,
            });
        }
        curves.push(QuadCurve {
            ctrl: n[last - 1].pos,
            to: n[last].pos,
        });
        TrailPath {
            start: n[0].pos,
            curves,
        }
    }
}

/// A quadratic Bézier leg of a trail path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadCurve {
    pub ctrl: Vec2,
    pub to: Vec2,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrailPath {
    pub start: Vec2,
    pub curves: Vec<QuadCurve>,
}

/// The full effect state: all trails plus the shared chase target.
///
/// Starts idle (no trails); `arm` instantiates them anchored at the pointer
/// and later `set_target` calls only retarget.
pub struct CursorTrails {
    pub config: TrailConfig,
    lines: Vec<Trail>,
    target: Vec2,
    rng: StdRng,
}

impl CursorTrails {
    pub fn new(config: TrailConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            lines: Vec::new(),
            target: Vec2::ZERO,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        !self.lines.is_empty()
    }

    #[inline]
    pub fn lines(&self) -> &[Trail] {
        &self.lines
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Rebuild every trail anchored at `at`. Called when the pointer first
    /// enters tracking.
    pub fn arm(&mut self, at: Vec2) {
        self.target = at;
        let trails = self.config.trails;
        let config = self.config;
        self.lines = (0..trails)
            .map(|i| {
                let spring_base = TRAIL_SPRING_BASE + (i as f32 / trails as f32) * TRAIL_SPRING_SPAN;
                Trail::new(spring_base, &config, at, &mut self.rng)
            })
            .collect();
        log::info!("[trail] armed {} trails at {:.0},{:.0}", trails, at.x, at.y);
    }

    pub fn set_target(&mut self, at: Vec2) {
        self.target = at;
    }

    /// Advance every trail one frame toward the current target.
    pub fn update(&mut self) {
        for line in &mut self.lines {
            line.update(self.target, self.config.dampening, self.config.tension);
        }
    }
}

/// Stroke style for a given oscillator hue.
pub fn hue_stroke_style(hue: f32) -> String {
    format!("hsla({},50%,50%,0.2)", hue.round())
}
