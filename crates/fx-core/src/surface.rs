//! Shared render-surface state.
//!
//! Both effects draw onto a full-viewport canvas; this type carries the pixel
//! dimensions and the values derived from them. It intentionally references no
//! platform APIs so the simulation can be driven natively in tests.

use glam::Vec2;

/// Canvas-derived geometry, recomputed whenever the host element resizes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
    /// Rounded half-extents; the viewport center used for steering/projection.
    pub half_x: f32,
    pub half_y: f32,
    /// Depth bound of the star volume.
    pub depth: f32,
}

impl Surface {
    pub fn from_size(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            half_x: (width / 2.0).round(),
            half_y: (height / 2.0).round(),
            depth: (width + height) / 2.0,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.half_x, self.half_y)
    }

    /// Inverse depth, used to scale stroke width by proximity.
    #[inline]
    pub fn depth_ratio(&self) -> f32 {
        if self.depth > 0.0 {
            1.0 / self.depth
        } else {
            0.0
        }
    }

    /// Strictly-inside test matching the draw culling bounds.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x > 0.0 && p.x < self.width && p.y > 0.0 && p.y < self.height
    }
}
