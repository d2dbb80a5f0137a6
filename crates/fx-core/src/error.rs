use thiserror::Error;

/// Rejected effect configuration. Everything else in the core degrades
/// silently; only a config that could never animate is refused up front.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("particle quantity must be non-zero")]
    ZeroQuantity,
    #[error("steering easing must be positive and finite, got {0}")]
    BadEasing(f32),
    #[error("trail count must be non-zero")]
    ZeroTrails,
    #[error("trail length must be at least 3 nodes, got {0}")]
    TrailTooShort(usize),
    #[error("{name} must be positive and finite, got {value}")]
    BadCoefficient { name: &'static str, value: f32 },
}
