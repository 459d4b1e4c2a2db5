//! Coordinate and geometry types shared by the scene and renderers.
//!
//! Canonical space:
//! - Normalized scene units (a 100×100 viewport for a clock face)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Rotations are expressed in degrees, clockwise on screen, matching the SVG
//! `rotate()` convention.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
