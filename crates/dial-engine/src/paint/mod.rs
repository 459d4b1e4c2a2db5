//! Paint model shared between the scene and renderers.
//!
//! Scope is deliberately narrow: flat colors for strokes, fills and text.
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
