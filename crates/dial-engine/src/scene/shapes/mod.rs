mod circle;
mod line;
mod text;

pub use circle::CircleCmd;
pub use line::LineCmd;
pub use text::{TextAnchor, TextCmd};

use crate::paint::Color;

/// Outline stroke for lines and shape edges.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    #[inline]
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
