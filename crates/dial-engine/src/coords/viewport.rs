/// Scene viewport size in scene units.
///
/// Renderers map this onto their output surface; the SVG writer emits it as
/// the document `viewBox`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// The normalized 100×100 space the clock face is authored in.
    pub const UNIT_SQUARE: Viewport = Viewport::new(100.0, 100.0);

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::UNIT_SQUARE
    }
}
