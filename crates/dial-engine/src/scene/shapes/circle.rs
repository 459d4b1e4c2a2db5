use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Stroke;

/// Circle draw payload.
///
/// `fill: None` leaves the interior transparent.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, fill: Option<Color>, stroke: Option<Stroke>) -> Self {
        Self { center, radius, fill, stroke }
    }

    /// Unfilled ring.
    #[inline]
    pub fn outline(center: Vec2, radius: f32, stroke: Stroke) -> Self {
        Self::new(center, radius, None, Some(stroke))
    }

    /// Solid disc without an outline.
    #[inline]
    pub fn filled(center: Vec2, radius: f32, color: Color) -> Self {
        Self::new(center, radius, Some(color), None)
    }
}

impl DrawList {
    /// Records a circle draw command.
    #[inline]
    pub fn push_circle(&mut self, z: ZIndex, circle: CircleCmd) {
        self.push(z, DrawCmd::Circle(circle));
    }

    /// Records a solid circle.
    #[inline]
    pub fn push_solid_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, color: Color) {
        self.push_circle(z, CircleCmd::filled(center, radius, color));
    }
}
