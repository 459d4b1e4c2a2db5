use crate::coords::Vec2;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Stroke;

/// Straight line segment payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub stroke: Stroke,
}

impl LineCmd {
    #[inline]
    pub fn new(from: Vec2, to: Vec2, stroke: Stroke) -> Self {
        Self { from, to, stroke }
    }

    /// Segment rotated as a whole around `pivot` (clockwise degrees).
    #[inline]
    pub fn rotated_about(&self, pivot: Vec2, degrees: f32) -> Self {
        Self {
            from: self.from.rotated_about(pivot, degrees),
            to: self.to.rotated_about(pivot, degrees),
            stroke: self.stroke,
        }
    }

    #[inline]
    pub fn length(&self) -> f32 {
        (self.to - self.from).length()
    }
}

impl DrawList {
    /// Records a line draw command.
    #[inline]
    pub fn push_line(&mut self, z: ZIndex, from: Vec2, to: Vec2, stroke: Stroke) {
        self.push(z, DrawCmd::Line(LineCmd::new(from, to, stroke)));
    }
}
