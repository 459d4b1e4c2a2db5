//! Face geometry and colors.
//!
//! Everything is expressed in the normalized 100×100 scene space with the face
//! centered at (50, 50). These are fixed design constants; `FaceStyle::default()`
//! is the clock's look.

use std::time::Duration;

use dial_engine::coords::Vec2;
use dial_engine::paint::Color;
use dial_engine::scene::Stroke;

/// Interval between re-renders: 30 frames per second.
pub const REFRESH_PERIOD: Duration = Duration::from_nanos(1_000_000_000 / 30);

/// Palette slot a hand is drawn with.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HandColor {
    Primary,
    Secondary,
    Tertiary,
}

/// Resolved colors for the three palette slots.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub tertiary: Color,
}

impl Palette {
    #[inline]
    pub fn resolve(&self, slot: HandColor) -> Color {
        match slot {
            HandColor::Primary => self.primary,
            HandColor::Secondary => self.secondary,
            HandColor::Tertiary => self.tertiary,
        }
    }
}

/// Static look of one hand. Combined with an angle it becomes a [`HandSpec`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandStyle {
    pub color: HandColor,
    pub thickness: f32,
    /// Distance from the center to the tip, in scene units.
    pub length: f32,
}

impl HandStyle {
    #[inline]
    pub fn at(self, angle: f64) -> HandSpec {
        HandSpec {
            angle,
            color: self.color,
            thickness: self.thickness,
            length: self.length,
        }
    }
}

/// One hand for one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandSpec {
    /// Degrees clockwise from 12 o'clock.
    pub angle: f64,
    pub color: HandColor,
    pub thickness: f32,
    pub length: f32,
}

/// Tick mark measured inward from the rim.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TickStyle {
    pub length: f32,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FaceStyle {
    pub center: Vec2,
    pub radius: f32,
    pub ink: Color,
    /// Outline of the bounding circle.
    pub rim_width: f32,
    pub major_tick: TickStyle,
    pub minor_tick: TickStyle,
    /// Distance from the center to each numeral's midpoint.
    pub numeral_radius: f32,
    pub numeral_size: f32,
    pub center_dot_radius: f32,
    pub palette: Palette,
    pub hour_hand: HandStyle,
    pub minute_hand: HandStyle,
    pub second_hand: HandStyle,
}

impl Default for FaceStyle {
    fn default() -> Self {
        Self {
            center: Vec2::new(50.0, 50.0),
            radius: 45.0,
            ink: Color::BLACK,
            rim_width: 1.0,
            major_tick: TickStyle { length: 5.0, width: 1.0 },
            minor_tick: TickStyle { length: 2.0, width: 0.5 },
            numeral_radius: 35.0,
            numeral_size: 10.0,
            center_dot_radius: 1.5,
            palette: Palette {
                primary: Color::RED,
                secondary: Color::BLUE,
                tertiary: Color::BLACK,
            },
            hour_hand: HandStyle { color: HandColor::Primary, thickness: 2.0, length: 20.0 },
            minute_hand: HandStyle { color: HandColor::Secondary, thickness: 1.0, length: 40.0 },
            second_hand: HandStyle { color: HandColor::Tertiary, thickness: 0.5, length: 40.0 },
        }
    }
}

impl FaceStyle {
    #[inline]
    pub fn rim_stroke(&self) -> Stroke {
        Stroke::new(self.rim_width, self.ink)
    }

    /// Point at `distance` from the center, straight up (12 o'clock).
    #[inline]
    pub fn noon_point(&self, distance: f32) -> Vec2 {
        Vec2::new(self.center.x, self.center.y - distance)
    }
}
