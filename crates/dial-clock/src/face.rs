//! Clock face scene composition.
//!
//! The face is split into a time-independent decoration, built once per
//! [`FaceComposer`], and three hands rebuilt from the current angles every frame.
//!
//! Paint order of a composed frame:
//! 1) bounding circle
//! 2) major ticks
//! 3) numerals
//! 4) minor ticks
//! 5) hour, minute, second hand
//! 6) center dot

use dial_engine::scene::{CircleCmd, DrawCmd, DrawList, LineCmd, Stroke, TextAnchor, TextCmd, ZIndex};

use crate::angles::HandAngles;
use crate::style::{FaceStyle, HandSpec, TickStyle};
use crate::timestamp::Timestamp;

/// Layer of the static decoration.
pub const FACE_LAYER: ZIndex = ZIndex::BACKGROUND;
/// Layer of the hands; above every decoration primitive.
pub const HAND_LAYER: ZIndex = ZIndex::CONTENT;
/// Layer of the center dot, covering the hands' origins.
pub const CAP_LAYER: ZIndex = ZIndex::OVERLAY;

const HOURS: u8 = 12;
const MINUTES: u8 = 60;

/// Label shown at hour position `i` (`0..12`): 12 at the top, then 1 to 11.
pub fn numeral_label(i: u8) -> String {
    if i == 0 { "12".to_string() } else { i.to_string() }
}

fn rim_tick(style: &FaceStyle, tick: TickStyle, degrees: f32) -> DrawCmd {
    let upright = LineCmd::new(
        style.noon_point(style.radius),
        style.noon_point(style.radius - tick.length),
        Stroke::new(tick.width, style.ink),
    );
    DrawCmd::Line(upright.rotated_about(style.center, degrees))
}

/// One tick per hour, on the rim.
pub fn major_ticks(style: &FaceStyle) -> Vec<DrawCmd> {
    (0..HOURS)
        .map(|i| rim_tick(style, style.major_tick, f32::from(i) / f32::from(HOURS) * 360.0))
        .collect()
}

/// One tick per minute, skipping the positions already carrying a major tick.
pub fn minor_ticks(style: &FaceStyle) -> Vec<DrawCmd> {
    (0..MINUTES)
        .filter(|i| i % 5 != 0)
        .map(|i| rim_tick(style, style.minor_tick, f32::from(i) / f32::from(MINUTES) * 360.0))
        .collect()
}

/// Hour numerals, placed radially but kept upright.
pub fn numerals(style: &FaceStyle) -> Vec<DrawCmd> {
    (0..HOURS)
        .map(|i| {
            let degrees = f32::from(i) / f32::from(HOURS) * 360.0;
            DrawCmd::Text(TextCmd {
                text: numeral_label(i),
                size: style.numeral_size,
                color: style.ink,
                position: style.noon_point(style.numeral_radius).rotated_about(style.center, degrees),
                anchor: TextAnchor::Middle,
            })
        })
        .collect()
}

/// A hand: a line from the center, `spec.length` long, rotated to `spec.angle`.
pub fn hand(style: &FaceStyle, spec: HandSpec) -> DrawCmd {
    let upright = LineCmd::new(
        style.center,
        style.noon_point(spec.length),
        Stroke::new(spec.thickness, style.palette.resolve(spec.color)),
    );
    // Angles are < 360, well within f32 precision for rendering.
    DrawCmd::Line(upright.rotated_about(style.center, spec.angle as f32))
}

/// The time-independent part of the face.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceDecoration {
    /// Bounding circle, major ticks, numerals, minor ticks, in paint order.
    pub backdrop: Vec<DrawCmd>,
    pub center_dot: DrawCmd,
}

impl FaceDecoration {
    pub fn new(style: &FaceStyle) -> Self {
        let major = major_ticks(style);
        let labels = numerals(style);
        let minor = minor_ticks(style);

        let mut backdrop = Vec::with_capacity(1 + major.len() + labels.len() + minor.len());
        backdrop.push(DrawCmd::Circle(CircleCmd::outline(
            style.center,
            style.radius,
            style.rim_stroke(),
        )));
        backdrop.extend(major);
        backdrop.extend(labels);
        backdrop.extend(minor);

        Self {
            backdrop,
            center_dot: DrawCmd::Circle(CircleCmd::filled(
                style.center,
                style.center_dot_radius,
                style.ink,
            )),
        }
    }

    /// Number of primitives, center dot included.
    #[inline]
    pub fn len(&self) -> usize {
        self.backdrop.len() + 1
    }
}

/// Builds complete clock frames from timestamps.
///
/// Stateless apart from the memoized decoration: `compose_frame` is a pure
/// function of its timestamp.
#[derive(Debug, Clone)]
pub struct FaceComposer {
    style: FaceStyle,
    decoration: FaceDecoration,
}

impl Default for FaceComposer {
    fn default() -> Self {
        Self::new(FaceStyle::default())
    }
}

impl FaceComposer {
    pub fn new(style: FaceStyle) -> Self {
        let decoration = FaceDecoration::new(&style);
        Self { style, decoration }
    }

    #[inline]
    pub fn decoration(&self) -> &FaceDecoration {
        &self.decoration
    }

    /// Hour, minute and second hand for `t`, in that order.
    pub fn hands(&self, t: Timestamp) -> [HandSpec; 3] {
        let angles = HandAngles::at(t);
        [
            self.style.hour_hand.at(angles.hour),
            self.style.minute_hand.at(angles.minute),
            self.style.second_hand.at(angles.second),
        ]
    }

    /// The full scene for `t`, ready for a render sink.
    pub fn compose_frame(&self, t: Timestamp) -> DrawList {
        let mut frame = DrawList::with_capacity(self.decoration.len() + 3);

        frame.extend(FACE_LAYER, self.decoration.backdrop.iter().cloned());
        frame.extend(
            HAND_LAYER,
            self.hands(t).into_iter().map(|spec| hand(&self.style, spec)),
        );
        frame.push(CAP_LAYER, self.decoration.center_dot.clone());

        frame
    }
}
