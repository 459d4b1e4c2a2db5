use std::fmt::Write as _;

use crate::coords::Viewport;
use crate::scene::{DrawCmd, DrawList};

use super::shapes::{circle, fmt_num, line, text};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Serializes draw lists into standalone SVG documents.
///
/// The viewport is emitted as the `viewBox`; `display_width` (if any) sets the
/// document's intrinsic width, letting the viewer scale the vector content.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SvgWriter {
    pub viewport: Viewport,
    pub display_width: Option<f32>,
}

impl Default for SvgWriter {
    fn default() -> Self {
        Self {
            viewport: Viewport::UNIT_SQUARE,
            display_width: Some(200.0),
        }
    }
}

impl SvgWriter {
    #[inline]
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport, display_width: None }
    }

    #[inline]
    pub fn with_display_width(mut self, width: f32) -> Self {
        self.display_width = Some(width);
        self
    }

    /// Renders `frame` in paint order.
    pub fn write(&self, frame: &mut DrawList) -> String {
        let mut out = String::with_capacity(256 + frame.len() * 96);
        self.write_into(&mut out, frame);
        out
    }

    /// Appends the document for `frame` to `out`.
    pub fn write_into(&self, out: &mut String, frame: &mut DrawList) {
        debug_assert!(self.viewport.is_valid(), "SvgWriter: invalid viewport {:?}", self.viewport);

        // Writing into a String cannot fail.
        let _ = write!(
            out,
            r#"<svg xmlns="{SVG_NS}" viewBox="0 0 {} {}""#,
            fmt_num(self.viewport.width),
            fmt_num(self.viewport.height),
        );
        if let Some(width) = self.display_width {
            let _ = write!(out, r#" width="{}""#, fmt_num(width));
        }
        out.push_str(">\n");

        for item in frame.iter_in_paint_order() {
            out.push_str("  ");
            match &item.cmd {
                DrawCmd::Circle(cmd) => circle::write(out, cmd),
                DrawCmd::Line(cmd) => line::write(out, cmd),
                DrawCmd::Text(cmd) => text::write(out, cmd),
            }
            out.push('\n');
        }

        out.push_str("</svg>\n");
    }
}
