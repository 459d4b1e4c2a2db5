//! Per-shape SVG emitters.
//!
//! Each emitter appends exactly one element, without surrounding whitespace.

pub(crate) mod circle;
pub(crate) mod line;
pub(crate) mod text;

use std::fmt::Write as _;

use crate::paint::Color;
use crate::scene::Stroke;

/// Formats a scene-unit number with at most three decimals, trailing zeros trimmed.
pub(crate) fn fmt_num(v: f32) -> String {
    let mut s = format!("{v:.3}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}

/// SVG paint value for a color (`none` when fully transparent).
pub(crate) fn paint_value(color: Option<Color>) -> String {
    match color {
        Some(c) if !c.is_transparent() => c.to_hex(),
        _ => "none".to_string(),
    }
}

/// Appends the opacity attribute for translucent colors.
pub(crate) fn write_opacity(out: &mut String, attr: &str, color: Color) {
    if !color.is_opaque() && !color.is_transparent() {
        let _ = write!(out, r#" {attr}="{}""#, fmt_num(color.a));
    }
}

pub(crate) fn write_stroke(out: &mut String, stroke: Option<Stroke>) {
    match stroke {
        Some(s) if s.width > 0.0 => {
            let _ = write!(
                out,
                r#" stroke="{}" stroke-width="{}""#,
                paint_value(Some(s.color)),
                fmt_num(s.width)
            );
            write_opacity(out, "stroke-opacity", s.color);
        }
        _ => out.push_str(r#" stroke="none""#),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_drop_trailing_zeros() {
        assert_eq!(fmt_num(50.0), "50");
        assert_eq!(fmt_num(0.5), "0.5");
        assert_eq!(fmt_num(1.25), "1.25");
        assert_eq!(fmt_num(33.3333), "33.333");
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(-0.0001), "0");
    }

    #[test]
    fn transparent_paint_is_none() {
        assert_eq!(paint_value(None), "none");
        assert_eq!(paint_value(Some(Color::TRANSPARENT)), "none");
        assert_eq!(paint_value(Some(Color::RED)), "#ff0000");
    }
}
