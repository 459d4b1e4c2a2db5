use std::fmt::Write as _;

use crate::scene::CircleCmd;

use super::{fmt_num, paint_value, write_opacity, write_stroke};

/// Emits `<circle>` for `DrawCmd::Circle`.
pub(crate) fn write(out: &mut String, cmd: &CircleCmd) {
    let _ = write!(
        out,
        r#"<circle r="{}" cx="{}" cy="{}" fill="{}""#,
        fmt_num(cmd.radius),
        fmt_num(cmd.center.x),
        fmt_num(cmd.center.y),
        paint_value(cmd.fill),
    );
    if let Some(fill) = cmd.fill {
        write_opacity(out, "fill-opacity", fill);
    }
    write_stroke(out, cmd.stroke);
    out.push_str("/>");
}
