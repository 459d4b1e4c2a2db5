use std::fmt::Write as _;

use crate::scene::LineCmd;

use super::{fmt_num, write_stroke};

/// Emits `<line>` for `DrawCmd::Line`.
pub(crate) fn write(out: &mut String, cmd: &LineCmd) {
    let _ = write!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
        fmt_num(cmd.from.x),
        fmt_num(cmd.from.y),
        fmt_num(cmd.to.x),
        fmt_num(cmd.to.y),
    );
    write_stroke(out, Some(cmd.stroke));
    out.push_str("/>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::Stroke;

    #[test]
    fn line_attributes() {
        let mut out = String::new();
        let cmd = LineCmd::new(Vec2::new(50.0, 50.0), Vec2::new(50.0, 30.0), Stroke::new(2.0, Color::RED));
        write(&mut out, &cmd);
        assert_eq!(
            out,
            r##"<line x1="50" y1="50" x2="50" y2="30" stroke="#ff0000" stroke-width="2"/>"##
        );
    }
}
