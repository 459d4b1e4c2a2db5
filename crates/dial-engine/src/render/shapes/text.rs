use std::fmt::Write as _;

use html_escaper::Escape;

use crate::scene::{TextAnchor, TextCmd};

use super::{fmt_num, paint_value, write_opacity};

/// `Display` adapter routing a value through `html_escaper::Escape`.
struct Escaped<'a>(&'a str);

impl std::fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.escape(f, false)
    }
}

fn anchor_value(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

/// Emits `<text>` for `DrawCmd::Text`, vertically centered on its position.
pub(crate) fn write(out: &mut String, cmd: &TextCmd) {
    let _ = write!(
        out,
        r#"<text x="{}" y="{}" font-size="{}" text-anchor="{}" dominant-baseline="central" fill="{}""#,
        fmt_num(cmd.position.x),
        fmt_num(cmd.position.y),
        fmt_num(cmd.size),
        anchor_value(cmd.anchor),
        paint_value(Some(cmd.color)),
    );
    write_opacity(out, "fill-opacity", cmd.color);
    let _ = write!(out, ">{}</text>", Escaped(&cmd.text));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    #[test]
    fn centered_label() {
        let mut out = String::new();
        let cmd = TextCmd {
            text: "12".into(),
            size: 10.0,
            color: Color::BLACK,
            position: Vec2::new(50.0, 15.0),
            anchor: TextAnchor::Middle,
        };
        write(&mut out, &cmd);
        assert_eq!(
            out,
            r##"<text x="50" y="15" font-size="10" text-anchor="middle" dominant-baseline="central" fill="#000000">12</text>"##
        );
    }

    #[test]
    fn label_markup_is_escaped() {
        let mut out = String::new();
        let cmd = TextCmd {
            text: "a<b & c>d".into(),
            size: 10.0,
            color: Color::BLACK,
            position: Vec2::new(0.0, 0.0),
            anchor: TextAnchor::Start,
        };
        write(&mut out, &cmd);
        assert!(out.ends_with(">a&lt;b &amp; c&gt;d</text>"), "{out}");
    }
}
