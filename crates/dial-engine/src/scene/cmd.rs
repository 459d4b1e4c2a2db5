use crate::scene::shapes::{CircleCmd, LineCmd, TextCmd};

/// Renderer-agnostic draw command.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - add a matching emitter under `render::shapes::*`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Circle(CircleCmd),
    Line(LineCmd),
    Text(TextCmd),
}

impl DrawCmd {
    #[inline]
    pub fn as_line(&self) -> Option<&LineCmd> {
        match self {
            DrawCmd::Line(line) => Some(line),
            _ => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&TextCmd> {
        match self {
            DrawCmd::Text(text) => Some(text),
            _ => None,
        }
    }

    #[inline]
    pub fn as_circle(&self) -> Option<&CircleCmd> {
        match self {
            DrawCmd::Circle(circle) => Some(circle),
            _ => None,
        }
    }
}
