//! Rendering subsystem.
//!
//! Renderers consume `scene` draw streams in paint order. The engine ships a
//! vector backend that serializes a frame into a standalone SVG document; hosts
//! plug it (or their own output) in through [`RenderSink`].
//!
//! Convention:
//! - geometry is in scene units (top-left origin, +Y down)
//! - the viewport becomes the output coordinate basis (`viewBox` for SVG)

mod shapes;
mod sink;
mod svg;

pub use sink::RenderSink;
pub use svg::SvgWriter;
