use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use resvg::{tiny_skia, usvg};

/// Rasterizes an SVG file to a PNG `width` pixels wide, keeping the aspect ratio.
pub fn svg_to_png(svg_path: &Path, png_path: &Path, width: u32) -> Result<()> {
    ensure!(width > 0, "raster width must be positive");

    let data = fs::read(svg_path).with_context(|| format!("failed to read {}", svg_path.display()))?;

    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_data(&data, &options)
        .with_context(|| format!("failed to parse {}", svg_path.display()))?;

    let size = tree.size();
    let scale = width as f32 / size.width();
    let height = (size.height() * scale).ceil().max(1.0) as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .with_context(|| format!("cannot allocate a {width}x{height} pixmap"))?;
    pixmap.fill(tiny_skia::Color::WHITE);

    resvg::render(&tree, tiny_skia::Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    pixmap
        .save_png(png_path)
        .with_context(|| format!("failed to write {}", png_path.display()))?;

    log::debug!("rasterized {} -> {} ({width}x{height})", svg_path.display(), png_path.display());
    Ok(())
}
