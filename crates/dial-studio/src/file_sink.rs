use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use dial_engine::render::{RenderSink, SvgWriter};
use dial_engine::scene::DrawList;

/// Writes every frame to one SVG file.
///
/// Frames go to a sibling temp file that is then renamed over the target, so a
/// viewer polling the file never reads a partial document.
pub struct SvgFileSink {
    path: PathBuf,
    tmp_path: PathBuf,
    writer: SvgWriter,
    buf: String,
}

impl SvgFileSink {
    pub fn new(path: impl Into<PathBuf>, writer: SvgWriter) -> Self {
        let path = path.into();
        let mut tmp_path = path.clone().into_os_string();
        tmp_path.push(".tmp");
        Self { path, tmp_path: tmp_path.into(), writer, buf: String::new() }
    }
}

impl RenderSink for SvgFileSink {
    fn is_available(&self) -> bool {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.is_dir(),
            _ => true,
        }
    }

    fn present(&mut self, frame: &mut DrawList) -> Result<()> {
        self.buf.clear();
        self.writer.write_into(&mut self.buf, frame);

        fs::write(&self.tmp_path, self.buf.as_bytes())
            .with_context(|| format!("failed to write {}", self.tmp_path.display()))?;
        fs::rename(&self.tmp_path, &self.path)
            .with_context(|| format!("failed to replace {}", self.path.display()))?;
        Ok(())
    }
}
