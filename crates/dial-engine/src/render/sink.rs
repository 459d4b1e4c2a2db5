use anyhow::Result;

use crate::scene::DrawList;

/// Destination for rendered frames.
///
/// A sink receives one complete frame per call, already ordered back-to-front
/// through [`DrawList::iter_in_paint_order`]. Producers treat an unavailable sink
/// as a soft condition: the frame is dropped, nothing is retried.
pub trait RenderSink {
    /// Whether the sink can accept a frame right now.
    fn is_available(&self) -> bool {
        true
    }

    /// Displays (or records) one frame.
    fn present(&mut self, frame: &mut DrawList) -> Result<()>;
}

impl<S: RenderSink + ?Sized> RenderSink for Box<S> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn present(&mut self, frame: &mut DrawList) -> Result<()> {
        (**self).present(frame)
    }
}
